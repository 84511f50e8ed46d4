use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("store error: {0}")]
    Store(#[from] StoreAccessError),
}

impl AppError {
    /// Store failures usually go away once the user closes whatever holds the file.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Store(e) if !matches!(e, StoreAccessError::NotFound(_)))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("invalid age '{0}'")]
    InvalidAge(String),
    #[error("invalid position '{0}'")]
    InvalidPosition(String),
    #[error("invalid language '{0}'")]
    InvalidLanguage(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("the roster is empty")]
    EmptyRoster,
    #[error("at least {required} players are needed, found {found}")]
    NotEnoughPlayers { required: usize, found: usize },
    #[error(
        "invalid team count {0}: must be between {} and {}",
        crate::constants::MIN_TEAM_COUNT,
        crate::constants::MAX_TEAM_COUNT
    )]
    InvalidTeamCount(usize),
    #[error("invalid team count {teams}: must be between 2 and {players}")]
    TooManyTeams { teams: usize, players: usize },
    #[error("invalid seed '{0}'")]
    InvalidSeed(String),
    #[error("invalid argument '{0}'")]
    InvalidArgument(String),
}

#[derive(Debug, Error)]
pub enum StoreAccessError {
    #[error("the roster file is locked by another process, close the file and try again ({0})")]
    Locked(String),
    #[error("player {0} not found")]
    NotFound(Uuid),
    #[error("IO error: {0}")]
    Error(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl From<std::io::Error> for StoreAccessError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::WouldBlock => {
                StoreAccessError::Locked(e.to_string())
            }
            _ => StoreAccessError::Error(e.to_string()),
        }
    }
}

impl From<csv::Error> for StoreAccessError {
    fn from(e: csv::Error) -> Self {
        match e.kind() {
            csv::ErrorKind::Io(io) => StoreAccessError::from(std::io::Error::new(
                io.kind(),
                io.to_string(),
            )),
            csv::ErrorKind::Utf8 { .. } => StoreAccessError::Encoding(e.to_string()),
            _ => StoreAccessError::Serialization(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for StoreAccessError {
    fn from(e: serde_json::Error) -> Self {
        StoreAccessError::Serialization(e.to_string())
    }
}
