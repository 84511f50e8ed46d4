pub const APP_DIR_NAME: &str = ".pelada";
pub const APP_HOME_ENV_VAR: &str = "PELADA_HOME";
pub const ROSTER_FILE_NAME: &str = "players.csv";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "pelada.log";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_AGE: u8 = 25;
pub const MIN_AGE: u8 = 10;
pub const MAX_AGE: u8 = 70;
pub const DEFAULT_TEAM_COUNT: usize = 2;
pub const MIN_TEAM_COUNT: usize = 2;
pub const MAX_TEAM_COUNT: usize = 20;
pub const MIN_PLAYERS: usize = 2;
/// one same-position teammate outweighs any realistic mean-age gap
pub const POSITION_WEIGHT: u64 = 100;
pub const DEFAULT_TEAM_LABELS: [&str; 5] = ["Yellow", "Blue", "Green", "Red", "White"];
