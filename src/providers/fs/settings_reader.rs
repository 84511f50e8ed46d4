use crate::{
    constants::{
        DEFAULT_AGE, DEFAULT_TEAM_COUNT, MAX_AGE, MAX_TEAM_COUNT, MIN_AGE, MIN_TEAM_COUNT,
    },
    errors::{AppError, StoreAccessError},
    logging::logger::{log_error, log_info, log_warning},
    providers::{fs::path::get_config_file_path, settings_reader::SettingsReader},
    shapes::settings::Settings,
};
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::fs::read_to_string;

/// Reads `config.json` under the base directory. A first run has no file yet
/// and gets the defaults.
pub struct FileSystemSettingsReader(PathBuf);

impl FileSystemSettingsReader {
    pub fn new(base_path: &Path) -> Self {
        Self(base_path.to_path_buf())
    }
}

/// Out of range values left by hand edits fall back to their defaults.
fn repair(mut settings: Settings) -> Settings {
    if !(MIN_TEAM_COUNT..=MAX_TEAM_COUNT).contains(&settings.team_count) {
        log_warning(&format!(
            "team count {} in settings is out of range, using {}",
            settings.team_count, DEFAULT_TEAM_COUNT
        ));
        settings.team_count = DEFAULT_TEAM_COUNT;
    }
    if !(MIN_AGE..=MAX_AGE).contains(&settings.default_age) {
        log_warning(&format!(
            "default age {} in settings is out of range, using {}",
            settings.default_age, DEFAULT_AGE
        ));
        settings.default_age = DEFAULT_AGE;
    }
    settings
}

#[async_trait]
impl SettingsReader for FileSystemSettingsReader {
    async fn read(&self) -> Result<Settings, AppError> {
        let path = get_config_file_path(&self.0);
        let content = match read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log_info(&format!("no settings at {}, using defaults", path.display()));
                return Ok(Settings::default());
            }
            Err(e) => {
                log_error(&format!("could not read {}: {}", path.display(), e));
                return Err(AppError::Store(StoreAccessError::from(e)));
            }
        };
        let settings = serde_json::from_str::<Settings>(&content).map_err(|e| {
            log_error(&format!("malformed settings in {}: {}", path.display(), e));
            AppError::Store(StoreAccessError::from(e))
        })?;
        Ok(repair(settings))
    }
}
