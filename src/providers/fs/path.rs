use crate::{
    constants::{APP_DIR_NAME, APP_HOME_ENV_VAR, CONFIG_FILE_NAME, LOG_FILE_NAME, ROSTER_FILE_NAME},
    errors::{AppError, StoreAccessError},
    localization::current_labels,
    shapes::settings::Settings,
};
use dirs::home_dir;
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

/// `$PELADA_HOME` when set, `~/.pelada` otherwise. Created on demand.
pub fn get_base_path() -> Result<PathBuf, AppError> {
    let path = match std::env::var_os(APP_HOME_ENV_VAR) {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let mut path = home_dir().ok_or(AppError::Store(StoreAccessError::Error(
                current_labels()
                    .could_not_recognize_home_directory
                    .to_string(),
            )))?;
            path.push(APP_DIR_NAME);
            path
        }
    };
    if !path.exists() {
        create_dir_all(&path).map_err(|_| {
            AppError::Store(StoreAccessError::Error(
                current_labels().could_not_create_app_directory.to_string(),
            ))
        })?;
    }
    Ok(path)
}

pub fn get_roster_file_path(base_path: &Path, settings: &Settings) -> PathBuf {
    match &settings.roster_file {
        Some(custom) if custom.is_absolute() => custom.clone(),
        Some(custom) => base_path.join(custom),
        None => base_path.join(ROSTER_FILE_NAME),
    }
}

pub fn get_config_file_path(base_path: &Path) -> PathBuf {
    base_path.join(CONFIG_FILE_NAME)
}

pub fn get_log_file_path(base_path: &Path) -> PathBuf {
    base_path.join(LOG_FILE_NAME)
}
