use crate::errors::{AppError, StoreAccessError};
use std::{path::Path, process::Command};

/// Hands the file to whatever the desktop associates with it (a spreadsheet
/// program for the roster). Returns once the viewer has been spawned.
pub fn open_in_default_app(path: &Path) -> Result<(), AppError> {
    if !path.exists() {
        return Err(AppError::Store(StoreAccessError::Error(format!(
            "'{}' does not exist yet",
            path.display()
        ))));
    }
    let mut command = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };
    command
        .spawn()
        .map(|_| ())
        .map_err(|e| AppError::Store(StoreAccessError::from(e)))
}

/// Splits a comma separated list of labels. Blank entries keep their slot
/// and get a generated label at draw time.
pub fn split_labels(s: &str) -> Vec<String> {
    if s.trim().is_empty() {
        return vec![];
    }
    s.split(',').map(|l| l.trim().to_string()).collect()
}
