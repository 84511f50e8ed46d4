use crate::{
    errors::{AppError, StoreAccessError},
    providers::{fs::roster_file::read_roster, roster_reader::RosterReader},
    shapes::player::PlayerEntry,
    validation::InputPolicy,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::task::spawn_blocking;
use uuid::Uuid;

pub struct FileSystemRosterReader {
    path: PathBuf,
    policy: InputPolicy,
}

impl FileSystemRosterReader {
    pub fn new(roster_path: &Path, policy: InputPolicy) -> Self {
        Self {
            path: roster_path.to_path_buf(),
            policy,
        }
    }
}

#[async_trait]
impl RosterReader for FileSystemRosterReader {
    async fn read_all(&self) -> Result<Vec<PlayerEntry>, AppError> {
        let path = self.path.clone();
        let policy = self.policy;
        spawn_blocking(move || read_roster(&path, &policy))
            .await
            .map_err(|e| {
                AppError::Store(StoreAccessError::Error(format!("tokio join error: {}", e)))
            })?
    }

    async fn read_single(&self, player_id: &Uuid) -> Result<PlayerEntry, AppError> {
        self.read_all()
            .await?
            .into_iter()
            .find(|p| p.id == *player_id)
            .ok_or(AppError::Store(StoreAccessError::NotFound(*player_id)))
    }
}
