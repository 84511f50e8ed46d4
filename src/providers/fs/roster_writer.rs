use crate::{
    errors::{AppError, StoreAccessError, ValidationError},
    providers::{
        fs::roster_file::write_roster,
        roster_writer::{PlayerInput, RosterWriter},
    },
    shapes::player::PlayerEntry,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::task::spawn_blocking;
use uuid::Uuid;

pub struct FileSystemRosterWriter(PathBuf);

impl FileSystemRosterWriter {
    pub fn new(roster_path: &Path) -> Self {
        Self(roster_path.to_path_buf())
    }

    async fn save_roster_file(roster: &[PlayerEntry], path: &Path) -> Result<(), AppError> {
        let roster = roster.to_vec();
        let path = path.to_path_buf();
        spawn_blocking(move || write_roster(&path, &roster))
            .await
            .map_err(|e| {
                AppError::Store(StoreAccessError::Error(format!("tokio join error: {}", e)))
            })?
    }
}

#[async_trait]
impl RosterWriter for FileSystemRosterWriter {
    async fn save(
        &self,
        input: PlayerInput,
        roster: &mut Vec<PlayerEntry>,
    ) -> Result<PlayerEntry, AppError> {
        let player = match input {
            PlayerInput::New {
                name,
                age,
                position,
            } => PlayerEntry::new(name.trim(), age, position),
            PlayerInput::Existing(existing) => PlayerEntry {
                name: existing.name.trim().to_string(),
                ..existing
            },
        };
        if player.name.is_empty() {
            return Err(AppError::Validation(ValidationError::EmptyName));
        }
        let mut updated = roster.clone();
        if let Some(existing) = updated.iter_mut().find(|p| p.id == player.id) {
            *existing = player.clone();
        } else {
            updated.push(player.clone());
        }
        // the caller's copy only changes once the file is written
        Self::save_roster_file(&updated, &self.0).await?;
        *roster = updated;
        Ok(player)
    }

    async fn remove(
        &self,
        player_id: &Uuid,
        roster: &mut Vec<PlayerEntry>,
    ) -> Result<PlayerEntry, AppError> {
        let index = roster
            .iter()
            .position(|p| p.id == *player_id)
            .ok_or(AppError::Store(StoreAccessError::NotFound(*player_id)))?;
        let mut updated = roster.clone();
        let removed = updated.remove(index);
        Self::save_roster_file(&updated, &self.0).await?;
        *roster = updated;
        Ok(removed)
    }
}
