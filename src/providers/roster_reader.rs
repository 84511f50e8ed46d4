use crate::{errors::AppError, shapes::player::PlayerEntry};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait RosterReader {
    async fn read_all(&self) -> Result<Vec<PlayerEntry>, AppError>;
    async fn read_single(&self, player_id: &Uuid) -> Result<PlayerEntry, AppError>;
}
