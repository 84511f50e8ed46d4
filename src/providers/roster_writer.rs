use crate::{
    errors::AppError,
    shapes::{enums::PositionEnum, player::PlayerEntry},
};
use async_trait::async_trait;
use uuid::Uuid;

pub enum PlayerInput {
    New {
        name: String,
        age: u8,
        position: PositionEnum,
    },
    Existing(PlayerEntry),
}

/// Mutations of the roster. `roster` is the caller's current copy; it is
/// updated in place and then persisted as a whole.
#[async_trait]
pub trait RosterWriter {
    async fn save(
        &self,
        player: PlayerInput,
        roster: &mut Vec<PlayerEntry>,
    ) -> Result<PlayerEntry, AppError>;
    async fn remove(
        &self,
        player_id: &Uuid,
        roster: &mut Vec<PlayerEntry>,
    ) -> Result<PlayerEntry, AppError>;
}
