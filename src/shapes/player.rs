use crate::shapes::enums::PositionEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub id: Uuid,
    pub name: String,
    pub age: u8,
    pub position: PositionEnum,
}

impl PlayerEntry {
    pub fn new(name: impl Into<String>, age: u8, position: PositionEnum) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            position,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }
}

impl std::fmt::Display for PlayerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.position, self.age)
    }
}
