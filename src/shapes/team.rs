use crate::shapes::{enums::PositionEnum, player::PlayerEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TeamEntry {
    pub label: String,
    pub players: Vec<PlayerEntry>,
}

impl TeamEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            players: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn goalkeeper_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_goalkeeper()).count()
    }

    pub fn position_count(&self, position: PositionEnum) -> usize {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .count()
    }

    pub fn age_sum(&self) -> u64 {
        self.players.iter().map(|p| p.age as u64).sum()
    }

    /// Mean age of the current members, `None` for an empty team.
    pub fn mean_age(&self) -> Option<f64> {
        if self.players.is_empty() {
            None
        } else {
            Some(self.age_sum() as f64 / self.players.len() as f64)
        }
    }

    /// Goalkeepers first, then everybody else by ascending age. The sort is
    /// stable so equal ages keep their draw order.
    pub fn sort_for_display(&mut self) {
        self.players
            .sort_by_key(|p| (!p.is_goalkeeper(), if p.is_goalkeeper() { 0 } else { p.age }));
    }
}
