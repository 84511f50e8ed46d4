use crate::shapes::{enums::PositionEnum, player::PlayerEntry, team::TeamEntry};

/// Everything a presentation surface shows for one drawn team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub label: String,
    pub size: usize,
    pub mean_age: Option<u32>,
    /// positions in order of first appearance within the team
    pub positions: Vec<(PositionEnum, usize)>,
    pub players: Vec<PlayerEntry>,
}

impl From<&TeamEntry> for TeamSummary {
    fn from(team: &TeamEntry) -> Self {
        let mut positions: Vec<(PositionEnum, usize)> = Vec::new();
        for player in &team.players {
            match positions.iter_mut().find(|(p, _)| *p == player.position) {
                Some((_, count)) => *count += 1,
                None => positions.push((player.position, 1)),
            }
        }
        Self {
            label: team.label.clone(),
            size: team.len(),
            // half away from zero
            mean_age: team.mean_age().map(|m| m.round() as u32),
            positions,
            players: team.players.clone(),
        }
    }
}
