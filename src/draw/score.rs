use crate::{
    constants::POSITION_WEIGHT,
    shapes::{enums::PositionEnum, team::TeamEntry},
};
use std::cmp::Ordering;

/// Cost of adding a player of a given position to a team:
/// `POSITION_WEIGHT * same_position_count + mean_age`, with a mean age of
/// zero for an empty team.
///
/// Kept as the exact fraction `numerator / denominator` so that two teams
/// with the same score compare equal and enter the tie-break together.
#[derive(Debug, Clone, Copy)]
pub struct Score {
    numerator: u64,
    denominator: u64,
}

impl Score {
    pub fn new(same_position: usize, age_sum: u64, members: usize) -> Self {
        let denominator = members.max(1) as u64;
        Self {
            numerator: POSITION_WEIGHT * same_position as u64 * denominator + age_sum,
            denominator,
        }
    }

    pub fn for_team(team: &TeamEntry, position: PositionEnum) -> Self {
        Self::new(team.position_count(position), team.age_sum(), team.len())
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as u128 * other.denominator as u128;
        let rhs = other.numerator as u128 * self.denominator as u128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}
