use crate::{
    constants::DEFAULT_TEAM_COUNT,
    shapes::{enums::BalanceModeEnum, team::TeamEntry},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DrawConfig {
    pub team_count: usize,
    #[serde(default)]
    pub team_labels: Vec<String>,
    #[serde(default)]
    pub balance_mode: BalanceModeEnum,
    /// fixed seed for a reproducible draw, a fresh one is picked when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// refuse more teams than players
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            team_count: DEFAULT_TEAM_COUNT,
            team_labels: vec![],
            balance_mode: BalanceModeEnum::default(),
            seed: None,
            strict: true,
        }
    }
}

impl DrawConfig {
    pub fn new(team_count: usize, balance_mode: BalanceModeEnum) -> Self {
        Self {
            team_count,
            balance_mode,
            ..Self::default()
        }
    }

    pub fn with_labels<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
        self.team_labels = labels.iter().map(|l| l.as_ref().to_string()).collect();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Exactly `team_count` labels: configured ones trimmed, blanks and
    /// missing entries replaced by `"<team_word> <n>"` (1-based).
    pub fn resolved_labels(&self, team_word: &str) -> Vec<String> {
        (0..self.team_count)
            .map(|i| {
                self.team_labels
                    .get(i)
                    .map(|l| l.trim())
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} {}", team_word, i + 1))
            })
            .collect()
    }
}

/// Result of a draw together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    pub seed: u64,
    pub teams: Vec<TeamEntry>,
}
