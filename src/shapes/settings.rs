use crate::{
    constants::{DEFAULT_AGE, DEFAULT_LANGUAGE, DEFAULT_TEAM_COUNT, DEFAULT_TEAM_LABELS},
    shapes::{
        draw::DrawConfig,
        enums::{BalanceModeEnum, LanguageEnum, ValidationPolicyEnum},
    },
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_language")]
    pub language: LanguageEnum,
    #[serde(default = "default_team_count")]
    pub team_count: usize,
    #[serde(default = "default_team_labels")]
    pub team_labels: Vec<String>,
    #[serde(default)]
    pub balance_mode: BalanceModeEnum,
    #[serde(default = "default_strict_team_count")]
    pub strict_team_count: bool,
    #[serde(default)]
    pub validation_policy: ValidationPolicyEnum,
    #[serde(default = "default_age")]
    pub default_age: u8,
    /// roster location override, `<base>/players.csv` otherwise
    #[serde(default)]
    pub roster_file: Option<PathBuf>,
}

fn default_language() -> LanguageEnum {
    LanguageEnum::from_str(DEFAULT_LANGUAGE).unwrap_or_default()
}

fn default_team_count() -> usize {
    DEFAULT_TEAM_COUNT
}

fn default_team_labels() -> Vec<String> {
    DEFAULT_TEAM_LABELS.iter().map(|l| l.to_string()).collect()
}

fn default_strict_team_count() -> bool {
    true
}

fn default_age() -> u8 {
    DEFAULT_AGE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: default_language(),
            team_count: default_team_count(),
            team_labels: default_team_labels(),
            balance_mode: BalanceModeEnum::default(),
            strict_team_count: default_strict_team_count(),
            validation_policy: ValidationPolicyEnum::default(),
            default_age: default_age(),
            roster_file: None,
        }
    }
}

impl Settings {
    pub fn draw_config(&self) -> DrawConfig {
        DrawConfig {
            strict: self.strict_team_count,
            ..DrawConfig::new(self.team_count, self.balance_mode)
                .with_labels(self.team_labels.as_slice())
        }
    }

    /// Remembers the parameters of the last draw so the next session starts
    /// from them.
    pub fn with_last_draw(&self, config: &DrawConfig) -> Settings {
        Settings {
            team_count: config.team_count,
            team_labels: config.team_labels.clone(),
            balance_mode: config.balance_mode,
            ..self.clone()
        }
    }
}
