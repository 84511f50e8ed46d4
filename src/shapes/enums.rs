use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{errors::ValidationError, localization::Labels};

pub trait FriendlyName {
    fn friendly_name(&self, labels: &Labels) -> &'static str;
}

/// Lower-cases the input and folds the Portuguese accents so that `Pivô`,
/// `pivo` and `PIVO` compare equal.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            ' ' | '_' => '-',
            c => c,
        })
        .collect()
}

/// Playing position of a registered player.
///
/// Covers both field soccer and futsal vocabulary, since pickup games mix
/// the two:
///
/// - **Goalkeeper** (goleiro): the only position with a hard cap, a draw
///   never puts more goalkeepers on a team than strictly necessary.
/// - **CentreBack** (zagueiro) and **FullBack** (lateral): defenders.
/// - **Midfielder** (meio, meia).
/// - **Forward** (atacante).
/// - **Fixo**, **Winger** (ala) and **Pivot** (pivô): futsal roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionEnum {
    Goalkeeper,
    CentreBack,
    FullBack,
    Midfielder,
    Forward,
    Fixo,
    Winger,
    Pivot,
}

impl PositionEnum {
    pub const ALL: [PositionEnum; 8] = [
        PositionEnum::Goalkeeper,
        PositionEnum::CentreBack,
        PositionEnum::FullBack,
        PositionEnum::Midfielder,
        PositionEnum::Forward,
        PositionEnum::Fixo,
        PositionEnum::Winger,
        PositionEnum::Pivot,
    ];

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PositionEnum::Goalkeeper)
    }
}

impl FriendlyName for PositionEnum {
    fn friendly_name(&self, labels: &Labels) -> &'static str {
        match self {
            PositionEnum::Goalkeeper => labels.goalkeeper,
            PositionEnum::CentreBack => labels.centre_back,
            PositionEnum::FullBack => labels.full_back,
            PositionEnum::Midfielder => labels.midfielder,
            PositionEnum::Forward => labels.forward,
            PositionEnum::Fixo => labels.fixo,
            PositionEnum::Winger => labels.winger,
            PositionEnum::Pivot => labels.pivot,
        }
    }
}

impl fmt::Display for PositionEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PositionEnum::Goalkeeper => "goalkeeper",
            PositionEnum::CentreBack => "centre-back",
            PositionEnum::FullBack => "full-back",
            PositionEnum::Midfielder => "midfielder",
            PositionEnum::Forward => "forward",
            PositionEnum::Fixo => "fixo",
            PositionEnum::Winger => "winger",
            PositionEnum::Pivot => "pivot",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for PositionEnum {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "goalkeeper" | "goleiro" | "gk" => Ok(PositionEnum::Goalkeeper),
            "centre-back" | "center-back" | "defender" | "zagueiro" => {
                Ok(PositionEnum::CentreBack)
            }
            "full-back" | "lateral" => Ok(PositionEnum::FullBack),
            "midfielder" | "meio" | "meia" => Ok(PositionEnum::Midfielder),
            "forward" | "striker" | "atacante" => Ok(PositionEnum::Forward),
            "fixo" => Ok(PositionEnum::Fixo),
            "winger" | "ala" => Ok(PositionEnum::Winger),
            "pivot" | "pivo" => Ok(PositionEnum::Pivot),
            _ => Err(ValidationError::InvalidPosition(s.to_string())),
        }
    }
}

/// How a draw distributes players.
///
/// - **Random**: shuffle and deal round-robin, no age or position balancing.
/// - **Balanced**: greedy position/age scoring on top of the goalkeeper cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BalanceModeEnum {
    Random,
    #[default]
    Balanced,
}

impl FriendlyName for BalanceModeEnum {
    fn friendly_name(&self, labels: &Labels) -> &'static str {
        match self {
            BalanceModeEnum::Random => labels.random,
            BalanceModeEnum::Balanced => labels.balanced,
        }
    }
}

impl fmt::Display for BalanceModeEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BalanceModeEnum::Random => "random",
            BalanceModeEnum::Balanced => "balanced",
        };
        write!(f, "{}", label)
    }
}

/// What happens to a malformed age or position coming from user input or
/// from the roster file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicyEnum {
    Reject,
    #[default]
    DefaultWithWarning,
}

impl fmt::Display for ValidationPolicyEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationPolicyEnum::Reject => "reject",
            ValidationPolicyEnum::DefaultWithWarning => "default-with-warning",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageEnum {
    #[default]
    En,
    Pt,
}

impl fmt::Display for LanguageEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LanguageEnum::En => "en",
            LanguageEnum::Pt => "pt",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for LanguageEnum {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "en" | "english" => Ok(LanguageEnum::En),
            "pt" | "pt-br" | "portugues" => Ok(LanguageEnum::Pt),
            _ => Err(ValidationError::InvalidLanguage(s.to_string())),
        }
    }
}
