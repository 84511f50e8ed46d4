use crate::{
    constants::{MAX_AGE, MIN_AGE},
    errors::ValidationError,
    localization::current_labels,
    shapes::enums::{PositionEnum, ValidationPolicyEnum},
};
use std::str::FromStr;

/// A value accepted by the validation policy, with the reason it was
/// replaced by a default when that happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T> {
    pub value: T,
    pub warning: Option<String>,
}

impl<T> Validated<T> {
    fn accepted(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    fn defaulted(value: T, warning: String) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }
}

/// Input policy applied to raw player fields, from the entry form and from
/// the roster file alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPolicy {
    pub policy: ValidationPolicyEnum,
    pub default_age: u8,
}

impl InputPolicy {
    pub fn new(policy: ValidationPolicyEnum, default_age: u8) -> Self {
        Self {
            policy,
            default_age,
        }
    }

    /// Names are never defaulted: an empty name is always an error.
    pub fn name(&self, raw: &str) -> Result<String, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            Err(ValidationError::EmptyName)
        } else {
            Ok(name.to_string())
        }
    }

    pub fn age(&self, raw: &str) -> Result<Validated<u8>, ValidationError> {
        match raw.trim().parse::<u8>() {
            Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(Validated::accepted(age)),
            _ => match self.policy {
                ValidationPolicyEnum::Reject => Err(ValidationError::InvalidAge(raw.to_string())),
                ValidationPolicyEnum::DefaultWithWarning => Ok(Validated::defaulted(
                    self.default_age,
                    format!(
                        "{}: {} '{}' -> {}",
                        current_labels().value_defaulted,
                        current_labels().age,
                        raw,
                        self.default_age
                    ),
                )),
            },
        }
    }

    pub fn position(&self, raw: &str) -> Result<Validated<PositionEnum>, ValidationError> {
        match PositionEnum::from_str(raw) {
            Ok(position) => Ok(Validated::accepted(position)),
            Err(e) => match self.policy {
                ValidationPolicyEnum::Reject => Err(e),
                ValidationPolicyEnum::DefaultWithWarning => Ok(Validated::defaulted(
                    PositionEnum::Midfielder,
                    format!(
                        "{}: {} '{}' -> {}",
                        current_labels().value_defaulted,
                        current_labels().position,
                        raw,
                        PositionEnum::Midfielder
                    ),
                )),
            },
        }
    }
}
