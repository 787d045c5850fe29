use std::num::IntErrorKind;

use crate::{Error, Result};

pub const DEFAULT_COUNT: u32 = 20;
pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 20;

pub struct CountValidator;

impl CountValidator {
    /// Validates the optional row count of the mood routes.
    ///
    /// - absent: [`DEFAULT_COUNT`]
    /// - integer in `MIN_COUNT..=MAX_COUNT`: unchanged
    /// - any other integer: reset to [`DEFAULT_COUNT`], not clamped to the closest bound
    /// - anything else: [`Error::InvalidParameter`]
    pub fn validate(raw: Option<&str>) -> Result<u32> {
        let Some(raw) = raw else {
            return Ok(DEFAULT_COUNT);
        };

        match raw.parse::<i64>() {
            Ok(count) if (MIN_COUNT as i64..=MAX_COUNT as i64).contains(&count) => Ok(count as u32),
            Ok(_) => Ok(DEFAULT_COUNT),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Ok(DEFAULT_COUNT)
            }
            Err(_) => Err(Error::InvalidParameter {
                name: "count".to_string(),
                value: raw.to_string(),
            }),
        }
    }
}
