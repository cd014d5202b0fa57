use std::fmt;
use std::num::NonZeroU64;

use serde::Deserialize;

use crate::error::ValidationError;

/// A request or concurrency count; zero is never a valid benchmark shape.
///
/// Deserializes from a plain integer so config files are checked on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u64")]
pub struct PositiveU64(NonZeroU64);

impl PositiveU64 {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for PositiveU64 {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match NonZeroU64::new(value) {
            Some(count) => Ok(Self(count)),
            None => Err(ValidationError::ValueTooSmall { min: 1 }),
        }
    }
}

impl std::str::FromStr for PositiveU64 {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map_err(|err| ValidationError::InvalidNumber { source: err })
            .and_then(Self::try_from)
    }
}

impl fmt::Display for PositiveU64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
