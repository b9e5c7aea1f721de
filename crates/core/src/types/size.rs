//! Numeric product sizes (ring sizes like `5`, `6.5`).
//!
//! Sizes are exact decimals so availability rules can compare with plain
//! equality: `7` and `7.0` are the same size, `6.5` is never `6.4999`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a size string is not a decimal number.
#[derive(Debug, Error)]
#[error("invalid size '{input}': {source}")]
pub struct SizeParseError {
    input: String,
    source: rust_decimal::Error,
}

/// A selectable product size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(Decimal);

impl Size {
    /// Create a size from a decimal value.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Size {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<u32> for Size {
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

impl FromStr for Size {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|source| SizeParseError {
                input: trimmed.to_owned(),
                source,
            })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
