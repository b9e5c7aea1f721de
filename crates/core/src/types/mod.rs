//! Core types for Lexic.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod selection;
pub mod size;

pub use id::*;
pub use price::{DEFAULT_CURRENCY_SYMBOL, Price, format_price};
pub use selection::{Selection, title_case};
pub use size::{Size, SizeParseError};
