//! Core types for the Prayan Masale storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod heat;
pub mod id;
pub mod price;

pub use heat::{HeatLevel, HeatLevelError};
pub use id::*;
pub use price::{CurrencyCode, Price};
