//! Prayan Core - Shared domain types.
//!
//! This crate provides the domain model shared by the Prayan Masale
//! storefront components:
//! - `storefront` - Public-facing web storefront
//! - `integration-tests` - End-to-end test harness
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no HTTP, no
//! filesystem access. This keeps it lightweight and allows the cart to be
//! tested without spinning up a server.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and heat levels
//! - [`catalog`] - Product, variant, and category entities
//! - [`cart`] - The shopping cart and its derived totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{Cart, CartItem};
pub use catalog::{Category, Product, Variant};
pub use types::*;
