//! Core domain models for tokcount
//!
//! This crate contains:
//! - Pricing table (model id to price per 1K tokens)
//! - Highlight palette for the token breakdown
//! - Breakdown render model shared by every view

pub mod breakdown;
pub mod error;
pub mod palette;
pub mod pricing;

pub use breakdown::{Breakdown, TokenSpan};
pub use error::{Error, Result};
pub use palette::{Palette, PaletteColor};
pub use pricing::{ModelPrice, PricingTable, format_cost};

/// Text loaded by "Show Example" and shown on first start
pub const EXAMPLE_TEXT: &str = "Some words become one token, but others, like \"indivisible\", don't. \nEmojis like 🤚🏾 can turn into many tokens. \n\nCharacters often seen together, like \"1234567890\", may become one token.";
