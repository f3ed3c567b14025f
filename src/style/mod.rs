//! Style system for typed style bundles.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleValue`]: a single typed style quantity
//! - [`StyleBundle`]: an ordered, read-only set of named properties
//! - [`StyleParseError`]: errors from parsing value text
//!
//! Values keep the exact CSS-like text forms a styling system consumes,
//! and bundles keep insertion order, so a serialized bundle has the same
//! shape as the object it models.

mod bundle;
mod error;
mod value;

pub use bundle::StyleBundle;
pub use error::StyleParseError;
pub use value::{LengthUnit, LineStyle, StyleValue};
