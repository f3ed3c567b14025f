//! Typed, immutable style bundles for UI components.
//!
//! `sxbundle` models the style objects a UI styling system consumes as
//! ordered, read-only bundles of typed values. A bundle is built once with
//! a fluent builder, holds heterogeneous quantities (bare numbers,
//! unit-bearing lengths, percentages, layout keywords, semantic theme
//! tokens), and serializes to exactly the plain key-value shape the
//! consuming component applies to its root element.
//!
//! The crate exposes:
//!
//! - [`StyleValue`]: a single typed style quantity with a canonical
//!   CSS-like text form
//! - [`StyleBundle`]: an ordered, read-only set of named properties
//! - [`config_modal`]: the bundle positioning and sizing the configuration
//!   viewer modal
//!
//! Semantic tokens such as `background.paper` are opaque here; an external
//! theming system resolves them to concrete colors.
//!
//! # Example
//!
//! ```rust
//! use sxbundle::config_modal;
//!
//! let styles = config_modal();
//! assert_eq!(styles.len(), 13);
//! assert_eq!(styles.get("minHeight").unwrap().to_string(), "570px");
//! assert_eq!(styles.get("boxShadow").unwrap().as_scalar(), Some(24.0));
//! ```

mod modal;
mod style;

pub use modal::config_modal;
pub use style::{LengthUnit, LineStyle, StyleBundle, StyleParseError, StyleValue};
