//! Style value parsing errors.

/// Error returned when style value text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    /// The input contained no tokens
    EmptyInput,
    /// A length carried a unit this crate does not model
    UnsupportedUnit { input: String, unit: String },
    /// A border shorthand named an unknown line style
    UnknownLineStyle { input: String, style: String },
    /// The input did not match any supported value form
    InvalidValue { input: String, reason: String },
    /// A complete value was followed by extra tokens
    TrailingInput { input: String },
}

impl std::fmt::Display for StyleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleParseError::EmptyInput => {
                write!(f, "empty style value")
            }
            StyleParseError::UnsupportedUnit { input, unit } => {
                write!(f, "unsupported unit '{}' in style value '{}'", unit, input)
            }
            StyleParseError::UnknownLineStyle { input, style } => {
                write!(f, "unknown line style '{}' in border '{}'", style, input)
            }
            StyleParseError::InvalidValue { input, reason } => {
                write!(f, "invalid style value '{}': {}", input, reason)
            }
            StyleParseError::TrailingInput { input } => {
                write!(f, "trailing tokens after style value '{}'", input)
            }
        }
    }
}

impl std::error::Error for StyleParseError {}
