//! Typed style values and their CSS-like text forms.

use std::fmt;

use cssparser::{ParseError, Parser, ParserInput, Token};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::StyleParseError;

/// Length units carried by [`StyleValue::Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
    Vh,
    Vw,
}

impl LengthUnit {
    /// Resolves a unit identifier, case-insensitively.
    pub fn from_ident(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "px" => Some(LengthUnit::Px),
            "em" => Some(LengthUnit::Em),
            "rem" => Some(LengthUnit::Rem),
            "vh" => Some(LengthUnit::Vh),
            "vw" => Some(LengthUnit::Vw),
            _ => None,
        }
    }

    /// Returns the canonical lowercase unit suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Vh => "vh",
            LengthUnit::Vw => "vw",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Border line styles accepted in the border shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
    None,
}

impl LineStyle {
    /// Resolves a line style identifier, case-insensitively.
    pub fn from_ident(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "solid" => Some(LineStyle::Solid),
            "dashed" => Some(LineStyle::Dashed),
            "dotted" => Some(LineStyle::Dotted),
            "double" => Some(LineStyle::Double),
            "none" => Some(LineStyle::None),
            _ => None,
        }
    }

    /// Returns the canonical lowercase keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::Double => "double",
            LineStyle::None => "none",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed style quantity.
///
/// Styling systems mix bare numbers, unit-bearing strings, keywords, and
/// theme tokens in the same object. `StyleValue` keeps those forms apart
/// while preserving the exact text each one serializes to.
///
/// # Example
///
/// ```rust
/// use sxbundle::{LengthUnit, StyleValue};
///
/// assert_eq!(StyleValue::length(570.0, LengthUnit::Px).to_string(), "570px");
/// assert_eq!(StyleValue::translate(-50.0, -50.0).to_string(), "translate(-50%, -50%)");
/// assert_eq!(StyleValue::parse("90%").unwrap(), StyleValue::percent(90.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A unitless number (fixed pixel width, elevation level, spacing scale unit)
    Scalar(f64),
    /// A length with an explicit unit, e.g. `570px`
    Length(f64, LengthUnit),
    /// A percentage, e.g. `90%`
    Percent(f64),
    /// A layout keyword, e.g. `absolute`, `flex`, `column`
    Keyword(String),
    /// A dotted semantic theme token, e.g. `background.paper`, resolved
    /// by an external theming system and opaque to this crate
    Token(String),
    /// A 2D translation with percentage offsets, e.g. `translate(-50%, -50%)`
    Translate { x: f64, y: f64 },
    /// A border shorthand: pixel width, line style, color token
    Border {
        width: f64,
        line: LineStyle,
        color: String,
    },
}

impl StyleValue {
    /// Creates a unitless number.
    pub fn scalar(value: f64) -> Self {
        StyleValue::Scalar(value)
    }

    /// Creates a length with the given unit.
    pub fn length(value: f64, unit: LengthUnit) -> Self {
        StyleValue::Length(value, unit)
    }

    /// Creates a pixel length.
    pub fn px(value: f64) -> Self {
        StyleValue::Length(value, LengthUnit::Px)
    }

    /// Creates a percentage.
    pub fn percent(value: f64) -> Self {
        StyleValue::Percent(value)
    }

    /// Creates a layout keyword.
    pub fn keyword(name: &str) -> Self {
        StyleValue::Keyword(name.to_string())
    }

    /// Creates a semantic theme token.
    pub fn token(path: &str) -> Self {
        StyleValue::Token(path.to_string())
    }

    /// Creates a 2D translation from percentage offsets.
    pub fn translate(x: f64, y: f64) -> Self {
        StyleValue::Translate { x, y }
    }

    /// Creates a border shorthand with a pixel width and a color token.
    pub fn border(width: f64, line: LineStyle, color: &str) -> Self {
        StyleValue::Border {
            width,
            line,
            color: color.to_string(),
        }
    }

    /// Returns the unitless number, if this value is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            StyleValue::Scalar(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the keyword name, if this value is a keyword.
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            StyleValue::Keyword(s) => Some(s),
            _ => None,
        }
    }

    /// Parses the CSS-like text form of a value.
    ///
    /// This is the inverse of [`Display`](fmt::Display) and exists so
    /// serialized bundles can be read back. Bundles built in code use the
    /// constructors directly and never go through parsing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sxbundle::{LineStyle, StyleValue};
    ///
    /// let border = StyleValue::parse("1px solid border.DEFAULT").unwrap();
    /// assert_eq!(border, StyleValue::border(1.0, LineStyle::Solid, "border.DEFAULT"));
    /// ```
    pub fn parse(input: &str) -> Result<Self, StyleParseError> {
        let mut raw = ParserInput::new(input);
        let mut parser = Parser::new(&mut raw);
        let value = parse_component(&mut parser, input)?;
        if !parser.is_exhausted() {
            return Err(StyleParseError::TrailingInput {
                input: input.to_string(),
            });
        }
        Ok(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Scalar(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Scalar(f64::from(value))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Scalar(n) => write_number(f, *n),
            StyleValue::Length(n, unit) => {
                write_number(f, *n)?;
                f.write_str(unit.as_str())
            }
            StyleValue::Percent(n) => {
                write_number(f, *n)?;
                f.write_str("%")
            }
            StyleValue::Keyword(s) | StyleValue::Token(s) => f.write_str(s),
            StyleValue::Translate { x, y } => {
                f.write_str("translate(")?;
                write_number(f, *x)?;
                f.write_str("%, ")?;
                write_number(f, *y)?;
                f.write_str("%)")
            }
            StyleValue::Border { width, line, color } => {
                write_number(f, *width)?;
                write!(f, "px {} {}", line, color)
            }
        }
    }
}

/// Writes a number without a fractional part when it has none, so integral
/// values keep the exact text form styling systems expect (`570`, not `570.0`).
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n == n.trunc() && n.abs() < 9.0e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

/// Drops binary noise picked up by f32 token values scaled to percent units.
fn snap(n: f64) -> f64 {
    (n * 10_000.0).round() / 10_000.0
}

fn token_number(value: f32, int_value: Option<i32>) -> f64 {
    match int_value {
        Some(i) => f64::from(i),
        None => snap(f64::from(value)),
    }
}

fn token_percent(unit_value: f32, int_value: Option<i32>) -> f64 {
    match int_value {
        Some(i) => f64::from(i),
        None => snap(f64::from(unit_value) * 100.0),
    }
}

fn invalid(input: &str, reason: &str) -> StyleParseError {
    StyleParseError::InvalidValue {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_component(
    parser: &mut Parser<'_, '_>,
    original: &str,
) -> Result<StyleValue, StyleParseError> {
    let token = parser.next().map_err(|_| StyleParseError::EmptyInput)?.clone();

    match token {
        Token::Number {
            value, int_value, ..
        } => Ok(StyleValue::Scalar(token_number(value, int_value))),
        Token::Percentage {
            unit_value,
            int_value,
            ..
        } => Ok(StyleValue::Percent(token_percent(unit_value, int_value))),
        Token::Dimension {
            value,
            int_value,
            ref unit,
            ..
        } => {
            let parsed_unit =
                LengthUnit::from_ident(unit).ok_or_else(|| StyleParseError::UnsupportedUnit {
                    input: original.to_string(),
                    unit: unit.to_string(),
                })?;
            let magnitude = token_number(value, int_value);
            if parser.is_exhausted() {
                Ok(StyleValue::Length(magnitude, parsed_unit))
            } else {
                parse_border_tail(parser, original, magnitude, parsed_unit)
            }
        }
        Token::Function(ref name) if name.eq_ignore_ascii_case("translate") => {
            let (x, y) = parser
                .parse_nested_block(parse_translate_args)
                .map_err(|_| invalid(original, "expected two comma-separated percentages"))?;
            Ok(StyleValue::Translate { x, y })
        }
        Token::Ident(ref name) => {
            let path = parse_dotted_path(parser, name)?;
            if path.contains('.') {
                Ok(StyleValue::Token(path))
            } else {
                Ok(StyleValue::Keyword(path))
            }
        }
        _ => Err(invalid(original, "unrecognized leading token")),
    }
}

fn parse_translate_args<'i, 't>(
    parser: &mut Parser<'i, 't>,
) -> Result<(f64, f64), ParseError<'i, ()>> {
    let x = parser.expect_percentage()?;
    parser.expect_comma()?;
    let y = parser.expect_percentage()?;
    parser.expect_exhausted()?;
    Ok((
        snap(f64::from(x) * 100.0),
        snap(f64::from(y) * 100.0),
    ))
}

/// What the tokenizer produced at a dotted-path continuation point.
enum PathStep {
    Dot,
    Backtrack,
    End,
}

/// Consumes `.segment` repetitions after a leading identifier, yielding
/// either a bare keyword or a dotted token path.
fn parse_dotted_path(parser: &mut Parser<'_, '_>, first: &str) -> Result<String, StyleParseError> {
    let mut path = first.to_string();
    loop {
        let before = parser.state();
        let step = match parser.next() {
            Ok(&Token::Delim('.')) => PathStep::Dot,
            Ok(_) => PathStep::Backtrack,
            Err(_) => PathStep::End,
        };
        match step {
            PathStep::Dot => {
                let segment = match parser.next() {
                    Ok(&Token::Ident(ref s)) => Some(s.to_string()),
                    _ => None,
                };
                match segment {
                    Some(s) => {
                        path.push('.');
                        path.push_str(&s);
                    }
                    None => {
                        return Err(StyleParseError::InvalidValue {
                            input: path,
                            reason: "expected an identifier after '.'".to_string(),
                        })
                    }
                }
            }
            PathStep::Backtrack => {
                parser.reset(&before);
                break;
            }
            PathStep::End => break,
        }
    }
    Ok(path)
}

fn parse_border_tail(
    parser: &mut Parser<'_, '_>,
    original: &str,
    width: f64,
    unit: LengthUnit,
) -> Result<StyleValue, StyleParseError> {
    if unit != LengthUnit::Px {
        return Err(invalid(original, "border width must be a px length"));
    }
    let line_ident = match parser.next() {
        Ok(&Token::Ident(ref s)) => s.to_string(),
        _ => return Err(invalid(original, "expected a line style after the width")),
    };
    let line =
        LineStyle::from_ident(&line_ident).ok_or_else(|| StyleParseError::UnknownLineStyle {
            input: original.to_string(),
            style: line_ident.clone(),
        })?;
    let first = match parser.next() {
        Ok(&Token::Ident(ref s)) => s.to_string(),
        _ => return Err(invalid(original, "expected a color token after the line style")),
    };
    let color = parse_dotted_path(parser, &first)?;
    Ok(StyleValue::Border { width, line, color })
}

impl Serialize for StyleValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            // Integral scalars serialize as integers so the plain
            // representation matches the source object exactly.
            StyleValue::Scalar(n) if n.is_finite() && n == n.trunc() && n.abs() < 9.0e15 => {
                serializer.serialize_i64(n as i64)
            }
            StyleValue::Scalar(n) => serializer.serialize_f64(n),
            _ => serializer.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StyleValueVisitor;

        impl<'de> Visitor<'de> for StyleValueVisitor {
            type Value = StyleValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a CSS-like style string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<StyleValue, E> {
                Ok(StyleValue::Scalar(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<StyleValue, E> {
                Ok(StyleValue::Scalar(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<StyleValue, E> {
                Ok(StyleValue::Scalar(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<StyleValue, E> {
                StyleValue::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(StyleValueVisitor)
    }
}
