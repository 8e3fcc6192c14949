//! Parsing of computed-value strings into a `ComputedStyle`.
//!
//! Hosts usually expose computed styles as `(property, value)` string pairs
//! (for example the output of `getComputedStyle`). Values are tokenized with
//! `cssparser` and mapped onto the typed model.

use crate::style_model::{BorderRadii, ComputedStyle, Display, Overflow};
use cssparser::{Parser, ParserInput, Token};
use log::trace;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleParseError {
    /// The value did not tokenize to the expected grammar.
    #[error("unexpected token in `{property}: {value}`")]
    UnexpectedToken { property: String, value: String },
    /// An identifier that is not a known keyword for the property.
    #[error("unknown keyword `{value}` for `{property}`")]
    UnknownKeyword { property: String, value: String },
    /// The property is not part of the modeled subset.
    #[error("unsupported property `{0}`")]
    UnknownProperty(String),
}

#[derive(Clone, Copy)]
enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl ComputedStyle {
    /// Build a style from computed `(property, value)` pairs.
    ///
    /// Properties outside the modeled subset are skipped.
    ///
    /// # Errors
    /// Returns `StyleParseError` when a modeled property has a value that cannot be parsed.
    pub fn from_computed_values<'pairs, I>(pairs: I) -> Result<Self, StyleParseError>
    where
        I: IntoIterator<Item = (&'pairs str, &'pairs str)>,
    {
        let mut style = Self::default();
        for (property, value) in pairs {
            match style.apply_computed_value(property, value) {
                Err(StyleParseError::UnknownProperty(name)) => {
                    trace!("[STYLE-PARSE] skipping unmodeled property {name}");
                }
                other => other?,
            }
        }
        Ok(style)
    }

    /// Apply a single computed value to this style.
    ///
    /// # Errors
    /// Returns `StyleParseError::UnknownProperty` for properties outside the modeled subset,
    /// or a value error when the value cannot be parsed.
    pub fn apply_computed_value(
        &mut self,
        property: &str,
        value: &str,
    ) -> Result<(), StyleParseError> {
        let name = property.trim().to_ascii_lowercase();
        match name.as_str() {
            "display" => self.display = parse_display(&name, value)?,
            "overflow" => self.overflow = parse_overflow(&name, value)?,
            "border-top-width" => self.border_width.top = parse_px(&name, value)?,
            "border-right-width" => self.border_width.right = parse_px(&name, value)?,
            "border-bottom-width" => self.border_width.bottom = parse_px(&name, value)?,
            "border-left-width" => self.border_width.left = parse_px(&name, value)?,
            "border-top-left-radius" => self.set_corner(Corner::TopLeft, parse_px(&name, value)?),
            "border-top-right-radius" => {
                self.set_corner(Corner::TopRight, parse_px(&name, value)?);
            }
            "border-bottom-right-radius" => {
                self.set_corner(Corner::BottomRight, parse_px(&name, value)?);
            }
            "border-bottom-left-radius" => {
                self.set_corner(Corner::BottomLeft, parse_px(&name, value)?);
            }
            _ => return Err(StyleParseError::UnknownProperty(name)),
        }
        Ok(())
    }

    fn set_corner(&mut self, corner: Corner, radius: f32) {
        let radii = self.border_radius.get_or_insert_with(BorderRadii::default);
        match corner {
            Corner::TopLeft => radii.top_left = radius,
            Corner::TopRight => radii.top_right = radius,
            Corner::BottomRight => radii.bottom_right = radius,
            Corner::BottomLeft => radii.bottom_left = radius,
        }
    }
}

fn unexpected(property: &str, value: &str) -> StyleParseError {
    StyleParseError::UnexpectedToken {
        property: property.to_owned(),
        value: value.to_owned(),
    }
}

/// Parse a single identifier value, lowercased.
fn parse_keyword(property: &str, value: &str) -> Result<String, StyleParseError> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let ident = parser
        .expect_ident()
        .map(|ident| ident.to_ascii_lowercase())
        .map_err(|_| unexpected(property, value))?;
    parser
        .expect_exhausted()
        .map_err(|_| unexpected(property, value))?;
    Ok(ident)
}

/// Parse the `display` keyword, including the two-value forms hosts report
/// for inline-level atomic boxes.
///
/// # Errors
/// Returns `StyleParseError` for anything other than a known display value.
pub fn parse_display(property: &str, value: &str) -> Result<Display, StyleParseError> {
    let normalized = value.split_whitespace().collect::<Vec<_>>().join(" ");
    let display = match normalized.to_ascii_lowercase().as_str() {
        "inline" | "inline flow" => Display::Inline,
        "block" | "block flow" => Display::Block,
        "inline-block" | "inline flow-root" => Display::InlineBlock,
        "inline-table" | "inline table" => Display::InlineTable,
        "inline-flex" | "inline flex" => Display::InlineFlex,
        "inline-grid" | "inline grid" => Display::InlineGrid,
        "flex" | "block flex" => Display::Flex,
        "grid" | "block grid" => Display::Grid,
        "table" | "block table" => Display::Table,
        "list-item" | "block flow list-item" => Display::ListItem,
        "flow-root" | "block flow-root" => Display::FlowRoot,
        "contents" => Display::Contents,
        "none" => Display::None,
        _ => {
            let keyword = parse_keyword(property, value)?;
            return Err(StyleParseError::UnknownKeyword {
                property: property.to_owned(),
                value: keyword,
            });
        }
    };
    Ok(display)
}

/// Parse the `overflow` keyword.
///
/// The two-axis form (`overflow-x overflow-y`, e.g. `hidden scroll`) is
/// reduced to the axis that makes the box a scroll container: `scroll` wins
/// over `auto`, which wins over `hidden`, `clip` and `visible`.
///
/// # Errors
/// Returns `StyleParseError` for anything other than one or two known overflow keywords.
pub fn parse_overflow(property: &str, value: &str) -> Result<Overflow, StyleParseError> {
    let axes = value
        .split_whitespace()
        .map(|axis| overflow_keyword(property, axis))
        .collect::<Result<Vec<_>, _>>()?;
    if axes.len() > 2 {
        return Err(unexpected(property, value));
    }
    axes.into_iter()
        .max_by_key(|overflow| scroll_rank(*overflow))
        .ok_or_else(|| unexpected(property, value))
}

fn overflow_keyword(property: &str, value: &str) -> Result<Overflow, StyleParseError> {
    let keyword = parse_keyword(property, value)?;
    match keyword.as_str() {
        "visible" => Ok(Overflow::Visible),
        "hidden" => Ok(Overflow::Hidden),
        "clip" => Ok(Overflow::Clip),
        "auto" | "overlay" => Ok(Overflow::Auto),
        "scroll" => Ok(Overflow::Scroll),
        _ => Err(StyleParseError::UnknownKeyword {
            property: property.to_owned(),
            value: keyword,
        }),
    }
}

const fn scroll_rank(overflow: Overflow) -> u8 {
    match overflow {
        Overflow::Visible => 0,
        Overflow::Clip => 1,
        Overflow::Hidden => 2,
        Overflow::Auto => 3,
        Overflow::Scroll => 4,
    }
}

/// Parse the leading pixel length of a computed value.
///
/// Computed lengths are absolute, so only `px` and unitless zero are accepted.
/// For two-value radii (`10px 20px`) the horizontal radius is returned.
///
/// # Errors
/// Returns `StyleParseError::UnexpectedToken` when the leading token is not a px length.
pub fn parse_px(property: &str, value: &str) -> Result<f32, StyleParseError> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let token = parser.next().map_err(|_| unexpected(property, value))?;
    match *token {
        Token::Dimension {
            value: number,
            ref unit,
            ..
        } if unit.eq_ignore_ascii_case("px") => Ok(number),
        Token::Number { value: number, .. } if number == 0.0 => Ok(0.0),
        _ => Err(unexpected(property, value)),
    }
}
