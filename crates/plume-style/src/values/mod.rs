//! Style values.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! Two concrete forms of the same tagged value: [`GetValue`] borrows and is
//! what queries return, [`SetValue`] owns and is what property sets store.

/// Colors and color parsing.
pub mod color;
/// Borrowed read view.
pub mod get;
/// Images, gradients and stop resolution.
pub mod image;
/// Owning values and their factories.
pub mod set;
/// Value kinds and unit tags.
pub mod types;

pub use color::{Colorf, parse_color, to_rgba};
pub use get::GetValue;
pub use image::{Gradient, GradientStop, Image, parse_gradient, resolve_stops};
pub use set::SetValue;
pub use types::{StyleDimension, StyleValueType};

use crate::parser::ComponentValue;
use crate::tokenizer::CssToken;

/// Read one component value with no property context.
///
/// Idents become lower-cased keywords, hashes and color functions become
/// colors, and dimensions pick their kind from the unit. Returns `None` for
/// unknown units and for anything that is not a single value (blocks,
/// punctuation, gradients).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_value(v: &ComponentValue) -> Option<SetValue> {
    match v {
        ComponentValue::Token(token) => match token {
            CssToken::Ident(name) => Some(SetValue::from_keyword(name.to_ascii_lowercase())),
            CssToken::String(text) => Some(SetValue::from_string(text.clone())),
            CssToken::Url(url) => Some(SetValue::from_url(url.clone())),
            CssToken::Hash(_) => parse_color(v).map(SetValue::from_color),
            CssToken::Number(n) => Some(SetValue::from_number(*n as f32)),
            CssToken::Percentage(n) => Some(SetValue::from_percentage(*n as f32)),
            CssToken::Dimension { value, unit } => unit
                .parse::<StyleDimension>()
                .ok()
                .map(|unit| SetValue::from_dimension(*value as f32, unit)),
            _ => None,
        },
        // `url("a.png")` with a quoted argument tokenizes as a function.
        ComponentValue::Function { name, args } if name.eq_ignore_ascii_case("url") => {
            args.iter().find_map(|arg| match arg {
                ComponentValue::Token(CssToken::String(url)) => Some(SetValue::from_url(url.clone())),
                _ => None,
            })
        }
        ComponentValue::Function { .. } => parse_color(v).map(SetValue::from_color),
        ComponentValue::Block { .. } => None,
    }
}
