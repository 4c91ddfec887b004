//! Borrowed read view of a style value.

use core::fmt;

use serde::Serialize;

use super::{Colorf, SetValue, StyleDimension, StyleValueType, to_rgba};

/// A style value as returned by queries.
///
/// Never owns its text: keyword, string and url payloads borrow from the
/// [`Style`](crate::Style) that declared them, or from a static initial
/// value. Every accessor is total and returns a zero value (empty string,
/// `0.0`, `px`, transparent black) when the kind does not match.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum GetValue<'a> {
    /// Nothing declared.
    #[default]
    Undefined,
    /// An identifier, lower-cased by the parser.
    Keyword(&'a str),
    /// A number with a length unit.
    Length(f32, StyleDimension),
    /// A percentage, `50%` is `50.0`.
    Percentage(f32),
    /// A unitless number.
    Number(f32),
    /// A quoted string, without quotes.
    String(&'a str),
    /// The address inside `url(...)`.
    Url(&'a str),
    /// A resolved color.
    Color(Colorf),
    /// A number with an angle unit.
    Angle(f32, StyleDimension),
    /// A number with a time unit.
    Time(f32, StyleDimension),
    /// A number with a frequency unit.
    Frequency(f32, StyleDimension),
    /// A number with a resolution unit.
    Resolution(f32, StyleDimension),
}

impl<'a> GetValue<'a> {
    /// The kind of this value.
    #[must_use]
    pub const fn value_type(&self) -> StyleValueType {
        match self {
            Self::Undefined => StyleValueType::Undefined,
            Self::Keyword(_) => StyleValueType::Keyword,
            Self::Length(..) => StyleValueType::Length,
            Self::Percentage(_) => StyleValueType::Percentage,
            Self::Number(_) => StyleValueType::Number,
            Self::String(_) => StyleValueType::String,
            Self::Url(_) => StyleValueType::Url,
            Self::Color(_) => StyleValueType::Color,
            Self::Angle(..) => StyleValueType::Angle,
            Self::Time(..) => StyleValueType::Time,
            Self::Frequency(..) => StyleValueType::Frequency,
            Self::Resolution(..) => StyleValueType::Resolution,
        }
    }

    /// Keyword, string or url text. Empty for every other kind.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match self {
            Self::Keyword(text) | Self::String(text) | Self::Url(text) => *text,
            _ => "",
        }
    }

    /// The numeric payload. `0.0` for kinds without one.
    #[must_use]
    pub const fn number(&self) -> f32 {
        match self {
            Self::Length(n, _)
            | Self::Angle(n, _)
            | Self::Time(n, _)
            | Self::Frequency(n, _)
            | Self::Resolution(n, _)
            | Self::Percentage(n)
            | Self::Number(n) => *n,
            _ => 0.0,
        }
    }

    /// The unit. `px` for kinds without one.
    #[must_use]
    pub const fn dimension(&self) -> StyleDimension {
        match self {
            Self::Length(_, d)
            | Self::Angle(_, d)
            | Self::Time(_, d)
            | Self::Frequency(_, d)
            | Self::Resolution(_, d) => *d,
            _ => StyleDimension::Px,
        }
    }

    /// The color. Transparent black for non-colors.
    #[must_use]
    pub const fn color(&self) -> Colorf {
        match self {
            Self::Color(c) => *c,
            _ => Colorf::TRANSPARENT,
        }
    }

    /// Returns true if nothing was declared.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true for keywords.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self, Self::Keyword(_))
    }

    /// Compares the keyword text case-sensitively.
    ///
    /// False for non-keywords and for an empty `name`.
    #[must_use]
    pub fn is_keyword_named(&self, name: &str) -> bool {
        !name.is_empty() && matches!(self, Self::Keyword(text) if *text == name)
    }

    /// Returns true for lengths.
    #[must_use]
    pub const fn is_length(&self) -> bool {
        matches!(self, Self::Length(..))
    }

    /// Returns true for percentages.
    #[must_use]
    pub const fn is_percentage(&self) -> bool {
        matches!(self, Self::Percentage(_))
    }

    /// Returns true for unitless numbers.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns true for strings.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns true for urls.
    #[must_use]
    pub const fn is_url(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Returns true for colors.
    #[must_use]
    pub const fn is_color(&self) -> bool {
        matches!(self, Self::Color(_))
    }

    /// Returns true for angles.
    #[must_use]
    pub const fn is_angle(&self) -> bool {
        matches!(self, Self::Angle(..))
    }

    /// Returns true for times.
    #[must_use]
    pub const fn is_time(&self) -> bool {
        matches!(self, Self::Time(..))
    }

    /// Returns true for frequencies.
    #[must_use]
    pub const fn is_frequency(&self) -> bool {
        matches!(self, Self::Frequency(..))
    }

    /// Returns true for resolutions.
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(..))
    }

    /// Copy into an owning value.
    #[must_use]
    pub fn to_owned_value(&self) -> SetValue {
        match *self {
            Self::Undefined => SetValue::Undefined,
            Self::Keyword(t) => SetValue::Keyword(t.to_string()),
            Self::Length(n, d) => SetValue::Length(n, d),
            Self::Percentage(n) => SetValue::Percentage(n),
            Self::Number(n) => SetValue::Number(n),
            Self::String(t) => SetValue::String(t.to_string()),
            Self::Url(t) => SetValue::Url(t.to_string()),
            Self::Color(c) => SetValue::Color(c),
            Self::Angle(n, d) => SetValue::Angle(n, d),
            Self::Time(n, d) => SetValue::Time(n, d),
            Self::Frequency(n, d) => SetValue::Frequency(n, d),
            Self::Resolution(n, d) => SetValue::Resolution(n, d),
        }
    }
}

impl fmt::Display for GetValue<'_> {
    /// CSS text for the value. Undefined prints nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => Ok(()),
            Self::Keyword(t) => write!(f, "{t}"),
            Self::String(t) => write!(f, "\"{}\"", t.replace('"', "\\\"")),
            Self::Url(t) => write!(f, "url({t})"),
            Self::Percentage(n) => write!(f, "{n}%"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Color(c) => write!(f, "{}", to_rgba(*c)),
            Self::Length(n, d)
            | Self::Angle(n, d)
            | Self::Time(n, d)
            | Self::Frequency(n, d)
            | Self::Resolution(n, d) => write!(f, "{n}{d}"),
        }
    }
}
