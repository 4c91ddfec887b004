//! Owning style values.

use serde::Serialize;

use super::{Colorf, GetValue, StyleDimension, StyleValueType};

/// A style value that owns its text.
///
/// Stored in [`Style`](crate::Style) layers and gradient fields. Build one
/// with the `from_*` factories; they keep the unit consistent with the kind,
/// replacing a unit of the wrong kind with the canonical one.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SetValue {
    /// Nothing declared.
    #[default]
    Undefined,
    /// An identifier.
    Keyword(String),
    /// A number with a length unit.
    Length(f32, StyleDimension),
    /// A percentage.
    Percentage(f32),
    /// A unitless number.
    Number(f32),
    /// A quoted string, without quotes.
    String(String),
    /// The address inside `url(...)`.
    Url(String),
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

/// `dimension` if it belongs to `kind`, else the canonical unit of `kind`.
fn unit_of(kind: StyleValueType, dimension: StyleDimension) -> StyleDimension {
    if dimension.value_type() == kind {
        dimension
    } else {
        StyleDimension::canonical(kind).unwrap_or_default()
    }
}

impl SetValue {
    /// A keyword such as `auto`.
    #[must_use]
    pub fn from_keyword(text: impl Into<String>) -> Self {
        Self::Keyword(text.into())
    }

    /// A string value.
    #[must_use]
    pub fn from_string(text: impl Into<String>) -> Self {
        Self::String(text.into())
    }

    /// A url value.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// A length. Non-length units fall back to `px`.
    #[must_use]
    pub fn from_length(value: f32, dimension: StyleDimension) -> Self {
        Self::Length(value, unit_of(StyleValueType::Length, dimension))
    }

    /// An angle. Non-angle units fall back to `rad`.
    #[must_use]
    pub fn from_angle(value: f32, dimension: StyleDimension) -> Self {
        Self::Angle(value, unit_of(StyleValueType::Angle, dimension))
    }

    /// A time. Non-time units fall back to `s`.
    #[must_use]
    pub fn from_time(value: f32, dimension: StyleDimension) -> Self {
        Self::Time(value, unit_of(StyleValueType::Time, dimension))
    }

    /// A frequency. Non-frequency units fall back to `hz`.
    #[must_use]
    pub fn from_frequency(value: f32, dimension: StyleDimension) -> Self {
        Self::Frequency(value, unit_of(StyleValueType::Frequency, dimension))
    }

    /// A resolution. Non-resolution units fall back to `dppx`.
    #[must_use]
    pub fn from_resolution(value: f32, dimension: StyleDimension) -> Self {
        Self::Resolution(value, unit_of(StyleValueType::Resolution, dimension))
    }

    /// Any dimensioned value; the unit picks the kind.
    #[must_use]
    pub const fn from_dimension(value: f32, dimension: StyleDimension) -> Self {
        match dimension.value_type() {
            StyleValueType::Angle => Self::Angle(value, dimension),
            StyleValueType::Time => Self::Time(value, dimension),
            StyleValueType::Frequency => Self::Frequency(value, dimension),
            StyleValueType::Resolution => Self::Resolution(value, dimension),
            _ => Self::Length(value, dimension),
        }
    }

    /// A percentage, `50.0` meaning `50%`.
    #[must_use]
    pub const fn from_percentage(value: f32) -> Self {
        Self::Percentage(value)
    }

    /// A unitless number.
    #[must_use]
    pub const fn from_number(value: f32) -> Self {
        Self::Number(value)
    }

    /// A color.
    #[must_use]
    pub const fn from_color(color: Colorf) -> Self {
        Self::Color(color)
    }

    /// Borrow as a read view.
    ///
    /// A variant built directly with a unit of another kind reads back with
    /// the canonical unit of its own kind.
    #[must_use]
    pub fn as_get(&self) -> GetValue<'_> {
        match self {
            Self::Undefined => GetValue::Undefined,
            Self::Keyword(t) => GetValue::Keyword(t),
            Self::Length(n, d) => GetValue::Length(*n, unit_of(StyleValueType::Length, *d)),
            Self::Percentage(n) => GetValue::Percentage(*n),
            Self::Number(n) => GetValue::Number(*n),
            Self::String(t) => GetValue::String(t),
            Self::Url(t) => GetValue::Url(t),
            Self::Color(c) => GetValue::Color(*c),
            Self::Angle(n, d) => GetValue::Angle(*n, unit_of(StyleValueType::Angle, *d)),
            Self::Time(n, d) => GetValue::Time(*n, unit_of(StyleValueType::Time, *d)),
            Self::Frequency(n, d) => {
                GetValue::Frequency(*n, unit_of(StyleValueType::Frequency, *d))
            }
            Self::Resolution(n, d) => {
                GetValue::Resolution(*n, unit_of(StyleValueType::Resolution, *d))
            }
        }
    }

    /// See [`GetValue::value_type`].
    #[must_use]
    pub fn value_type(&self) -> StyleValueType {
        self.as_get().value_type()
    }

    /// See [`GetValue::text`].
    #[must_use]
    pub fn text(&self) -> &str {
        self.as_get().text()
    }

    /// See [`GetValue::number`].
    #[must_use]
    pub fn number(&self) -> f32 {
        self.as_get().number()
    }

    /// See [`GetValue::dimension`].
    #[must_use]
    pub fn dimension(&self) -> StyleDimension {
        self.as_get().dimension()
    }

    /// See [`GetValue::color`].
    #[must_use]
    pub fn color(&self) -> Colorf {
        self.as_get().color()
    }

    /// See [`GetValue::is_undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// See [`GetValue::is_keyword_named`].
    #[must_use]
    pub fn is_keyword_named(&self, name: &str) -> bool {
        self.as_get().is_keyword_named(name)
    }
}
