//! Value kinds and unit tags.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The kind of a style value.
///
/// Determines which accessor of [`GetValue`](super::GetValue) carries
/// meaningful data. Every other accessor returns its zero value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, IntoStaticStr, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StyleValueType {
    /// No value. Returned for undeclared properties.
    #[default]
    Undefined,
    /// An identifier such as `auto` or `solid`.
    Keyword,
    /// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
    Length,
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    Percentage,
    /// [§ 4.2 Real Numbers](https://www.w3.org/TR/css-values-4/#numbers)
    Number,
    /// [§ 4.3 Quoted Strings](https://www.w3.org/TR/css-values-4/#strings)
    String,
    /// [§ 4.5 Resource Locators](https://www.w3.org/TR/css-values-4/#urls)
    Url,
    /// [CSS Color 4 § 4](https://www.w3.org/TR/css-color-4/#color-syntax)
    Color,
    /// [§ 7.1 Angle Units](https://www.w3.org/TR/css-values-4/#angles)
    Angle,
    /// [§ 7.2 Duration Units](https://www.w3.org/TR/css-values-4/#time)
    Time,
    /// [§ 7.3 Frequency Units](https://www.w3.org/TR/css-values-4/#frequency)
    Frequency,
    /// [§ 7.4 Resolution Units](https://www.w3.org/TR/css-values-4/#resolution)
    Resolution,
}

/// A unit tag.
///
/// Parses ASCII case-insensitively, so `PX`, `Px` and `px` are the same
/// unit. `x` is accepted as an alias of `dppx`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum StyleDimension {
    /// "1px = 1/96th of 1in"
    #[default]
    Px,
    /// "Equal to the computed value of the font-size property of the element"
    Em,
    /// "1pt = 1/72nd of 1in"
    Pt,
    /// "1mm = 1/10th of 1cm"
    Mm,
    /// "1cm = 96px/2.54"
    Cm,
    /// "1in = 2.54cm = 96px"
    In,
    /// "1pc = 1/6th of 1in"
    Pc,
    /// "Equal to the used x-height of the first available font"
    Ex,
    /// "Equal to the used advance measure of the "0" glyph"
    Ch,
    /// "Equal to the computed value of font-size on the root element"
    Rem,
    /// "Equal to 1% of the width of the initial containing block"
    Vw,
    /// "Equal to 1% of the height of the initial containing block"
    Vh,
    /// "Equal to the smaller of vw or vh"
    Vmin,
    /// "Equal to the larger of vw or vh"
    Vmax,
    /// Degrees. "There are 360 degrees in a full circle."
    Deg,
    /// Gradians. "There are 400 gradians in a full circle."
    Grad,
    /// Radians. "There are 2π radians in a full circle."
    Rad,
    /// Turns. "There is 1 turn in a full circle."
    Turn,
    /// Seconds.
    S,
    /// Milliseconds. "There are 1000 milliseconds in a second."
    Ms,
    /// Hertz.
    Hz,
    /// Kilohertz.
    Khz,
    /// Dots per inch.
    Dpi,
    /// Dots per centimeter.
    Dpcm,
    /// Dots per CSS pixel. "1dppx is equivalent to 96dpi"
    #[strum(to_string = "dppx", serialize = "x")]
    Dppx,
}

impl StyleDimension {
    /// The value kind this unit belongs to.
    #[must_use]
    pub const fn value_type(self) -> StyleValueType {
        match self {
            Self::Px
            | Self::Em
            | Self::Pt
            | Self::Mm
            | Self::Cm
            | Self::In
            | Self::Pc
            | Self::Ex
            | Self::Ch
            | Self::Rem
            | Self::Vw
            | Self::Vh
            | Self::Vmin
            | Self::Vmax => StyleValueType::Length,
            Self::Deg | Self::Grad | Self::Rad | Self::Turn => StyleValueType::Angle,
            Self::S | Self::Ms => StyleValueType::Time,
            Self::Hz | Self::Khz => StyleValueType::Frequency,
            Self::Dpi | Self::Dpcm | Self::Dppx => StyleValueType::Resolution,
        }
    }

    /// The canonical unit for a dimensioned kind, if it has one.
    #[must_use]
    pub const fn canonical(kind: StyleValueType) -> Option<Self> {
        match kind {
            StyleValueType::Length => Some(Self::Px),
            StyleValueType::Angle => Some(Self::Rad),
            StyleValueType::Time => Some(Self::S),
            StyleValueType::Frequency => Some(Self::Hz),
            StyleValueType::Resolution => Some(Self::Dppx),
            _ => None,
        }
    }

    /// The unit as written in CSS.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_units_parse_case_insensitively() {
        assert_eq!(StyleDimension::from_str("PX"), Ok(StyleDimension::Px));
        assert_eq!(StyleDimension::from_str("kHz"), Ok(StyleDimension::Khz));
        assert_eq!(StyleDimension::from_str("x"), Ok(StyleDimension::Dppx));
        assert!(StyleDimension::from_str("furlong").is_err());
    }

    #[test]
    fn test_every_unit_has_a_dimensioned_kind() {
        for unit in StyleDimension::iter() {
            let kind = unit.value_type();
            assert!(StyleDimension::canonical(kind).is_some(), "{unit} has no canonical unit");
            assert_eq!(StyleDimension::from_str(unit.as_str()), Ok(unit));
        }
    }

    #[test]
    fn test_dppx_displays_long_form() {
        assert_eq!(StyleDimension::Dppx.to_string(), "dppx");
        assert_eq!(StyleValueType::Percentage.to_string(), "percentage");
    }
}
