//! Unit conversion.
//!
//! [CSS Values and Units Level 4 § 5-7](https://www.w3.org/TR/css-values-4/#lengths)
//!
//! Every function takes a value of its kind and returns the same kind in the
//! canonical unit: `px`, `rad`, `s`, `hz` and `dppx`. Canonical values and
//! values of other kinds come back unchanged, so conversion is idempotent.

use core::f32::consts::PI;

use crate::values::{GetValue, StyleDimension};

/// [§ 5.1.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
///
/// "1in = 2.54cm = 96px"
pub const PX_PER_IN: f32 = 96.0;

/// Font size used when nothing is declared: `medium`.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// What relative units resolve against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitContext {
    /// Computed font size of the element, in px. `em` and `ex`.
    pub font_size: f32,
    /// Computed font size of the root element, in px. `rem`.
    pub root_font_size: f32,
    /// Advance of the glyph "0" in px, when font metrics are available.
    pub zero_advance: Option<f32>,
    /// Viewport width in px.
    pub viewport_width: f32,
    /// Viewport height in px.
    pub viewport_height: f32,
}

impl Default for UnitContext {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            root_font_size: DEFAULT_FONT_SIZE,
            zero_advance: None,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }
}

/// Length to `px`.
///
/// [§ 6.1 Relative lengths](https://www.w3.org/TR/css-values-4/#relative-lengths)
///
/// `ex` is taken as half an `em`. `ch` is the advance of "0" when metrics
/// were supplied and "1ch is assumed to be 0.5em" otherwise.
#[must_use]
pub fn compute_length<'a>(value: GetValue<'a>, units: &UnitContext) -> GetValue<'a> {
    let GetValue::Length(n, unit) = value else {
        return value;
    };
    let px = match unit {
        StyleDimension::Px => return value,
        StyleDimension::Pt => n * PX_PER_IN / 72.0,
        StyleDimension::Mm => n * PX_PER_IN / 25.4,
        StyleDimension::Cm => n * PX_PER_IN / 2.54,
        StyleDimension::In => n * PX_PER_IN,
        StyleDimension::Pc => n * PX_PER_IN / 6.0,
        StyleDimension::Em => n * units.font_size,
        StyleDimension::Ex => n * units.font_size * 0.5,
        StyleDimension::Ch => n * units.zero_advance.unwrap_or(units.font_size * 0.5),
        StyleDimension::Rem => n * units.root_font_size,
        // "1vw = 1% of viewport width"
        StyleDimension::Vw => n * units.viewport_width / 100.0,
        StyleDimension::Vh => n * units.viewport_height / 100.0,
        StyleDimension::Vmin => n * units.viewport_width.min(units.viewport_height) / 100.0,
        StyleDimension::Vmax => n * units.viewport_width.max(units.viewport_height) / 100.0,
        // Not a length unit: the number is taken as px.
        _ => n,
    };
    GetValue::Length(px, StyleDimension::Px)
}

/// Angle to `rad`.
///
/// [§ 7.1 Angle units](https://www.w3.org/TR/css-values-4/#angles)
///
/// "There are 360 degrees in a full circle." "There are 400 gradians in a
/// full circle." "There is 1 turn in a full circle."
#[must_use]
pub fn compute_angle(value: GetValue<'_>) -> GetValue<'_> {
    let GetValue::Angle(n, unit) = value else {
        return value;
    };
    let rad = match unit {
        StyleDimension::Deg => n * PI / 180.0,
        StyleDimension::Grad => n * PI / 200.0,
        StyleDimension::Turn => n * 2.0 * PI,
        _ => n,
    };
    GetValue::Angle(rad, StyleDimension::Rad)
}

/// Time to `s`.
///
/// [§ 7.2 Duration units](https://www.w3.org/TR/css-values-4/#time)
#[must_use]
pub fn compute_time(value: GetValue<'_>) -> GetValue<'_> {
    match value {
        GetValue::Time(n, StyleDimension::Ms) => GetValue::Time(n / 1000.0, StyleDimension::S),
        GetValue::Time(n, _) => GetValue::Time(n, StyleDimension::S),
        _ => value,
    }
}

/// Frequency to `hz`.
///
/// [§ 7.3 Frequency units](https://www.w3.org/TR/css-values-4/#frequency)
#[must_use]
pub fn compute_frequency(value: GetValue<'_>) -> GetValue<'_> {
    match value {
        GetValue::Frequency(n, StyleDimension::Khz) => {
            GetValue::Frequency(n * 1000.0, StyleDimension::Hz)
        }
        GetValue::Frequency(n, _) => GetValue::Frequency(n, StyleDimension::Hz),
        _ => value,
    }
}

/// Resolution to `dppx`.
///
/// [§ 7.4 Resolution units](https://www.w3.org/TR/css-values-4/#resolution)
///
/// "dppx: Dots per px unit." "1dppx is equivalent to 96dpi"
#[must_use]
pub fn compute_resolution(value: GetValue<'_>) -> GetValue<'_> {
    let GetValue::Resolution(n, unit) = value else {
        return value;
    };
    let dppx = match unit {
        StyleDimension::Dpi => n / PX_PER_IN,
        StyleDimension::Dpcm => n / (PX_PER_IN / 2.54),
        _ => n,
    };
    GetValue::Resolution(dppx, StyleDimension::Dppx)
}

/// Convert any dimensioned value to its canonical unit.
#[must_use]
pub fn compute_units<'a>(value: GetValue<'a>, units: &UnitContext) -> GetValue<'a> {
    match value {
        GetValue::Length(..) => compute_length(value, units),
        GetValue::Angle(..) => compute_angle(value),
        GetValue::Time(..) => compute_time(value),
        GetValue::Frequency(..) => compute_frequency(value),
        GetValue::Resolution(..) => compute_resolution(value),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(value: f32, unit: StyleDimension, units: &UnitContext) -> f32 {
        compute_length(GetValue::Length(value, unit), units).number()
    }

    #[test]
    fn test_absolute_lengths() {
        let units = UnitContext::default();
        assert_eq!(px(1.0, StyleDimension::In, &units), 96.0);
        assert_eq!(px(72.0, StyleDimension::Pt, &units), 96.0);
        assert_eq!(px(1.0, StyleDimension::Pc, &units), 16.0);
        assert!((px(2.54, StyleDimension::Cm, &units) - 96.0).abs() < 1e-3);
        assert!((px(25.4, StyleDimension::Mm, &units) - 96.0).abs() < 1e-3);
    }

    #[test]
    fn test_font_relative_lengths() {
        let units = UnitContext {
            font_size: 20.0,
            root_font_size: 10.0,
            ..UnitContext::default()
        };
        assert_eq!(px(2.0, StyleDimension::Em, &units), 40.0);
        assert_eq!(px(2.0, StyleDimension::Ex, &units), 20.0);
        assert_eq!(px(2.0, StyleDimension::Ch, &units), 20.0);
        assert_eq!(px(2.0, StyleDimension::Rem, &units), 20.0);

        let units = UnitContext {
            zero_advance: Some(7.0),
            ..units
        };
        assert_eq!(px(2.0, StyleDimension::Ch, &units), 14.0);
    }

    #[test]
    fn test_viewport_lengths() {
        let units = UnitContext {
            viewport_width: 800.0,
            viewport_height: 600.0,
            ..UnitContext::default()
        };
        assert_eq!(px(10.0, StyleDimension::Vw, &units), 80.0);
        assert_eq!(px(10.0, StyleDimension::Vh, &units), 60.0);
        assert_eq!(px(10.0, StyleDimension::Vmin, &units), 60.0);
        assert_eq!(px(10.0, StyleDimension::Vmax, &units), 80.0);
        assert_eq!(px(10.0, StyleDimension::Vw, &UnitContext::default()), 0.0);
    }

    #[test]
    fn test_other_kinds() {
        let v = compute_angle(GetValue::Angle(0.5, StyleDimension::Turn));
        assert!((v.number() - PI).abs() < 1e-6);
        assert_eq!(v.dimension(), StyleDimension::Rad);
        assert_eq!(compute_time(GetValue::Time(1000.0, StyleDimension::Ms)).number(), 1.0);
        assert_eq!(compute_frequency(GetValue::Frequency(2.0, StyleDimension::Khz)).number(), 2000.0);
        assert_eq!(compute_resolution(GetValue::Resolution(192.0, StyleDimension::Dpi)).number(), 2.0);
    }

    #[test]
    fn test_other_kinds_pass_through() {
        let units = UnitContext::default();
        assert_eq!(compute_units(GetValue::Percentage(50.0), &units), GetValue::Percentage(50.0));
        assert_eq!(compute_length(GetValue::Keyword("auto"), &units), GetValue::Keyword("auto"));
        assert_eq!(compute_angle(GetValue::Number(3.0)), GetValue::Number(3.0));
    }

    #[test]
    fn test_foreign_unit_becomes_canonical() {
        let units = UnitContext::default();
        assert_eq!(
            compute_units(GetValue::Length(2.0, StyleDimension::Deg), &units),
            GetValue::Length(2.0, StyleDimension::Px)
        );
        assert_eq!(
            compute_units(GetValue::Angle(1.0, StyleDimension::Px), &units),
            GetValue::Angle(1.0, StyleDimension::Rad)
        );
        assert_eq!(
            compute_units(GetValue::Time(4.0, StyleDimension::Hz), &units),
            GetValue::Time(4.0, StyleDimension::S)
        );
        assert_eq!(
            compute_units(GetValue::Frequency(5.0, StyleDimension::S), &units),
            GetValue::Frequency(5.0, StyleDimension::Hz)
        );
        assert_eq!(
            compute_units(GetValue::Resolution(6.0, StyleDimension::Px), &units),
            GetValue::Resolution(6.0, StyleDimension::Dppx)
        );
    }
}
