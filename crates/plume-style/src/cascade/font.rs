//! Font descriptions.
//!
//! [CSS Fonts Module Level 4](https://www.w3.org/TR/css-fonts-4/)

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// [§ 2.4 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// "Selects a face that is classified as a normal face."
    #[default]
    Normal,
    /// "Selects a font that is labeled as an italic face."
    Italic,
    /// "Selects a font that is labeled as an oblique face."
    Oblique,
}

/// Everything a font factory needs to pick a face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontDescription {
    /// Family names in preference order, generic families last.
    pub families: Vec<String>,
    /// Computed font size in px.
    pub size: f32,
    /// Numeric weight, 400 is normal.
    pub weight: f32,
    /// Face style.
    pub style: FontStyle,
    /// Line height in px, `None` for `normal`.
    pub line_height: Option<f32>,
}

impl Default for FontDescription {
    fn default() -> Self {
        Self {
            families: vec!["sans-serif".to_string()],
            size: super::units::DEFAULT_FONT_SIZE,
            weight: 400.0,
            style: FontStyle::Normal,
            line_height: None,
        }
    }
}

/// Glyph measurements supplied by the font subsystem.
///
/// [CSS Values 4 § 6.1.1](https://www.w3.org/TR/css-values-4/#ch)
///
/// "Equal to the used advance measure of the "0" (ZERO, U+0030) glyph in the
/// font used to render it."
pub trait FontMetrics {
    /// Advance width of "0" in px for the given font.
    fn zero_advance(&self, font: &FontDescription) -> f32;
}

/// [§ 2.2.1 Relative Weights](https://www.w3.org/TR/css-fonts-4/#relative-weights)
///
/// | Inherited value (w) | bolder      | lighter     |
/// |---------------------|-------------|-------------|
/// | w < 100             | 400         | No change   |
/// | 100 ≤ w < 350       | 400         | 100         |
/// | 350 ≤ w < 550       | 700         | 100         |
/// | 550 ≤ w < 750       | 900         | 400         |
/// | 750 ≤ w < 900       | 900         | 700         |
/// | 900 ≤ w             | No change   | 700         |
#[must_use]
pub fn bolder(inherited: f32) -> f32 {
    match inherited {
        w if w < 350.0 => 400.0,
        w if w < 550.0 => 700.0,
        w if w < 900.0 => 900.0,
        w => w,
    }
}

/// See [`bolder`].
#[must_use]
pub fn lighter(inherited: f32) -> f32 {
    match inherited {
        w if w < 100.0 => w,
        w if w < 550.0 => 100.0,
        w if w < 750.0 => 400.0,
        _ => 700.0,
    }
}
