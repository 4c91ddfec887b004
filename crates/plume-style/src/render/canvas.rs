//! The drawing seam.
//!
//! The cascade never touches pixels. It resolves backgrounds, borders and
//! fonts into the plain values below and hands them to a [`Canvas`].

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::cascade::FontDescription;
use crate::values::Colorf;

use super::geometry::{BorderRadii, Point, Rect};

/// How to fill an area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Brush {
    /// One color.
    Solid {
        /// Fill color
        color: Colorf,
    },
    /// [CSS Images 3 § 3.1](https://www.w3.org/TR/css-images-3/#linear-gradients)
    ///
    /// Colors vary along the line from `start` to `end`.
    Linear {
        /// Where offset 0 lies
        start: Point,
        /// Where offset 1 lies
        end: Point,
        /// `(color, offset)` pairs, offsets as fractions of the line
        stops: Vec<(Colorf, f32)>,
    },
    /// [CSS Images 3 § 3.2](https://www.w3.org/TR/css-images-3/#radial-gradients)
    ///
    /// Colors vary along the ray from `center` to the ending ellipse.
    Radial {
        /// Center of the ending shape
        center: Point,
        /// Horizontal and vertical radius of the ending shape
        radius: Point,
        /// `(color, offset)` pairs, offsets as fractions of the ray
        stops: Vec<(Colorf, f32)>,
    },
}

/// How an image tile repeats over its clip area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ImageRepeat {
    /// Repeat horizontally.
    pub x: bool,
    /// Repeat vertically.
    pub y: bool,
    /// Gap between tiles, for `space`.
    pub spacing: Point,
}

/// [§ 4.3 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// "No border."
    #[default]
    None,
    /// "Same as none, but has different behavior in the border conflict
    /// resolution rules for border-collapsed tables."
    Hidden,
    /// "A series of round dots."
    Dotted,
    /// "A series of square-ended dashes."
    Dashed,
    /// "A single line segment."
    Solid,
    /// "Two parallel solid lines with some space between them."
    Double,
    /// "Looks as if it were carved in the canvas."
    Groove,
    /// "Looks as if it were coming out of the canvas."
    Ridge,
    /// "Looks as if the content on the inside of the border is sunken into
    /// the canvas."
    Inset,
    /// "Looks as if the content on the inside of the border is coming out
    /// of the canvas."
    Outset,
}

/// One resolved border side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BorderSide {
    /// Width in px, snapped to device pixels.
    pub width: f32,
    /// Line style.
    pub style: BorderStyle,
    /// Line color.
    pub color: Colorf,
}

/// A drawing target with a font factory.
pub trait Canvas {
    /// The font handle the canvas hands out.
    type Font;

    /// A font for `description`.
    fn font(&mut self, description: &FontDescription) -> Self::Font;

    /// Fill `rect`, rounded by `radii`.
    fn fill_rect(&mut self, rect: Rect, radii: &BorderRadii, brush: &Brush);

    /// Draw the image at `url` into `tile`, repeated as `repeat` says and
    /// clipped to `clip`.
    fn draw_image(&mut self, url: &str, tile: Rect, clip: Rect, repeat: ImageRepeat);

    /// Natural size of the image at `url`, if it is known.
    fn image_size(&self, url: &str) -> Option<(f32, f32)>;

    /// Stroke the border of `rect`; sides are top, right, bottom, left.
    fn draw_border(&mut self, rect: Rect, radii: &BorderRadii, sides: &[BorderSide; 4]);
}
