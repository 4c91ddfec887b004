//! Borders.
//!
//! [CSS Backgrounds and Borders Module Level 3 § 4-5](https://www.w3.org/TR/css-backgrounds-3/#borders)

use crate::cascade::StyleCascade;
use crate::property::PropertyId;
use crate::values::GetValue;

use super::canvas::{BorderSide, BorderStyle, Canvas};
use super::geometry::{BorderRadii, EdgeSizes, Point, Rect, ViewGeometry};

const SIDES: [(PropertyId, PropertyId, PropertyId); 4] = [
    (PropertyId::BorderTopWidth, PropertyId::BorderTopStyle, PropertyId::BorderTopColor),
    (PropertyId::BorderRightWidth, PropertyId::BorderRightStyle, PropertyId::BorderRightColor),
    (PropertyId::BorderBottomWidth, PropertyId::BorderBottomStyle, PropertyId::BorderBottomColor),
    (PropertyId::BorderLeftWidth, PropertyId::BorderLeftStyle, PropertyId::BorderLeftColor),
];

/// [CSS Values 4 § 6.1.2 Snapping](https://www.w3.org/TR/css-values-4/#snap-a-length-as-a-border-width)
///
/// "If len is an integer number of device pixels, do nothing. If len > 0,
/// but less than 1 device pixel, round len up to 1 device pixel. If len > 1
/// device pixel, round it down to the nearest integer number of device
/// pixels."
#[must_use]
pub fn snap_width(px: f32, device_pixel_ratio: f32) -> f32 {
    if px <= 0.0 {
        return 0.0;
    }
    let ratio = if device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 };
    (px * ratio).floor().max(1.0) / ratio
}

/// Computed border widths, snapped to device pixels.
#[must_use]
pub fn border_widths(cascade: &StyleCascade<'_>) -> EdgeSizes {
    let ratio = cascade.environment().device_pixel_ratio;
    let width = |i: usize| snap_width(cascade.computed_value(SIDES[i].0).number(), ratio);
    EdgeSizes {
        top: width(0),
        right: width(1),
        bottom: width(2),
        left: width(3),
    }
}

/// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// "Percentages for the horizontal radius refer to the width of the border
/// box, whereas percentages for the vertical radius refer to the height of
/// the border box." Overlapping radii are scaled down.
#[must_use]
pub fn border_radii(cascade: &StyleCascade<'_>, border_box: Rect) -> BorderRadii {
    let radius = |property: PropertyId, extent: f32| match cascade.computed_value(property) {
        GetValue::Length(px, _) => px.max(0.0),
        GetValue::Percentage(pct) => (extent * pct / 100.0).max(0.0),
        _ => 0.0,
    };
    let corner = |x: PropertyId, y: PropertyId| {
        Point::new(radius(x, border_box.width), radius(y, border_box.height))
    };
    BorderRadii {
        top_left: corner(PropertyId::BorderTopLeftRadiusX, PropertyId::BorderTopLeftRadiusY),
        top_right: corner(PropertyId::BorderTopRightRadiusX, PropertyId::BorderTopRightRadiusY),
        bottom_right: corner(
            PropertyId::BorderBottomRightRadiusX,
            PropertyId::BorderBottomRightRadiusY,
        ),
        bottom_left: corner(
            PropertyId::BorderBottomLeftRadiusX,
            PropertyId::BorderBottomLeftRadiusY,
        ),
    }
    .scaled_to(border_box)
}

/// The four resolved sides: top, right, bottom, left.
#[must_use]
pub fn border_sides(cascade: &StyleCascade<'_>) -> [BorderSide; 4] {
    let widths = border_widths(cascade);
    let widths = [widths.top, widths.right, widths.bottom, widths.left];
    let mut sides = [BorderSide::default(); 4];
    for ((side, width), (_, style, color)) in sides.iter_mut().zip(widths).zip(SIDES) {
        *side = BorderSide {
            width,
            style: cascade
                .computed_value(style)
                .text()
                .parse()
                .unwrap_or_default(),
            color: cascade.computed_value(color).color(),
        };
    }
    sides
}

/// Issue one `draw_border` for the element's border box. Nothing is drawn
/// when every side has zero width.
pub fn render_border<C: Canvas>(cascade: &StyleCascade<'_>, canvas: &mut C, geometry: &ViewGeometry) {
    let sides = border_sides(cascade);
    let visible = sides
        .iter()
        .any(|s| s.width > 0.0 && !matches!(s.style, BorderStyle::None | BorderStyle::Hidden));
    if !visible {
        return;
    }
    let rect = geometry.border_box();
    canvas.draw_border(rect, &border_radii(cascade, rect), &sides);
}
