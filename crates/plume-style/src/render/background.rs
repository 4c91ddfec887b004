//! Backgrounds.
//!
//! [CSS Backgrounds and Borders Module Level 3 § 3](https://www.w3.org/TR/css-backgrounds-3/#backgrounds)

use core::f32::consts::{PI, SQRT_2};

use crate::cascade::{StyleCascade, compute_angle, compute_length};
use crate::property::PropertyId;
use crate::values::{GetValue, Gradient, Image, SetValue, resolve_stops};

use super::border::border_radii;
use super::canvas::{Brush, Canvas, ImageRepeat};
use super::geometry::{BorderRadii, Point, Rect, ViewGeometry};

/// Upper bound on gradient tiles painted for one layer.
const MAX_TILES: usize = 4096;

/// [§ 3.11 Painting Area](https://www.w3.org/TR/css-backgrounds-3/#background-layers)
///
/// "The background of a box can have multiple layers... The first image in
/// the list is the layer closest to the user, the next one is painted
/// behind the first, and so on. The background color, if present, is
/// painted below all of the other layers."
///
/// "The background color is clipped according to the background-clip value
/// associated with the bottom-most background image layer."
pub fn render_background<C: Canvas>(
    cascade: &StyleCascade<'_>,
    canvas: &mut C,
    geometry: &ViewGeometry,
) {
    let layers = cascade.array_size(PropertyId::BackgroundImage).max(1);
    let radii = border_radii(cascade, geometry.border_box());

    let color = cascade.computed_value(PropertyId::BackgroundColor).color();
    if !color.is_transparent() {
        let clip = cascade.computed_value_at(PropertyId::BackgroundClip, layers - 1);
        let area = geometry.visual_box(clip.text());
        if !area.is_empty() {
            canvas.fill_rect(area, &geometry.visual_radii(clip.text(), radii), &Brush::Solid { color });
        }
    }

    for index in (0..layers).rev() {
        paint_layer(cascade, canvas, geometry, radii, index);
    }
}

fn paint_layer<C: Canvas>(
    cascade: &StyleCascade<'_>,
    canvas: &mut C,
    geometry: &ViewGeometry,
    radii: BorderRadii,
    index: usize,
) {
    let Some(image) = cascade.computed_image(PropertyId::BackgroundImage, index) else {
        return;
    };
    let value = |p: PropertyId| cascade.computed_value_at(p, index);

    // [§ 3.7 'background-origin'] "the background positioning area"
    let area = geometry.visual_box(value(PropertyId::BackgroundOrigin).text());
    let clip_keyword = value(PropertyId::BackgroundClip).text();
    let clip = geometry.visual_box(clip_keyword);
    if clip.is_empty() {
        return;
    }

    let natural = match image {
        Image::Url(url) => canvas.image_size(url.text()),
        Image::Gradient(_) => None,
    };
    let (mut width, mut height) = background_size(
        value(PropertyId::BackgroundSizeX),
        value(PropertyId::BackgroundSizeY),
        area,
        natural,
    );
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    let repeat_x = value(PropertyId::BackgroundRepeatX).text();
    let repeat_y = value(PropertyId::BackgroundRepeatY).text();

    // [§ 3.4] "round: ... the image is rescaled so that it does ... fit a
    // whole number of times in the background positioning area." "If
    // background-repeat is round for one dimension only and if
    // background-size is auto for the other dimension, then there is a
    // third step: that other dimension is scaled so that the original
    // aspect ratio is restored."
    let auto_x = value(PropertyId::BackgroundSizeX).is_keyword_named("auto");
    let auto_y = value(PropertyId::BackgroundSizeY).is_keyword_named("auto");
    if repeat_x == "round" {
        let rounded = area.width / (area.width / width).round().max(1.0);
        if repeat_y != "round" && auto_y {
            height *= rounded / width;
        }
        width = rounded;
    }
    if repeat_y == "round" {
        let rounded = area.height / (area.height / height).round().max(1.0);
        if repeat_x != "round" && auto_x {
            width *= rounded / height;
        }
        height = rounded;
    }

    // [§ 3.6 'background-position'] "A percentage for the horizontal offset
    // is relative to (width of background positioning area - width of
    // background image)."
    let offset = |v: GetValue<'_>, free: f32| match v {
        GetValue::Percentage(pct) => free * pct / 100.0,
        GetValue::Length(px, _) => px,
        _ => 0.0,
    };
    let mut tile = Rect::new(
        area.x + offset(value(PropertyId::BackgroundPositionX), area.width - width),
        area.y + offset(value(PropertyId::BackgroundPositionY), area.height - height),
        width,
        height,
    );

    // [§ 3.4] "space: The image is repeated as often as will fit within the
    // background positioning area without being clipped and then the images
    // are spaced out to fill the area. The first and last images touch the
    // edges of the area. If the background painting area is larger than the
    // background positioning area, then the pattern repeats to fill the
    // background painting area. The value of background-position for this
    // direction is ignored, unless there is not enough space for two copies
    // of the image in this direction, in which case only one image is placed
    // and background-position determines its position."
    let mut repeat = ImageRepeat {
        x: matches!(repeat_x, "repeat" | "round"),
        y: matches!(repeat_y, "repeat" | "round"),
        spacing: Point::default(),
    };
    if repeat_x == "space" {
        let count = (area.width / width).floor();
        if count >= 2.0 {
            repeat.x = true;
            repeat.spacing.x = (area.width - count * width) / (count - 1.0);
            tile.x = area.x;
        }
    }
    if repeat_y == "space" {
        let count = (area.height / height).floor();
        if count >= 2.0 {
            repeat.y = true;
            repeat.spacing.y = (area.height - count * height) / (count - 1.0);
            tile.y = area.y;
        }
    }

    match image {
        Image::Url(url) => canvas.draw_image(url.text(), tile, clip, repeat),
        Image::Gradient(gradient) => {
            let clip_radii = geometry.visual_radii(clip_keyword, radii);
            for each in tiles(tile, clip, repeat) {
                let Some(visible) = each.intersect(&clip) else {
                    continue;
                };
                // Only a tile covering the whole clip keeps the rounded corners.
                let corner_radii = if each.contains(&clip) {
                    clip_radii
                } else {
                    BorderRadii::default()
                };
                canvas.fill_rect(visible, &corner_radii, &gradient_brush(cascade, gradient, each));
            }
        }
    }
}

/// [§ 3.9 'background-size'](https://www.w3.org/TR/css-backgrounds-3/#background-size)
///
/// - "contain: Scale the image, while preserving its intrinsic aspect
///   ratio (if any), to the largest size such that both its width and its
///   height can fit inside the background positioning area."
/// - "cover: Scale the image, while preserving its intrinsic aspect ratio
///   (if any), to the smallest size such that both its width and its height
///   can completely cover the background positioning area."
/// - "auto: ... If the image has both horizontal and vertical intrinsic
///   dimensions, it's rendered at that size." With one auto, the other
///   follows the aspect ratio. Images with no natural size, such as
///   gradients, fill the area.
#[must_use]
pub fn background_size(
    x: GetValue<'_>,
    y: GetValue<'_>,
    area: Rect,
    natural: Option<(f32, f32)>,
) -> (f32, f32) {
    let natural = natural.filter(|(w, h)| *w > 0.0 && *h > 0.0);
    if x.is_keyword_named("cover") || x.is_keyword_named("contain") {
        let Some((w, h)) = natural else {
            return (area.width, area.height);
        };
        let (sx, sy) = (area.width / w, area.height / h);
        let scale = if x.is_keyword_named("cover") { sx.max(sy) } else { sx.min(sy) };
        return (w * scale, h * scale);
    }

    let resolve = |v: GetValue<'_>, extent: f32| match v {
        GetValue::Length(px, _) => Some(px),
        GetValue::Percentage(pct) => Some(extent * pct / 100.0),
        _ => None,
    };
    match (resolve(x, area.width), resolve(y, area.height)) {
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => natural.map_or((w, area.height), |(nw, nh)| (w, w * nh / nw)),
        (None, Some(h)) => natural.map_or((area.width, h), |(nw, nh)| (h * nw / nh, h)),
        (None, None) => natural.unwrap_or((area.width, area.height)),
    }
}

/// Tile rectangles covering `clip`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tiles(first: Rect, clip: Rect, repeat: ImageRepeat) -> Vec<Rect> {
    // Tile origins along one axis: back up from the first tile to the clip
    // start, then step until past the clip end.
    let axis = |start: f32, size: f32, gap: f32, repeats: bool, lo: f32, hi: f32| -> Vec<f32> {
        if !repeats {
            return vec![start];
        }
        let step = size + gap;
        let back = ((start - lo) / step).ceil().max(0.0);
        let mut at = start - back * step;
        let mut out = Vec::new();
        while at < hi && out.len() < MAX_TILES {
            out.push(at);
            at += step;
        }
        out
    };
    let xs = axis(first.x, first.width, repeat.spacing.x, repeat.x, clip.x, clip.right());
    let ys = axis(first.y, first.height, repeat.spacing.y, repeat.y, clip.y, clip.bottom());
    ys.iter()
        .flat_map(|y| xs.iter().map(move |x| Rect::new(*x, *y, first.width, first.height)))
        .take(MAX_TILES)
        .collect()
}

/// Resolve a gradient over the box `tile` into a brush.
#[must_use]
pub fn gradient_brush(cascade: &StyleCascade<'_>, gradient: &Gradient, tile: Rect) -> Brush {
    if gradient.is_radial() {
        radial_brush(cascade, gradient, tile)
    } else {
        linear_brush(cascade, gradient, tile)
    }
}

/// [CSS Images 3 § 3.1.1](https://www.w3.org/TR/css-images-3/#linear-gradient-syntax)
///
/// "If the argument instead specifies a corner of the box such as to top
/// left, the gradient line must be angled such that it points into the same
/// quadrant as the specified corner, and it must be perpendicular to a line
/// that intersects the two neighboring corners of the gradient box."
///
/// "The gradient line's length is abs(W * sin(A)) + abs(H * cos(A))"
fn linear_brush(cascade: &StyleCascade<'_>, gradient: &Gradient, tile: Rect) -> Brush {
    let (w, h) = (tile.width, tile.height);
    let corner = h.atan2(w);
    let angle = match gradient.linear_angle.as_get() {
        GetValue::Keyword("to top right") => corner,
        GetValue::Keyword("to bottom right") => PI - corner,
        GetValue::Keyword("to bottom left") => PI + corner,
        GetValue::Keyword("to top left") => -corner,
        v => compute_angle(v).number(),
    };
    let length = (w * angle.sin()).abs() + (h * angle.cos()).abs();
    // 0deg points up, angles run clockwise.
    let direction = Point::new(angle.sin(), -angle.cos());
    let center = tile.center();
    let half = length / 2.0;
    Brush::Linear {
        start: Point::new(center.x - direction.x * half, center.y - direction.y * half),
        end: Point::new(center.x + direction.x * half, center.y + direction.y * half),
        stops: resolve_stops(&gradient.stops, length, cascade),
    }
}

/// [CSS Images 3 § 3.2.2](https://www.w3.org/TR/css-images-3/#radial-size)
///
/// - "closest-side: The ending shape is sized so that it exactly meets the
///   side of the gradient box closest to the gradient's center."
/// - "farthest-side: Same as closest-side, except the ending shape is sized
///   based on the farthest side(s)."
/// - "closest-corner: The ending shape is sized so that it passes through
///   the corner of the gradient box closest to the gradient's center. If
///   the shape is an ellipse, the ending shape is given the same aspect
///   ratio it would have if closest-side were specified."
/// - "farthest-corner: Same as closest-corner, except the ending shape is
///   sized based on the farthest corner."
fn radial_brush(cascade: &StyleCascade<'_>, gradient: &Gradient, tile: Rect) -> Brush {
    let units = cascade.unit_context();
    let position = |v: &SetValue, extent: f32| match compute_length(v.as_get(), &units) {
        GetValue::Percentage(pct) => extent * pct / 100.0,
        GetValue::Length(px, _) => px,
        _ => extent / 2.0,
    };
    let center = Point::new(
        tile.x + position(&gradient.radial_position_x, tile.width),
        tile.y + position(&gradient.radial_position_y, tile.height),
    );

    let dx = [(center.x - tile.x).abs(), (tile.right() - center.x).abs()];
    let dy = [(center.y - tile.y).abs(), (tile.bottom() - center.y).abs()];
    let circle = gradient.radial_shape.is_keyword_named("circle");
    let (near, far) = if circle {
        let near = dx[0].min(dx[1]).min(dy[0]).min(dy[1]);
        let far = dx[0].max(dx[1]).max(dy[0]).max(dy[1]);
        (Point::new(near, near), Point::new(far, far))
    } else {
        (
            Point::new(dx[0].min(dx[1]), dy[0].min(dy[1])),
            Point::new(dx[0].max(dx[1]), dy[0].max(dy[1])),
        )
    };
    let corners = [
        dx[0].hypot(dy[0]),
        dx[0].hypot(dy[1]),
        dx[1].hypot(dy[0]),
        dx[1].hypot(dy[1]),
    ];
    let corner = |side: Point, pick: fn(f32, f32) -> f32| {
        if circle {
            let r = corners.into_iter().reduce(pick).unwrap_or(0.0);
            Point::new(r, r)
        } else {
            Point::new(side.x * SQRT_2, side.y * SQRT_2)
        }
    };

    let size = |v: &SetValue, extent: f32| -> Option<f32> {
        match compute_length(v.as_get(), &units) {
            GetValue::Length(px, _) => Some(px),
            GetValue::Percentage(pct) => Some(extent * pct / 100.0),
            _ => None,
        }
    };
    let radius = match gradient.radial_size_x.text() {
        "closest-side" => near,
        "farthest-side" => far,
        "closest-corner" => corner(near, f32::min),
        "farthest-corner" => corner(far, f32::max),
        _ => {
            let x = size(&gradient.radial_size_x, tile.width).unwrap_or(0.0);
            let y = if circle {
                x
            } else {
                size(&gradient.radial_size_y, tile.height).unwrap_or(x)
            };
            Point::new(x, y)
        }
    };

    Brush::Radial {
        center,
        radius,
        stops: resolve_stops(&gradient.stops, radius.x, cascade),
    }
}
