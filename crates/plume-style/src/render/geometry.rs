//! Box geometry.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)

use serde::Serialize;

use crate::cascade::StyleCascade;
use crate::property::PropertyId;
use crate::values::GetValue;

use super::border::border_widths;

/// A point, or a pair of radii.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle positioned in 2D space.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true if the rectangle covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrink by `edges` on each side. Sizes never go negative.
    #[must_use]
    pub fn inset(&self, edges: EdgeSizes) -> Self {
        Self {
            x: self.x + edges.left,
            y: self.y + edges.top,
            width: (self.width - edges.left - edges.right).max(0.0),
            height: (self.height - edges.top - edges.bottom).max(0.0),
        }
    }

    /// Grow by `edges` on each side.
    #[must_use]
    pub fn outset(&self, edges: EdgeSizes) -> Self {
        Self {
            x: self.x - edges.left,
            y: self.y - edges.top,
            width: self.width + edges.left + edges.right,
            height: self.height + edges.top + edges.bottom,
        }
    }

    /// The overlap of two rectangles, `None` when they do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right > x && bottom > y).then(|| Self::new(x, y, right - x, bottom - y))
    }

    /// Returns true if `other` lies entirely inside.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Edge sizes for padding, border, or margin.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

impl EdgeSizes {
    /// The same size on every side.
    #[must_use]
    pub const fn uniform(size: f32) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }
}

impl core::ops::Add for EdgeSizes {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            top: self.top + other.top,
            right: self.right + other.right,
            bottom: self.bottom + other.bottom,
            left: self.left + other.left,
        }
    }
}

/// [§ 5 Rounded Corners](https://www.w3.org/TR/css-backgrounds-3/#corners)
///
/// Corner radii in px, `x` horizontal and `y` vertical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BorderRadii {
    /// Top-left corner.
    pub top_left: Point,
    /// Top-right corner.
    pub top_right: Point,
    /// Bottom-right corner.
    pub bottom_right: Point,
    /// Bottom-left corner.
    pub bottom_left: Point,
}

impl BorderRadii {
    /// Returns true if every corner is square.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
            .iter()
            .all(|r| r.x <= 0.0 || r.y <= 0.0)
    }

    /// [§ 5.5 Overlapping Curves](https://www.w3.org/TR/css-backgrounds-3/#corner-overlap)
    ///
    /// "Let f = min(Li/Si), where i ∈ {top, right, bottom, left}, Si is the
    /// sum of the two corresponding radii of the corners on side i, and
    /// Ltop = Lbottom = the width of the box, and Lleft = Lright = the
    /// height of the box. If f < 1, then all corner radii are reduced by
    /// multiplying them by f."
    #[must_use]
    pub fn scaled_to(self, rect: Rect) -> Self {
        let ratio = |length: f32, sum: f32| if sum > 0.0 { length / sum } else { f32::INFINITY };
        let f = ratio(rect.width, self.top_left.x + self.top_right.x)
            .min(ratio(rect.width, self.bottom_left.x + self.bottom_right.x))
            .min(ratio(rect.height, self.top_left.y + self.bottom_left.y))
            .min(ratio(rect.height, self.top_right.y + self.bottom_right.y));
        if f >= 1.0 {
            return self;
        }
        let scale = |p: Point| Point::new(p.x * f, p.y * f);
        Self {
            top_left: scale(self.top_left),
            top_right: scale(self.top_right),
            bottom_right: scale(self.bottom_right),
            bottom_left: scale(self.bottom_left),
        }
    }

    /// [§ 5.2 Corner Shaping](https://www.w3.org/TR/css-backgrounds-3/#corner-shaping)
    ///
    /// "The padding edge (inner border) radius is the outer border radius
    /// minus the corresponding border thickness. In the case where this
    /// results in a negative value, the inner radius is zero."
    #[must_use]
    pub fn shrink(self, edges: EdgeSizes) -> Self {
        let shrink = |p: Point, dx: f32, dy: f32| Point::new((p.x - dx).max(0.0), (p.y - dy).max(0.0));
        Self {
            top_left: shrink(self.top_left, edges.left, edges.top),
            top_right: shrink(self.top_right, edges.right, edges.top),
            bottom_right: shrink(self.bottom_right, edges.right, edges.bottom),
            bottom_left: shrink(self.bottom_left, edges.left, edges.bottom),
        }
    }
}

/// Where an element sits, and the thickness of its edges.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// "Each box has a content area and optional surrounding padding, border,
/// and margin areas."
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ViewGeometry {
    /// Content area
    pub content_box: Rect,
    /// Padding thickness
    pub padding: EdgeSizes,
    /// Border thickness
    pub border: EdgeSizes,
    /// Margin thickness
    pub margin: EdgeSizes,
}

impl ViewGeometry {
    /// Geometry with edges taken from the cascade's computed values.
    ///
    /// [CSS Box 3 § 3, § 4](https://www.w3.org/TR/css-box-3/#margins)
    ///
    /// "Percentages: refer to logical width of containing block". `auto`
    /// margins count as 0. Border widths are snapped to device pixels.
    #[must_use]
    pub fn from_content_box(
        cascade: &StyleCascade<'_>,
        content_box: Rect,
        containing_width: f32,
    ) -> Self {
        let edge = |property: PropertyId| match cascade.computed_value(property) {
            GetValue::Length(px, _) => px,
            GetValue::Percentage(pct) => containing_width * pct / 100.0,
            _ => 0.0,
        };
        let edges = |sides: [PropertyId; 4]| EdgeSizes {
            top: edge(sides[0]),
            right: edge(sides[1]),
            bottom: edge(sides[2]),
            left: edge(sides[3]),
        };
        Self {
            content_box,
            padding: edges([
                PropertyId::PaddingTop,
                PropertyId::PaddingRight,
                PropertyId::PaddingBottom,
                PropertyId::PaddingLeft,
            ]),
            border: border_widths(cascade),
            margin: edges([
                PropertyId::MarginTop,
                PropertyId::MarginRight,
                PropertyId::MarginBottom,
                PropertyId::MarginLeft,
            ]),
        }
    }

    /// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
    ///
    /// "The padding box contains both the content and padding areas."
    #[must_use]
    pub fn padding_box(&self) -> Rect {
        self.content_box.outset(self.padding)
    }

    /// [§ 3.3 Borders](https://www.w3.org/TR/css-box-3/#borders)
    ///
    /// "The border box contains content, padding, and border areas."
    #[must_use]
    pub fn border_box(&self) -> Rect {
        self.padding_box().outset(self.border)
    }

    /// [§ 3.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    ///
    /// "The margin box is the outermost box, and contains all four areas."
    #[must_use]
    pub fn margin_box(&self) -> Rect {
        self.border_box().outset(self.margin)
    }

    /// The box a `<visual-box>` keyword names. Unknown keywords give the
    /// border box.
    #[must_use]
    pub fn visual_box(&self, keyword: &str) -> Rect {
        match keyword {
            "content-box" => self.content_box,
            "padding-box" => self.padding_box(),
            _ => self.border_box(),
        }
    }

    /// Border-box radii adjusted to the box a `<visual-box>` keyword names.
    #[must_use]
    pub fn visual_radii(&self, keyword: &str, radii: BorderRadii) -> BorderRadii {
        match keyword {
            "content-box" => radii.shrink(self.border + self.padding),
            "padding-box" => radii.shrink(self.border),
            _ => radii,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> ViewGeometry {
        ViewGeometry {
            content_box: Rect::new(30.0, 30.0, 100.0, 50.0),
            padding: EdgeSizes::uniform(10.0),
            border: EdgeSizes::uniform(5.0),
            margin: EdgeSizes::uniform(15.0),
        }
    }

    #[test]
    fn test_boxes_nest() {
        let g = geometry();
        assert_eq!(g.padding_box(), Rect::new(20.0, 20.0, 120.0, 70.0));
        assert_eq!(g.border_box(), Rect::new(15.0, 15.0, 130.0, 80.0));
        assert_eq!(g.margin_box(), Rect::new(0.0, 0.0, 160.0, 110.0));
        assert_eq!(g.visual_box("content-box"), g.content_box);
    }

    #[test]
    fn test_overlapping_radii_scale_down() {
        let radii = BorderRadii {
            top_left: Point::new(80.0, 10.0),
            top_right: Point::new(120.0, 10.0),
            ..BorderRadii::default()
        };
        let scaled = radii.scaled_to(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(scaled.top_left, Point::new(40.0, 5.0));
        assert_eq!(scaled.top_right, Point::new(60.0, 5.0));
    }

    #[test]
    fn test_inner_radii_shrink_by_border() {
        let radii = BorderRadii {
            top_left: Point::new(8.0, 3.0),
            ..BorderRadii::default()
        };
        let inner = geometry().visual_radii("padding-box", radii);
        assert_eq!(inner.top_left, Point::new(3.0, 0.0));
    }

    #[test]
    fn test_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersect(&Rect::new(5.0, 5.0, 10.0, 10.0)), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
        assert_eq!(a.intersect(&Rect::new(10.0, 0.0, 5.0, 5.0)), None);
    }
}
