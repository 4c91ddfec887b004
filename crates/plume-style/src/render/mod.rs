//! Painting backgrounds and borders from computed values.
//!
//! [CSS Backgrounds and Borders Module Level 3](https://www.w3.org/TR/css-backgrounds-3/)
//!
//! The cascade turns declarations into computed values; this module turns
//! those into calls on a [`Canvas`]. [`DisplayList`] is the canvas that
//! records them.

/// Background layers and gradients
pub mod background;

/// Border widths, radii and sides
pub mod border;

/// The drawing trait and its value types
pub mod canvas;

/// A canvas that records commands
pub mod display_list;

/// Boxes, edges and corner radii
pub mod geometry;

pub use background::{background_size, gradient_brush, render_background};
pub use border::{border_radii, border_sides, border_widths, render_border, snap_width};
pub use canvas::{BorderSide, BorderStyle, Brush, Canvas, ImageRepeat};
pub use display_list::{DisplayCommand, DisplayList};
pub use geometry::{BorderRadii, EdgeSizes, Point, Rect, ViewGeometry};
