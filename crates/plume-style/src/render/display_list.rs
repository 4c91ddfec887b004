//! Display list: a canvas that records instead of drawing.
//!
//! [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! Commands are stored in painting order (back to front), so a renderer can
//! replay them as-is. Tests and the CLI inspect the list directly.

use std::collections::HashMap;

use serde::Serialize;

use crate::cascade::FontDescription;

use super::canvas::{BorderSide, Brush, Canvas, ImageRepeat};
use super::geometry::{BorderRadii, Rect};

/// A single drawing command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DisplayCommand {
    /// Fill a possibly rounded rectangle.
    ///
    /// Used for background colors and gradients.
    FillRect {
        /// Area to fill
        rect: Rect,
        /// Corner radii, all zero for sharp corners
        radii: BorderRadii,
        /// Fill
        brush: Brush,
    },

    /// Draw an external image.
    ///
    /// The `url` is the lookup key for the image data in the renderer's
    /// image store.
    DrawImage {
        /// Image address
        url: String,
        /// Position and size of the first tile
        tile: Rect,
        /// Area outside of which nothing is drawn
        clip: Rect,
        /// Tiling
        repeat: ImageRepeat,
    },

    /// Stroke a border.
    DrawBorder {
        /// The border box
        rect: Rect,
        /// Outer corner radii
        radii: BorderRadii,
        /// Top, right, bottom, left
        sides: [BorderSide; 4],
    },
}

/// A list of drawing commands in painting order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
    #[serde(skip)]
    images: HashMap<String, (f32, f32)>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `(width, height)` as the natural size of `url`.
    pub fn register_image(&mut self, url: impl Into<String>, width: f32, height: f32) {
        let _ = self.images.insert(url.into(), (width, height));
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every command, keeping registered images.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DisplayList {
    type Font = FontDescription;

    fn font(&mut self, description: &FontDescription) -> FontDescription {
        description.clone()
    }

    fn fill_rect(&mut self, rect: Rect, radii: &BorderRadii, brush: &Brush) {
        self.push(DisplayCommand::FillRect {
            rect,
            radii: *radii,
            brush: brush.clone(),
        });
    }

    fn draw_image(&mut self, url: &str, tile: Rect, clip: Rect, repeat: ImageRepeat) {
        self.push(DisplayCommand::DrawImage {
            url: url.to_string(),
            tile,
            clip,
            repeat,
        });
    }

    fn image_size(&self, url: &str) -> Option<(f32, f32)> {
        self.images.get(url).copied()
    }

    fn draw_border(&mut self, rect: Rect, radii: &BorderRadii, sides: &[BorderSide; 4]) {
        self.push(DisplayCommand::DrawBorder {
            rect,
            radii: *radii,
            sides: *sides,
        });
    }
}
