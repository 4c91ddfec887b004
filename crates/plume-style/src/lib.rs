//! Declaration parsing, property cascade, and value computation for Plume.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - The token types that appear in declaration blocks
//!   - Comments and escapes
//!
//! - **Declaration Parsing** ([§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations))
//!   - `!important`
//!   - Functions and simple blocks as component values
//!
//! - **Styles** ([`Style`])
//!   - Typed property values with a fixed grammar per property
//!   - Shorthand expansion (margin, padding, border, border-radius,
//!     background, font, and their sub-shorthands)
//!   - Layered list values for background properties
//!   - `%N` argument substitution
//!
//! - **Cascade** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - Ordered style stacks per node, parent chains in a [`StyleArena`]
//!   - `inherit`, `initial` and `unset`
//!   - Cascaded, specified and computed values
//!
//! - **Computed Values** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Absolute and font-relative lengths, angles, times, frequencies and
//!     resolutions in canonical units
//!   - `font-size` and `font-weight` keywords, `currentcolor`
//!
//! - **Painting** ([CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/))
//!   - Background layers and gradients, borders with rounded corners, all
//!     through a [`Canvas`](render::Canvas)
//!
//! # Not Implemented
//!
//! - Selectors and stylesheets; callers build the style stacks
//! - Layout
//! - `calc()` and custom properties

/// Declaration and cascade errors.
pub mod error;

/// Style stacks, inheritance and value computation per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod cascade;

/// Declaration parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;

/// The property table.
pub mod property;

/// Backgrounds and borders per [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/).
pub mod render;

/// Declared values and shorthand expansion.
pub mod style;

/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;

/// Value types per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

pub use cascade::{
    CascadeId, Environment, FontDescription, FontMetrics, FontStyle, StyleArena, StyleCascade,
    UnitContext,
};
pub use error::{CascadeError, DeclarationError};
pub use property::PropertyId;
pub use style::{Layer, ParsedDeclaration, Style, StyleId, parse_declarations, substitute};
pub use values::{Colorf, GetValue, Gradient, GradientStop, Image, SetValue, StyleDimension, StyleValueType};
