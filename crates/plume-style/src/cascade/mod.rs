//! The cascade.
//!
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/)
//!
//! A [`StyleArena`] owns every [`Style`] and every cascade node. A node is an
//! ordered stack of styles (highest priority first) plus an optional parent
//! node for inheritance. Queries go through a [`StyleCascade`], a borrowed
//! view of one node together with the render-pass [`Environment`]:
//!
//! ```text
//! cascade_value    first style in the stack that declares the property
//!       │
//! specified_value  + inherit / initial / unset, inheritance, initial values
//!       │
//! computed_value   + unit conversion and per-property rules
//! ```

/// Font descriptions and the font metrics seam.
pub mod font;
/// Unit conversion to canonical units.
pub mod units;

use core::fmt;

pub use font::{FontDescription, FontMetrics, FontStyle};
pub use units::{
    UnitContext, compute_angle, compute_frequency, compute_length, compute_resolution,
    compute_time, compute_units,
};

use crate::error::CascadeError;
use crate::property::{CSS_WIDE_KEYWORDS, FONT_SIZE_KEYWORDS, PropertyId};
use crate::render::{Canvas, ViewGeometry};
use crate::style::{Layer, Style, StyleId};
use crate::values::{Colorf, GetValue, Image, StyleDimension};
use units::DEFAULT_FONT_SIZE;

/// Longest parent chain the arena accepts, root included.
pub const MAX_CASCADE_DEPTH: usize = 256;

/// Index of a cascade node inside a [`StyleArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CascadeId(pub(crate) usize);

#[derive(Debug, Default)]
struct CascadeNode {
    /// Highest priority first.
    styles: Vec<StyleId>,
    parent: Option<CascadeId>,
}

/// Owner of all styles and cascade nodes of an element tree.
///
/// Ids are only handed out by the arena, and a node can only point at a
/// parent that already exists, so parent chains always end at a root.
#[derive(Debug, Default)]
pub struct StyleArena {
    styles: Vec<Style>,
    cascades: Vec<CascadeNode>,
}

impl StyleArena {
    /// Create an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            styles: Vec::new(),
            cascades: Vec::new(),
        }
    }

    /// Move a style into the arena.
    pub fn add_style(&mut self, style: Style) -> StyleId {
        self.styles.push(style);
        StyleId(self.styles.len() - 1)
    }

    /// Borrow a style.
    ///
    /// # Errors
    ///
    /// [`CascadeError::UnknownStyle`] for ids from another arena.
    pub fn style(&self, id: StyleId) -> Result<&Style, CascadeError> {
        self.styles.get(id.0).ok_or(CascadeError::UnknownStyle(id))
    }

    /// Borrow a style for [`Style::set`].
    ///
    /// # Errors
    ///
    /// [`CascadeError::UnknownStyle`] for ids from another arena.
    pub fn style_mut(&mut self, id: StyleId) -> Result<&mut Style, CascadeError> {
        self.styles.get_mut(id.0).ok_or(CascadeError::UnknownStyle(id))
    }

    /// Add a cascade node over `styles` (highest priority first).
    ///
    /// # Errors
    ///
    /// Unknown style or parent ids, or a parent chain already at
    /// [`MAX_CASCADE_DEPTH`].
    pub fn add_cascade(
        &mut self,
        styles: Vec<StyleId>,
        parent: Option<CascadeId>,
    ) -> Result<CascadeId, CascadeError> {
        self.check_styles(&styles)?;
        if let Some(parent) = parent {
            let depth = self.depth(parent)?;
            if depth + 1 > MAX_CASCADE_DEPTH {
                return Err(CascadeError::TooDeep(depth + 1));
            }
        }
        self.cascades.push(CascadeNode { styles, parent });
        Ok(CascadeId(self.cascades.len() - 1))
    }

    /// Replace the style stack of a node.
    ///
    /// # Errors
    ///
    /// Unknown cascade or style ids.
    pub fn set_cascade(&mut self, id: CascadeId, styles: Vec<StyleId>) -> Result<(), CascadeError> {
        self.check_styles(&styles)?;
        self.node_mut(id)?.styles = styles;
        Ok(())
    }

    /// Re-parent a node.
    ///
    /// # Errors
    ///
    /// [`CascadeError::Cycle`] when `parent` is `id` or one of its
    /// descendants, [`CascadeError::TooDeep`] when some chain through `id`
    /// would exceed [`MAX_CASCADE_DEPTH`].
    pub fn set_parent(
        &mut self,
        id: CascadeId,
        parent: Option<CascadeId>,
    ) -> Result<(), CascadeError> {
        let _ = self.node(id)?;
        if let Some(parent) = parent {
            let _ = self.node(parent)?;
            if self.ancestors(parent).any(|a| a == id) {
                return Err(CascadeError::Cycle { child: id, parent });
            }
            let depth = self.depth(parent)? + self.height(id);
            if depth > MAX_CASCADE_DEPTH {
                return Err(CascadeError::TooDeep(depth));
            }
        }
        self.node_mut(id)?.parent = parent;
        Ok(())
    }

    /// The parent of a node.
    ///
    /// # Errors
    ///
    /// [`CascadeError::UnknownCascade`] for ids from another arena.
    pub fn parent(&self, id: CascadeId) -> Result<Option<CascadeId>, CascadeError> {
        Ok(self.node(id)?.parent)
    }

    /// The style stack of a node, highest priority first.
    ///
    /// # Errors
    ///
    /// [`CascadeError::UnknownCascade`] for ids from another arena.
    pub fn cascade_styles(&self, id: CascadeId) -> Result<&[StyleId], CascadeError> {
        Ok(&self.node(id)?.styles)
    }

    /// A query view of one node.
    ///
    /// # Errors
    ///
    /// [`CascadeError::UnknownCascade`] for ids from another arena.
    pub fn cascade<'a>(
        &'a self,
        id: CascadeId,
        env: &'a Environment<'a>,
    ) -> Result<StyleCascade<'a>, CascadeError> {
        let _ = self.node(id)?;
        Ok(StyleCascade {
            arena: self,
            id,
            env,
        })
    }

    /// Number of styles.
    #[must_use]
    pub const fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Number of cascade nodes.
    #[must_use]
    pub const fn cascade_count(&self) -> usize {
        self.cascades.len()
    }

    fn node(&self, id: CascadeId) -> Result<&CascadeNode, CascadeError> {
        self.cascades.get(id.0).ok_or(CascadeError::UnknownCascade(id))
    }

    fn node_mut(&mut self, id: CascadeId) -> Result<&mut CascadeNode, CascadeError> {
        self.cascades.get_mut(id.0).ok_or(CascadeError::UnknownCascade(id))
    }

    fn check_styles(&self, styles: &[StyleId]) -> Result<(), CascadeError> {
        match styles.iter().find(|s| s.0 >= self.styles.len()) {
            Some(unknown) => Err(CascadeError::UnknownStyle(*unknown)),
            None => Ok(()),
        }
    }

    /// `id` and its ancestors, nearest first.
    fn ancestors(&self, id: CascadeId) -> impl Iterator<Item = CascadeId> + '_ {
        core::iter::successors(Some(id), |c| self.cascades.get(c.0).and_then(|n| n.parent))
            .take(MAX_CASCADE_DEPTH + 1)
    }

    /// Nodes from `id` to its root, inclusive.
    fn depth(&self, id: CascadeId) -> Result<usize, CascadeError> {
        let _ = self.node(id)?;
        Ok(self.ancestors(id).count())
    }

    /// Nodes on the longest path from `id` down to a leaf, inclusive.
    fn height(&self, id: CascadeId) -> usize {
        (0..self.cascades.len())
            .filter_map(|n| self.ancestors(CascadeId(n)).position(|a| a == id))
            .max()
            .map_or(1, |distance| distance + 1)
    }
}

/// Render-pass inputs for unit conversion.
///
/// The default is a zero viewport, a device pixel ratio of 1 and no font
/// metrics, which makes `vw`-family units 0 and `ch` half an `em`.
#[derive(Clone, Copy)]
pub struct Environment<'a> {
    /// Viewport width in px.
    pub viewport_width: f32,
    /// Viewport height in px.
    pub viewport_height: f32,
    /// Device pixels per px.
    pub device_pixel_ratio: f32,
    /// Source of `ch` advances.
    pub font_metrics: Option<&'a dyn FontMetrics>,
}

impl<'a> Environment<'a> {
    /// An environment with the given viewport.
    #[must_use]
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            ..Self::default()
        }
    }

    /// Use `metrics` for `ch`.
    #[must_use]
    pub fn with_font_metrics(self, metrics: &'a dyn FontMetrics) -> Self {
        Self {
            font_metrics: Some(metrics),
            ..self
        }
    }
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self {
            viewport_width: 0.0,
            viewport_height: 0.0,
            device_pixel_ratio: 1.0,
            font_metrics: None,
        }
    }
}

impl fmt::Debug for Environment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("viewport_width", &self.viewport_width)
            .field("viewport_height", &self.viewport_height)
            .field("device_pixel_ratio", &self.device_pixel_ratio)
            .field("font_metrics", &self.font_metrics.is_some())
            .finish()
    }
}

/// Where a specified value came from.
#[derive(Clone, Copy)]
enum Source<'a> {
    Declared(&'a [Layer]),
    Initial(GetValue<'static>),
}

/// One element's resolution context.
///
/// A cheap `Copy` view. It borrows the arena, so no style can change while
/// a view is alive.
#[derive(Debug, Clone, Copy)]
pub struct StyleCascade<'a> {
    arena: &'a StyleArena,
    id: CascadeId,
    env: &'a Environment<'a>,
}

impl<'a> StyleCascade<'a> {
    /// The node this view reads.
    #[must_use]
    pub const fn id(&self) -> CascadeId {
        self.id
    }

    /// The render-pass environment.
    #[must_use]
    pub const fn environment(&self) -> &'a Environment<'a> {
        self.env
    }

    /// The parent element's view.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let parent = self.arena.cascades.get(self.id.0)?.parent?;
        Some(Self { id: parent, ..*self })
    }

    /// The root element's view.
    #[must_use]
    pub fn root(&self) -> Self {
        let id = self.arena.ancestors(self.id).last().unwrap_or(self.id);
        Self { id, ..*self }
    }

    fn declared_layers(&self, property: PropertyId) -> Option<&'a [Layer]> {
        let node = self.arena.cascades.get(self.id.0)?;
        node.styles
            .iter()
            .filter_map(|id| self.arena.styles.get(id.0))
            .find_map(|style| style.layers(property))
    }

    /// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
    ///
    /// The value from the first style in the stack that declares
    /// `property`, or undefined. No inheritance, no initial values.
    #[must_use]
    pub fn cascade_value(&self, property: PropertyId) -> GetValue<'a> {
        self.cascade_value_at(property, 0)
    }

    /// [`cascade_value`](Self::cascade_value) for layer `index`, repeating
    /// the declared layers as needed.
    #[must_use]
    pub fn cascade_value_at(&self, property: PropertyId, index: usize) -> GetValue<'a> {
        self.declared_layers(property)
            .map_or(GetValue::Undefined, |layers| layer_at(layers, index).value.as_get())
    }

    /// Walk to the node that supplies the specified value.
    ///
    /// [§ 7.3 Explicit Defaulting](https://www.w3.org/TR/css-cascade-4/#defaulting-keywords)
    ///
    /// "inherit: the specified value is the computed value of the parent"
    /// "initial: the specified value is the initial value"
    /// "unset: acts as inherit if the property is inherited, otherwise as
    /// initial"
    ///
    /// The returned view is the node whose context computes the value, so an
    /// inherited value is computed exactly as the ancestor computes it.
    fn resolve(&self, property: PropertyId) -> (Self, Source<'a>) {
        let property = property.query_target();
        let initial = Source::Initial(property.initial());
        let mut node = *self;
        for _ in 0..MAX_CASCADE_DEPTH {
            let inherit = match node.declared_layers(property) {
                Some(layers) => match css_wide_keyword(layers) {
                    None => return (node, Source::Declared(layers)),
                    Some("inherit") => true,
                    Some("unset") => property.inherited(),
                    Some(_) => false,
                },
                // [§ 7.3 Inherited Properties]
                // "Some properties are inherited properties ... the cascaded
                // value ... is the computed value of the parent element."
                None => property.inherited(),
            };
            if !inherit {
                return (node, initial);
            }
            match node.parent() {
                Some(parent) => node = parent,
                None => return (node, initial),
            }
        }
        (node, initial)
    }

    /// [§ 7.1 Specified Values](https://www.w3.org/TR/css-cascade-4/#specified)
    ///
    /// Never undefined: an undeclared property takes the parent's value when
    /// it inherits, and its initial value otherwise.
    #[must_use]
    pub fn specified_value(&self, property: PropertyId) -> GetValue<'a> {
        self.specified_value_at(property, 0)
    }

    /// [`specified_value`](Self::specified_value) for layer `index`.
    #[must_use]
    pub fn specified_value_at(&self, property: PropertyId, index: usize) -> GetValue<'a> {
        match self.resolve(property).1 {
            Source::Declared(layers) => layer_at(layers, index).value.as_get(),
            Source::Initial(value) => value,
        }
    }

    /// Number of layers in the specified value. 1 for non-list properties.
    #[must_use]
    pub fn array_size(&self, property: PropertyId) -> usize {
        match self.resolve(property).1 {
            Source::Declared(layers) => layers.len(),
            Source::Initial(_) => 1,
        }
    }

    /// [§ 7.2 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
    ///
    /// The specified value with units made absolute: lengths in `px`
    /// (percentages stay percentages), angles in `rad`, times in `s`,
    /// frequencies in `hz`, resolutions in `dppx`, `currentcolor` as a
    /// color, and the font and border rules applied.
    #[must_use]
    pub fn computed_value(&self, property: PropertyId) -> GetValue<'a> {
        self.computed_value_at(property, 0)
    }

    /// [`computed_value`](Self::computed_value) for layer `index`.
    #[must_use]
    pub fn computed_value_at(&self, property: PropertyId, index: usize) -> GetValue<'a> {
        let property = property.query_target();
        let (node, source) = self.resolve(property);
        let value = match source {
            Source::Declared(layers) => layer_at(layers, index).value.as_get(),
            Source::Initial(value) => value,
        };
        node.compute(property, value)
    }

    /// The image of layer `index` of an image property.
    #[must_use]
    pub fn computed_image(&self, property: PropertyId, index: usize) -> Option<&'a Image> {
        match self.resolve(property).1 {
            Source::Declared(layers) => layer_at(layers, index).image.as_ref(),
            Source::Initial(_) => None,
        }
    }

    /// [`cascade_value`](Self::cascade_value) by CSS name; undefined for
    /// unknown names.
    #[must_use]
    pub fn cascade_value_by_name(&self, name: &str) -> GetValue<'a> {
        name.parse()
            .map_or(GetValue::Undefined, |p| self.cascade_value(p))
    }

    /// [`specified_value`](Self::specified_value) by CSS name; undefined for
    /// unknown names.
    #[must_use]
    pub fn specified_value_by_name(&self, name: &str) -> GetValue<'a> {
        name.parse()
            .map_or(GetValue::Undefined, |p| self.specified_value(p))
    }

    /// [`computed_value`](Self::computed_value) by CSS name; undefined for
    /// unknown names.
    #[must_use]
    pub fn computed_value_by_name(&self, name: &str) -> GetValue<'a> {
        name.parse()
            .map_or(GetValue::Undefined, |p| self.computed_value(p))
    }

    /// Compute `value` of `property` in this node's context.
    fn compute(&self, property: PropertyId, value: GetValue<'a>) -> GetValue<'a> {
        match property {
            PropertyId::FontSize => GetValue::Length(self.compute_font_size(value), StyleDimension::Px),
            PropertyId::FontWeight => GetValue::Number(self.compute_font_weight(value)),
            // [CSS 2.1 § 10.8.1] "<percentage>: The computed value of the
            // property is this percentage multiplied by the element's
            // computed font size."
            PropertyId::LineHeight => match value {
                GetValue::Percentage(pct) => {
                    GetValue::Length(self.font_size() * pct / 100.0, StyleDimension::Px)
                }
                _ => compute_units(value, &self.unit_context()),
            },
            // [CSS Color 4 § 3.1] "If currentcolor is the specified value of
            // the color property, it is treated as if the specified value
            // was inherit."
            PropertyId::Color if value.is_keyword_named("currentcolor") => self
                .parent()
                .map_or(GetValue::Color(Colorf::BLACK), |p| {
                    p.computed_value(PropertyId::Color)
                }),
            p if p.is_color() && value.is_keyword_named("currentcolor") => {
                self.computed_value(PropertyId::Color)
            }
            p => match p.border_style_for_width() {
                Some(style) => self.compute_border_width(style, value),
                None => compute_units(value, &self.unit_context()),
            },
        }
    }

    /// [CSS Fonts 4 § 2.5](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
    ///
    /// Relative sizes resolve against the parent's computed size: "larger"
    /// and "smaller" scale by 1.2, percentages and `em` multiply.
    fn compute_font_size(&self, value: GetValue<'a>) -> f32 {
        let parent = self.parent();
        let parent_size = parent.map_or(DEFAULT_FONT_SIZE, |p| p.font_size());
        match value {
            GetValue::Keyword("larger") => parent_size * 1.2,
            GetValue::Keyword("smaller") => parent_size / 1.2,
            GetValue::Keyword(name) => FONT_SIZE_KEYWORDS
                .iter()
                .find(|(keyword, _)| *keyword == name)
                .map_or(DEFAULT_FONT_SIZE, |(_, size)| *size),
            GetValue::Percentage(pct) => parent_size * pct / 100.0,
            GetValue::Length(..) => {
                let units = parent.map_or_else(|| self.base_unit_context(), |p| p.unit_context());
                compute_length(value, &units).number()
            }
            _ => parent_size,
        }
    }

    /// [CSS Fonts 4 § 2.2](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
    ///
    /// "normal: Same as 400." "bold: Same as 700."
    fn compute_font_weight(&self, value: GetValue<'a>) -> f32 {
        let inherited = || {
            self.parent()
                .map_or(400.0, |p| p.computed_value(PropertyId::FontWeight).number())
        };
        match value {
            GetValue::Number(weight) => weight,
            GetValue::Keyword("bold") => 700.0,
            GetValue::Keyword("bolder") => font::bolder(inherited()),
            GetValue::Keyword("lighter") => font::lighter(inherited()),
            _ => 400.0,
        }
    }

    /// [CSS Backgrounds 3 § 4.2](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    ///
    /// "Computed value: absolute length, snapped as a border width; zero if
    /// the border style is none or hidden"
    ///
    /// "thin, medium, thick: ... the following relationship must hold:
    /// thin ≤ medium ≤ thick", taken as 1px, 3px and 5px.
    fn compute_border_width(&self, style: PropertyId, value: GetValue<'a>) -> GetValue<'a> {
        let style = self.computed_value(style);
        if style.is_keyword_named("none") || style.is_keyword_named("hidden") {
            return GetValue::Length(0.0, StyleDimension::Px);
        }
        let px = match value {
            GetValue::Keyword("thin") => 1.0,
            GetValue::Keyword("medium") => 3.0,
            GetValue::Keyword("thick") => 5.0,
            _ => return compute_length(value, &self.unit_context()),
        };
        GetValue::Length(px, StyleDimension::Px)
    }

    /// Computed font size in px.
    #[must_use]
    pub fn font_size(&self) -> f32 {
        self.computed_value(PropertyId::FontSize).number()
    }

    /// Unit context with no element font: what the root's own `font-size`
    /// resolves against.
    fn base_unit_context(&self) -> UnitContext {
        UnitContext {
            viewport_width: self.env.viewport_width,
            viewport_height: self.env.viewport_height,
            ..UnitContext::default()
        }
    }

    /// What this element's relative units resolve against.
    #[must_use]
    pub fn unit_context(&self) -> UnitContext {
        let font_size = self.font_size();
        UnitContext {
            font_size,
            root_font_size: self.root().font_size(),
            zero_advance: self
                .env
                .font_metrics
                .map(|metrics| metrics.zero_advance(&self.face(font_size))),
            ..self.base_unit_context()
        }
    }

    /// Family, size, weight and style, without line height.
    fn face(&self, size: f32) -> FontDescription {
        let families = match self.resolve(PropertyId::FontFamily).1 {
            Source::Declared(layers) => layers.iter().map(|l| l.value.text().to_string()).collect(),
            Source::Initial(value) => vec![value.text().to_string()],
        };
        let style: FontStyle = self
            .specified_value(PropertyId::FontStyle)
            .text()
            .parse()
            .unwrap_or_default();
        FontDescription {
            families,
            size,
            weight: self.computed_value(PropertyId::FontWeight).number(),
            style,
            line_height: None,
        }
    }

    /// [CSS Fonts 4 § 2.8](https://www.w3.org/TR/css-fonts-4/#font-prop)
    ///
    /// The computed font properties as one description. A `line-height`
    /// number is multiplied by the font size; `normal` is `None`.
    #[must_use]
    pub fn font_description(&self) -> FontDescription {
        let size = self.font_size();
        let line_height = match self.computed_value(PropertyId::LineHeight) {
            GetValue::Length(px, _) => Some(px),
            GetValue::Number(factor) => Some(factor * size),
            _ => None,
        };
        FontDescription {
            line_height,
            ..self.face(size)
        }
    }

    /// Ask the canvas for a font matching [`font_description`](Self::font_description).
    pub fn get_font<C: Canvas>(&self, canvas: &mut C) -> C::Font {
        canvas.font(&self.font_description())
    }

    /// Paint the background layers of the element into `canvas`.
    pub fn render_background<C: Canvas>(&self, canvas: &mut C, geometry: &ViewGeometry) {
        crate::render::background::render_background(self, canvas, geometry);
    }

    /// Paint the border of the element into `canvas`.
    pub fn render_border<C: Canvas>(&self, canvas: &mut C, geometry: &ViewGeometry) {
        crate::render::border::render_border(self, canvas, geometry);
    }
}

/// CSS list repetition: layer `index mod len`.
fn layer_at(layers: &[Layer], index: usize) -> &Layer {
    &layers[index % layers.len()]
}

fn css_wide_keyword(layers: &[Layer]) -> Option<&'static str> {
    match layers {
        [only] => CSS_WIDE_KEYWORDS
            .into_iter()
            .find(|keyword| only.value.is_keyword_named(keyword)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(arena: &mut StyleArena, texts: &[&str]) -> Vec<CascadeId> {
        let mut ids: Vec<CascadeId> = Vec::new();
        for text in texts {
            let style = arena.add_style(Style::parse(text));
            let id = arena.add_cascade(vec![style], ids.last().copied()).unwrap();
            ids.push(id);
        }
        ids
    }

    #[test]
    fn test_first_style_in_stack_wins() {
        let mut arena = StyleArena::new();
        let over = arena.add_style(Style::parse("color: red"));
        let base = arena.add_style(Style::parse("color: blue; margin: 4px"));
        let id = arena.add_cascade(vec![over, base], None).unwrap();
        let env = Environment::default();
        let c = arena.cascade(id, &env).unwrap();
        assert_eq!(c.cascade_value(PropertyId::Color).color().r, 1.0);
        assert_eq!(c.cascade_value(PropertyId::Margin).number(), 4.0);
        assert!(c.cascade_value(PropertyId::Width).is_undefined());
    }

    #[test]
    fn test_font_size_resolves_against_parent() {
        let mut arena = StyleArena::new();
        let ids = chain(&mut arena, &["font-size: 20px", "font-size: 150%", "width: 2em"]);
        let env = Environment::default();
        let leaf = arena.cascade(ids[2], &env).unwrap();
        assert_eq!(arena.cascade(ids[1], &env).unwrap().font_size(), 30.0);
        assert_eq!(leaf.font_size(), 30.0);
        assert_eq!(leaf.computed_value(PropertyId::Width).number(), 60.0);
    }

    #[test]
    fn test_rem_uses_root_font_size() {
        let mut arena = StyleArena::new();
        let ids = chain(&mut arena, &["font-size: 10px", "font-size: 2rem; width: 3rem"]);
        let env = Environment::default();
        let leaf = arena.cascade(ids[1], &env).unwrap();
        assert_eq!(leaf.font_size(), 20.0);
        assert_eq!(leaf.computed_value(PropertyId::Width).number(), 30.0);
    }

    #[test]
    fn test_inherit_computes_in_parent_context() {
        let mut arena = StyleArena::new();
        let ids = chain(&mut arena, &["font-size: 10px; width: 2em", "font-size: 30px; width: inherit"]);
        let env = Environment::default();
        let leaf = arena.cascade(ids[1], &env).unwrap();
        assert_eq!(leaf.computed_value(PropertyId::Width).number(), 20.0);
    }

    #[test]
    fn test_border_width_zero_without_style() {
        let mut arena = StyleArena::new();
        let ids = chain(&mut arena, &["border-top-width: thick; border-left: 2px solid"]);
        let env = Environment::default();
        let c = arena.cascade(ids[0], &env).unwrap();
        assert_eq!(c.computed_value(PropertyId::BorderTopWidth).number(), 0.0);
        assert_eq!(c.computed_value(PropertyId::BorderLeftWidth).number(), 2.0);
    }

    #[test]
    fn test_cycles_and_depth() {
        let mut arena = StyleArena::new();
        let ids = chain(&mut arena, &["", "", ""]);
        assert_eq!(
            arena.set_parent(ids[0], Some(ids[2])),
            Err(CascadeError::Cycle { child: ids[0], parent: ids[2] })
        );
        assert_eq!(
            arena.set_parent(ids[1], Some(ids[1])),
            Err(CascadeError::Cycle { child: ids[1], parent: ids[1] })
        );
        assert!(arena.set_parent(ids[2], None).is_ok());

        let mut last = None;
        for _ in 0..MAX_CASCADE_DEPTH {
            last = Some(arena.add_cascade(Vec::new(), last).unwrap());
        }
        assert!(matches!(
            arena.add_cascade(Vec::new(), last),
            Err(CascadeError::TooDeep(_))
        ));
    }

    #[test]
    fn test_unknown_ids() {
        let mut arena = StyleArena::new();
        let mut other = StyleArena::new();
        let foreign = other.add_style(Style::new());
        let _ = other.add_style(Style::new());
        let _ = arena.add_style(Style::new());
        let foreign = StyleId(foreign.0 + 1);
        assert_eq!(
            arena.add_cascade(vec![foreign], None),
            Err(CascadeError::UnknownStyle(foreign))
        );
    }
}
