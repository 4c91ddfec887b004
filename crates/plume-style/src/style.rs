//! Property sets.
//!
//! A [`Style`] holds the declarations of one source (a theme rule, a state
//! override, inline text) for one element. Declarations come in as text,
//! pass through the [`parser`](crate::parser), are checked against the
//! [`PropertyId`] grammar and land as longhand layers.

use core::fmt::{self, Write as _};
use core::str::FromStr;

use plume_common::warning::warn_once;

use crate::error::DeclarationError;
use crate::parser::{ComponentValue, DeclarationParser, serialize};
use crate::property::{CSS_WIDE_KEYWORDS, Grammar, PropertyId};
use crate::tokenizer::CssToken;
use crate::values::{
    Colorf, GetValue, Image, SetValue, StyleDimension, StyleValueType, parse_gradient, parse_value,
};
use crate::values::image::parse_position;

/// Index of a [`Style`] inside a [`StyleArena`](crate::StyleArena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(pub(crate) usize);

/// One comma-separated group of a declared value.
///
/// Non-list properties always have exactly one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// The value. For image layers this is the url, the gradient function
    /// name as a keyword, or `none`.
    pub value: SetValue,
    /// The image of a `background-image` layer.
    pub image: Option<Image>,
}

impl Layer {
    /// A layer with no image.
    #[must_use]
    pub const fn new(value: SetValue) -> Self {
        Self { value, image: None }
    }

    fn keyword(text: &str) -> Self {
        Self::new(SetValue::from_keyword(text))
    }
}

/// A declaration after name lookup, grammar checking and shorthand
/// expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDeclaration {
    /// The property as written, possibly a shorthand.
    pub property: PropertyId,
    /// Whether `!important` was present. Property sets do not rank by it.
    pub important: bool,
    /// The longhands and their layers, in expansion order.
    pub longhands: Vec<(PropertyId, Vec<Layer>)>,
}

#[derive(Debug)]
struct Entry {
    property: PropertyId,
    layers: Vec<Layer>,
}

/// A property set: an insertion-ordered, unique-by-property map from
/// longhand to declared layers.
///
/// Not `Clone`: cascades refer to a style by its [`StyleId`], and a copy
/// would silently stop receiving updates.
#[derive(Debug, Default)]
pub struct Style {
    entries: Vec<Entry>,
}

impl Style {
    /// Create an empty property set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a property set from declaration text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut style = Self::new();
        style.set(text);
        style
    }

    /// Parse `text` as a declaration list and upsert every declaration.
    ///
    /// "color: red; margin: 4px". Shorthands expand to their longhands. A
    /// malformed declaration is dropped on its own and reported once through
    /// [`warn_once`]; the others still apply. Later declarations overwrite
    /// earlier ones, and an overwritten property keeps its original
    /// position.
    pub fn set(&mut self, text: &str) {
        for result in parse_declarations(text) {
            match result {
                Ok(declaration) => {
                    for (property, layers) in declaration.longhands {
                        self.insert(property, layers);
                    }
                }
                Err(error) => warn_once("Style", &format!("dropping declaration: {error}")),
            }
        }
    }

    /// [`set`](Self::set) after replacing `%1`, `%2`, ... with the matching
    /// argument.
    ///
    /// `%%` produces a literal `%`. Indices with no matching argument are
    /// left as written.
    ///
    /// ```
    /// # use plume_style::{Style, PropertyId};
    /// let mut style = Style::new();
    /// style.set_with("width: %1px; color: %2", &[&120, &"navy"]);
    /// assert_eq!(style.declared_value(PropertyId::Width).number(), 120.0);
    /// ```
    pub fn set_with(&mut self, text: &str, args: &[&dyn fmt::Display]) {
        self.set(&substitute(text, args));
    }

    /// Insert or replace the layers of a longhand.
    ///
    /// Shorthands and empty layer lists are ignored.
    pub fn insert(&mut self, property: PropertyId, layers: Vec<Layer>) {
        if property.is_shorthand() || layers.is_empty() {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.property == property) {
            entry.layers = layers;
        } else {
            self.entries.push(Entry { property, layers });
        }
    }

    /// Remove a property, or every longhand of a shorthand.
    pub fn remove(&mut self, property: PropertyId) {
        let longhands = property.longhands();
        self.entries
            .retain(|e| e.property != property && !longhands.contains(&e.property));
    }

    /// The declared layers. Shorthands read their first longhand.
    #[must_use]
    pub fn layers(&self, property: PropertyId) -> Option<&[Layer]> {
        let property = property.query_target();
        self.entries
            .iter()
            .find(|e| e.property == property)
            .map(|e| e.layers.as_slice())
    }

    /// The first layer, or undefined if `property` was never declared.
    #[must_use]
    pub fn declared_value(&self, property: PropertyId) -> GetValue<'_> {
        self.declared_value_at(property, 0)
    }

    /// Layer `index`, or undefined when there is no such layer.
    #[must_use]
    pub fn declared_value_at(&self, property: PropertyId, index: usize) -> GetValue<'_> {
        self.layers(property)
            .and_then(|layers| layers.get(index))
            .map_or(GetValue::Undefined, |layer| layer.value.as_get())
    }

    /// The image of layer `index`.
    #[must_use]
    pub fn declared_image(&self, property: PropertyId, index: usize) -> Option<&Image> {
        self.layers(property)?.get(index)?.image.as_ref()
    }

    /// Number of declared layers, 0 when undeclared.
    #[must_use]
    pub fn declared_layers(&self, property: PropertyId) -> usize {
        self.layers(property).map_or(0, <[Layer]>::len)
    }

    /// [`declared_value`](Self::declared_value) by CSS name. Unknown names
    /// are undefined.
    #[must_use]
    pub fn declared_value_by_name(&self, name: &str) -> GetValue<'_> {
        PropertyId::from_str(name).map_or(GetValue::Undefined, |p| self.declared_value(p))
    }

    /// Returns true if nothing is declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of declared longhands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Declared longhands in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &[Layer])> {
        self.entries.iter().map(|e| (e.property, e.layers.as_slice()))
    }

    /// Remove every declaration.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Replace `%N` with the `Display` of `args[N - 1]`.
#[must_use]
pub fn substitute(text: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                let _ = chars.next();
                out.push('%');
            }
            Some(d) if d.is_ascii_digit() => {
                let mut digits = String::new();
                while let Some(d) = chars.next_if(char::is_ascii_digit) {
                    digits.push(d);
                }
                match digits.parse::<usize>() {
                    Ok(n) if (1..=args.len()).contains(&n) => {
                        let _ = write!(out, "{}", args[n - 1]);
                    }
                    _ => {
                        out.push('%');
                        out.push_str(&digits);
                    }
                }
            }
            _ => out.push('%'),
        }
    }
    out
}

/// Parse declaration text into checked, expanded declarations.
///
/// One entry per declaration in the text; failures say why that
/// declaration would be dropped.
#[must_use]
pub fn parse_declarations(text: &str) -> Vec<Result<ParsedDeclaration, DeclarationError>> {
    DeclarationParser::parse(text)
        .into_iter()
        .map(|result| -> Result<ParsedDeclaration, DeclarationError> {
            let declaration = result?;
            let property = PropertyId::from_str(&declaration.name)
                .map_err(|_| DeclarationError::UnknownProperty(declaration.name.clone()))?;
            let longhands = expand(property, &declaration.value).ok_or_else(|| {
                DeclarationError::InvalidValue {
                    property: declaration.name.clone(),
                    value: serialize(&declaration.value),
                }
            })?;
            Ok(ParsedDeclaration {
                property,
                important: declaration.important,
                longhands,
            })
        })
        .collect()
}

type Longhands = Vec<(PropertyId, Vec<Layer>)>;

/// Significant items of a value: whitespace dropped.
fn items(value: &[ComponentValue]) -> Vec<&ComponentValue> {
    value.iter().filter(|v| !v.is_whitespace()).collect()
}

/// Split at top-level commas into layers of significant items.
fn layers_of(value: &[ComponentValue]) -> Vec<Vec<&ComponentValue>> {
    let mut layers = vec![Vec::new()];
    for v in value {
        if v.is_comma() {
            layers.push(Vec::new());
        } else if !v.is_whitespace() {
            if let Some(layer) = layers.last_mut() {
                layer.push(v);
            }
        }
    }
    layers
}

fn css_wide_keyword(value: &[ComponentValue]) -> Option<&'static str> {
    match items(value).as_slice() {
        [single] => {
            let ident = single.as_ident()?;
            CSS_WIDE_KEYWORDS
                .into_iter()
                .find(|kw| ident.eq_ignore_ascii_case(kw))
        }
        _ => None,
    }
}

/// Check a value against `property` and produce its longhands.
fn expand(property: PropertyId, value: &[ComponentValue]) -> Option<Longhands> {
    // [CSS Cascade 4 § 7.3 Explicit Defaulting]
    // "All properties accept the CSS-wide keywords"
    if let Some(keyword) = css_wide_keyword(value) {
        let targets = if property.is_shorthand() {
            property.longhands()
        } else {
            core::slice::from_ref(&property)
        };
        return Some(targets.iter().map(|p| (*p, vec![Layer::keyword(keyword)])).collect());
    }

    match property {
        PropertyId::Margin
        | PropertyId::Padding
        | PropertyId::BorderWidth
        | PropertyId::BorderStyle
        | PropertyId::BorderColor => expand_box(property, value),
        PropertyId::BorderTop
        | PropertyId::BorderRight
        | PropertyId::BorderBottom
        | PropertyId::BorderLeft
        | PropertyId::Border => expand_border(property, value),
        PropertyId::BorderRadius => expand_border_radius(value),
        PropertyId::BorderTopLeftRadius
        | PropertyId::BorderTopRightRadius
        | PropertyId::BorderBottomRightRadius
        | PropertyId::BorderBottomLeftRadius => expand_corner(property, value),
        PropertyId::Background => expand_background(value),
        PropertyId::BackgroundPosition => expand_background_position(value),
        PropertyId::BackgroundSize => expand_background_size(value),
        PropertyId::BackgroundRepeat => expand_background_repeat(value),
        PropertyId::Font => expand_font(value),
        longhand => Some(vec![(longhand, parse_longhand(longhand, value)?)]),
    }
}

/// Parse the layers of a longhand.
fn parse_longhand(property: PropertyId, value: &[ComponentValue]) -> Option<Vec<Layer>> {
    let layers = layers_of(value);
    if layers.len() > 1 && !property.is_list() {
        return None;
    }
    layers
        .iter()
        .map(|items| parse_layer(property, items))
        .collect()
}

/// Generic font families, kept as keywords.
const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

/// Parse one layer of a longhand.
fn parse_layer(property: PropertyId, items: &[&ComponentValue]) -> Option<Layer> {
    match property.grammar()? {
        Grammar::Values { .. } => match items {
            [single] => parse_single(property, single).map(Layer::new),
            _ => None,
        },
        Grammar::AnyKeyword => match items {
            [single] => single
                .as_ident()
                .map(|ident| Layer::keyword(&ident.to_ascii_lowercase())),
            _ => None,
        },
        Grammar::Image => match items {
            [single] => parse_image(single),
            _ => None,
        },
        Grammar::FontFamily => parse_family(items).map(Layer::new),
    }
}

/// Parse a single value against a `Grammar::Values` longhand.
fn parse_single(property: PropertyId, item: &ComponentValue) -> Option<SetValue> {
    let Some(Grammar::Values { kinds, keywords }) = property.grammar() else {
        return None;
    };
    let value = match parse_value(item)? {
        SetValue::Keyword(keyword) => {
            if keywords.contains(&keyword.as_str()) {
                return Some(SetValue::Keyword(keyword));
            }
            if kinds.contains(&StyleValueType::Color) {
                return Colorf::from_named(&keyword).map(SetValue::from_color);
            }
            return None;
        }
        // "unitless zero" is a valid <length>.
        SetValue::Number(n)
            if n == 0.0
                && kinds.contains(&StyleValueType::Length)
                && !kinds.contains(&StyleValueType::Number) =>
        {
            SetValue::from_length(0.0, StyleDimension::Px)
        }
        other => other,
    };
    if !kinds.contains(&value.value_type()) {
        return None;
    }
    if value.number() < 0.0 && !allows_negative(property) {
        return None;
    }
    // [CSS Fonts 4 § 2.2] "Only values greater than or equal to 1, and less
    // than or equal to 1000, are valid"
    if matches!(property, PropertyId::FontWeight)
        && matches!(value, SetValue::Number(n) if !(1.0..=1000.0).contains(&n))
    {
        return None;
    }
    Some(value)
}

/// Properties whose numeric values may be negative.
const fn allows_negative(property: PropertyId) -> bool {
    matches!(
        property,
        PropertyId::LetterSpacing
            | PropertyId::WordSpacing
            | PropertyId::TextIndent
            | PropertyId::MarginTop
            | PropertyId::MarginRight
            | PropertyId::MarginBottom
            | PropertyId::MarginLeft
            | PropertyId::Left
            | PropertyId::Top
            | PropertyId::Right
            | PropertyId::Bottom
            | PropertyId::ZIndex
            | PropertyId::BackgroundPositionX
            | PropertyId::BackgroundPositionY
            | PropertyId::TransitionDelay
    )
}

/// `none | <url> | <gradient>`
fn parse_image(item: &ComponentValue) -> Option<Layer> {
    if let ComponentValue::Function { name, args } = item {
        if let Some(gradient) = parse_gradient(name, args) {
            return Some(Layer {
                value: gradient.kind.clone(),
                image: Some(Image::Gradient(gradient)),
            });
        }
    }
    match parse_value(item)? {
        SetValue::Keyword(keyword) if keyword == "none" => Some(Layer::keyword("none")),
        url @ SetValue::Url(_) => Some(Layer {
            value: url.clone(),
            image: Some(Image::Url(url)),
        }),
        _ => None,
    }
}

/// `[ <family-name> | <generic-family> ]`
///
/// A quoted name, a generic family keyword, or a run of identifiers joined
/// with single spaces ("Times New Roman").
fn parse_family(items: &[&ComponentValue]) -> Option<SetValue> {
    match items {
        [ComponentValue::Token(CssToken::String(name))] => Some(SetValue::from_string(name.clone())),
        [single] if single.as_ident().is_some_and(|i| {
            GENERIC_FAMILIES.contains(&i.to_ascii_lowercase().as_str())
        }) =>
        {
            single.as_ident().map(|i| SetValue::from_keyword(i.to_ascii_lowercase()))
        }
        [] => None,
        idents => {
            let words: Option<Vec<&str>> = idents.iter().map(|v| v.as_ident()).collect();
            Some(SetValue::from_string(words?.join(" ")))
        }
    }
}

/// [CSS Box 3 § 3.2](https://www.w3.org/TR/css-box-3/#margin-shorthand)
///
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom are set to the first value and the
/// right and left are set to the second. If there are three values, the top
/// is set to the first value, the left and right are set to the second, and
/// the bottom is set to the third. If there are four values they apply to
/// the top, right, bottom, and left, respectively."
fn box_sides<T: Clone>(values: &[T]) -> Option<[T; 4]> {
    match values {
        [all] => Some([all.clone(), all.clone(), all.clone(), all.clone()]),
        [v, h] => Some([v.clone(), h.clone(), v.clone(), h.clone()]),
        [t, h, b] => Some([t.clone(), h.clone(), b.clone(), h.clone()]),
        [t, r, b, l] => Some([t.clone(), r.clone(), b.clone(), l.clone()]),
        _ => None,
    }
}

fn expand_box(shorthand: PropertyId, value: &[ComponentValue]) -> Option<Longhands> {
    let longhands = shorthand.longhands();
    let parsed: Vec<SetValue> = items(value)
        .into_iter()
        .map(|item| parse_single(longhands[0], item))
        .collect::<Option<_>>()?;
    let sides = box_sides(&parsed)?;
    Some(
        longhands
            .iter()
            .zip(sides)
            .map(|(p, v)| (*p, vec![Layer::new(v)]))
            .collect(),
    )
}

/// [§ 4.4 'border-top' ... 'border'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
///
/// "<line-width> || <line-style> || <color>". Omitted parts reset to their
/// initial values.
fn expand_border(shorthand: PropertyId, value: &[ComponentValue]) -> Option<Longhands> {
    let mut width = None;
    let mut style = None;
    let mut color = None;
    for item in items(value) {
        if width.is_none() {
            if let Some(v) = parse_single(PropertyId::BorderTopWidth, item) {
                width = Some(v);
                continue;
            }
        }
        if style.is_none() {
            if let Some(v) = parse_single(PropertyId::BorderTopStyle, item) {
                style = Some(v);
                continue;
            }
        }
        if color.is_none() {
            if let Some(v) = parse_single(PropertyId::BorderTopColor, item) {
                color = Some(v);
                continue;
            }
        }
        return None;
    }
    if width.is_none() && style.is_none() && color.is_none() {
        return None;
    }

    let sides: &[PropertyId] = if shorthand == PropertyId::Border {
        &[
            PropertyId::BorderTop,
            PropertyId::BorderRight,
            PropertyId::BorderBottom,
            PropertyId::BorderLeft,
        ]
    } else {
        core::slice::from_ref(&shorthand)
    };

    let mut out = Vec::new();
    for side in sides {
        let [w, s, c] = side.longhands() else {
            return None;
        };
        for (p, v) in [(w, &width), (s, &style), (c, &color)] {
            let v = v.clone().unwrap_or_else(|| p.initial().to_owned_value());
            out.push((*p, vec![Layer::new(v)]));
        }
    }
    Some(out)
}

/// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// "[ <length-percentage [0,∞]>{1,4} [ / <length-percentage [0,∞]>{1,4} ]? ]"
///
/// "If values are given before and after the slash, then the values before
/// the slash set the horizontal radius and the values after the slash set
/// the vertical radius. If there is no slash, then the values set both radii
/// equally."
fn expand_border_radius(value: &[ComponentValue]) -> Option<Longhands> {
    let all = items(value);
    let slash = all
        .iter()
        .position(|v| **v == ComponentValue::Token(CssToken::Delim('/')));
    let (xs, ys) = match slash {
        Some(i) => (&all[..i], &all[i + 1..]),
        None => (&all[..], &all[..]),
    };
    let parse = |items: &[&ComponentValue]| -> Option<[SetValue; 4]> {
        let parsed: Vec<SetValue> = items
            .iter()
            .map(|item| parse_single(PropertyId::BorderTopLeftRadiusX, item))
            .collect::<Option<_>>()?;
        box_sides(&parsed)
    };
    let xs = parse(xs)?;
    let ys = parse(ys)?;
    let longhands = PropertyId::BorderRadius.longhands();
    Some(
        longhands
            .iter()
            .zip(xs.into_iter().chain(ys))
            .map(|(p, v)| (*p, vec![Layer::new(v)]))
            .collect(),
    )
}

/// "The two <length-percentage> values of the border-*-radius properties
/// define the radii of a quarter ellipse ... The first value is the
/// horizontal radius, the second the vertical radius. If the second value
/// is omitted it is copied from the first."
fn expand_corner(shorthand: PropertyId, value: &[ComponentValue]) -> Option<Longhands> {
    let [x_prop, y_prop] = shorthand.longhands() else {
        return None;
    };
    let parsed: Vec<SetValue> = items(value)
        .into_iter()
        .map(|item| parse_single(*x_prop, item))
        .collect::<Option<_>>()?;
    let (x, y) = match parsed.as_slice() {
        [both] => (both.clone(), both.clone()),
        [x, y] => (x.clone(), y.clone()),
        _ => return None,
    };
    Some(vec![(*x_prop, vec![Layer::new(x)]), (*y_prop, vec![Layer::new(y)])])
}

/// Zip per-layer pairs into two list longhands.
fn pair_layers(x: PropertyId, y: PropertyId, pairs: Vec<(SetValue, SetValue)>) -> Longhands {
    let (xs, ys): (Vec<Layer>, Vec<Layer>) = pairs
        .into_iter()
        .map(|(a, b)| (Layer::new(a), Layer::new(b)))
        .unzip();
    vec![(x, xs), (y, ys)]
}

fn expand_background_position(value: &[ComponentValue]) -> Option<Longhands> {
    let pairs = layers_of(value)
        .into_iter()
        .map(|layer| parse_position(&layer.into_iter().cloned().collect::<Vec<_>>()))
        .collect::<Option<Vec<_>>>()?;
    Some(pair_layers(
        PropertyId::BackgroundPositionX,
        PropertyId::BackgroundPositionY,
        pairs,
    ))
}

/// [§ 3.9 'background-size'](https://www.w3.org/TR/css-backgrounds-3/#background-size)
///
/// "<bg-size> = [ <length-percentage [0,∞]> | auto ]{1,2} | cover | contain"
///
/// "If only one value is given the second is assumed to be auto."
fn parse_background_size(items: &[&ComponentValue]) -> Option<(SetValue, SetValue)> {
    let parse = |item: &ComponentValue| parse_single(PropertyId::BackgroundSizeX, item);
    match items {
        [single] => {
            let v = parse(single)?;
            if v.is_keyword_named("cover") || v.is_keyword_named("contain") {
                Some((v.clone(), v))
            } else {
                Some((v, SetValue::from_keyword("auto")))
            }
        }
        [x, y] => {
            let (x, y) = (parse(x)?, parse(y)?);
            let keyword = |v: &SetValue| v.is_keyword_named("cover") || v.is_keyword_named("contain");
            (!keyword(&x) && !keyword(&y)).then_some((x, y))
        }
        _ => None,
    }
}

fn expand_background_size(value: &[ComponentValue]) -> Option<Longhands> {
    let pairs = layers_of(value)
        .iter()
        .map(|layer| parse_background_size(layer))
        .collect::<Option<Vec<_>>>()?;
    Some(pair_layers(PropertyId::BackgroundSizeX, PropertyId::BackgroundSizeY, pairs))
}

/// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
///
/// "<repeat-style> = repeat-x | repeat-y | [repeat | space | round | no-repeat]{1,2}"
///
/// "repeat-x: Computes to repeat no-repeat. repeat-y: Computes to no-repeat
/// repeat." "If a single value is given, it is used for both."
fn parse_background_repeat(items: &[&ComponentValue]) -> Option<(SetValue, SetValue)> {
    let keyword = |item: &ComponentValue| item.as_ident().map(str::to_ascii_lowercase);
    let axis = |k: &str| {
        matches!(k, "repeat" | "no-repeat" | "space" | "round").then(|| SetValue::from_keyword(k))
    };
    match items {
        [single] => match keyword(single)?.as_str() {
            "repeat-x" => Some((SetValue::from_keyword("repeat"), SetValue::from_keyword("no-repeat"))),
            "repeat-y" => Some((SetValue::from_keyword("no-repeat"), SetValue::from_keyword("repeat"))),
            k => axis(k).map(|v| (v.clone(), v)),
        },
        [x, y] => Some((axis(&keyword(x)?)?, axis(&keyword(y)?)?)),
        _ => None,
    }
}

fn expand_background_repeat(value: &[ComponentValue]) -> Option<Longhands> {
    let pairs = layers_of(value)
        .iter()
        .map(|layer| parse_background_repeat(layer))
        .collect::<Option<Vec<_>>>()?;
    Some(pair_layers(
        PropertyId::BackgroundRepeatX,
        PropertyId::BackgroundRepeatY,
        pairs,
    ))
}

/// Per-layer result of the `background` shorthand.
#[derive(Default)]
struct BackgroundLayer {
    image: Option<Layer>,
    position: Option<(SetValue, SetValue)>,
    size: Option<(SetValue, SetValue)>,
    repeat: Option<(SetValue, SetValue)>,
    attachment: Option<SetValue>,
    origin: Option<SetValue>,
    clip: Option<SetValue>,
}

/// [§ 3.10 'background'](https://www.w3.org/TR/css-backgrounds-3/#background)
///
/// "<bg-layer> = <bg-image> || <bg-position> [ / <bg-size> ]? ||
/// <repeat-style> || <attachment> || <visual-box> || <visual-box>"
///
/// "<final-bg-layer> = <bg-layer> || <'background-color'>"
///
/// "If one <visual-box> value is present then it sets both
/// background-origin and background-clip to that value. If two values are
/// present, then the first sets background-origin and the second
/// background-clip."
fn expand_background(value: &[ComponentValue]) -> Option<Longhands> {
    let layers = layers_of(value);
    let last = layers.len().checked_sub(1)?;
    let mut color = None;
    let mut parsed = Vec::with_capacity(layers.len());

    for (index, items) in layers.iter().enumerate() {
        if items.is_empty() {
            return None;
        }
        let mut layer = BackgroundLayer::default();
        let mut i = 0;
        while i < items.len() {
            let item = items[i];
            let keyword = item.as_ident().map(str::to_ascii_lowercase);
            let keyword = keyword.as_deref();

            if layer.image.is_none() {
                if let Some(image) = parse_image(item) {
                    layer.image = Some(image);
                    i += 1;
                    continue;
                }
            }

            if layer.position.is_none() && starts_position(item) {
                // Greedily take up to two position values, then an optional
                // "/ size".
                let mut end = i + 1;
                if items.get(end).is_some_and(|v| starts_position(v)) {
                    end += 1;
                }
                let owned: Vec<ComponentValue> = items[i..end].iter().map(|v| (*v).clone()).collect();
                layer.position = Some(parse_position(&owned)?);
                i = end;
                if items.get(i).is_some_and(|v| **v == ComponentValue::Token(CssToken::Delim('/'))) {
                    let start = i + 1;
                    let mut end = start;
                    while end < items.len() && end - start < 2 && is_size_item(items[end]) {
                        end += 1;
                    }
                    layer.size = Some(parse_background_size(&items[start..end])?);
                    i = end;
                }
                continue;
            }

            if layer.repeat.is_none() {
                let two = items.get(i..i + 2).and_then(parse_background_repeat);
                if let Some(pair) = two {
                    layer.repeat = Some(pair);
                    i += 2;
                    continue;
                }
                if let Some(pair) = parse_background_repeat(&items[i..=i]) {
                    layer.repeat = Some(pair);
                    i += 1;
                    continue;
                }
            }

            if layer.attachment.is_none() && matches!(keyword, Some("scroll" | "fixed" | "local")) {
                layer.attachment = keyword.map(SetValue::from_keyword);
                i += 1;
                continue;
            }

            if let Some(k) = keyword.filter(|k| crate::property::is_box_keyword(k)) {
                if layer.origin.is_none() {
                    layer.origin = Some(SetValue::from_keyword(k));
                } else if layer.clip.is_none() {
                    layer.clip = Some(SetValue::from_keyword(k));
                } else {
                    return None;
                }
                i += 1;
                continue;
            }

            if index == last && color.is_none() {
                if let Some(c) = parse_single(PropertyId::BackgroundColor, item) {
                    color = Some(c);
                    i += 1;
                    continue;
                }
            }
            return None;
        }
        parsed.push(layer);
    }

    let initial = |p: PropertyId| p.initial().to_owned_value();
    let mut images = Vec::new();
    let mut pos = Vec::new();
    let mut size = Vec::new();
    let mut repeat = Vec::new();
    let mut attachment = Vec::new();
    let mut origin = Vec::new();
    let mut clip = Vec::new();
    for layer in parsed {
        images.push(layer.image.unwrap_or_else(|| Layer::keyword("none")));
        pos.push(layer.position.unwrap_or_else(|| {
            (initial(PropertyId::BackgroundPositionX), initial(PropertyId::BackgroundPositionY))
        }));
        size.push(layer.size.unwrap_or_else(|| {
            (initial(PropertyId::BackgroundSizeX), initial(PropertyId::BackgroundSizeY))
        }));
        repeat.push(layer.repeat.unwrap_or_else(|| {
            (initial(PropertyId::BackgroundRepeatX), initial(PropertyId::BackgroundRepeatY))
        }));
        attachment.push(Layer::new(
            layer.attachment.unwrap_or_else(|| initial(PropertyId::BackgroundAttachment)),
        ));
        let clip_value = layer
            .clip
            .or_else(|| layer.origin.clone())
            .unwrap_or_else(|| initial(PropertyId::BackgroundClip));
        origin.push(Layer::new(
            layer.origin.unwrap_or_else(|| initial(PropertyId::BackgroundOrigin)),
        ));
        clip.push(Layer::new(clip_value));
    }

    let mut out = vec![
        (
            PropertyId::BackgroundColor,
            vec![Layer::new(color.unwrap_or_else(|| initial(PropertyId::BackgroundColor)))],
        ),
        (PropertyId::BackgroundImage, images),
    ];
    out.extend(pair_layers(PropertyId::BackgroundPositionX, PropertyId::BackgroundPositionY, pos));
    out.extend(pair_layers(PropertyId::BackgroundSizeX, PropertyId::BackgroundSizeY, size));
    out.extend(pair_layers(PropertyId::BackgroundRepeatX, PropertyId::BackgroundRepeatY, repeat));
    out.push((PropertyId::BackgroundAttachment, attachment));
    out.push((PropertyId::BackgroundOrigin, origin));
    out.push((PropertyId::BackgroundClip, clip));
    Some(out)
}

/// Could this item begin a `<bg-position>`?
fn starts_position(item: &ComponentValue) -> bool {
    if let Some(k) = item.as_ident() {
        return ["left", "right", "top", "bottom", "center"]
            .iter()
            .any(|p| k.eq_ignore_ascii_case(p));
    }
    matches!(
        item,
        ComponentValue::Token(CssToken::Dimension { .. } | CssToken::Percentage(_))
    ) || matches!(item, ComponentValue::Token(CssToken::Number(n)) if *n == 0.0)
}

fn is_size_item(item: &ComponentValue) -> bool {
    parse_single(PropertyId::BackgroundSizeX, item).is_some()
}

/// [CSS Fonts 4 § 2.8 'font'](https://www.w3.org/TR/css-fonts-4/#font-prop)
///
/// "[ [ <'font-style'> || <font-variant-css2> || <'font-weight'> ]?
/// <'font-size'> [ / <'line-height'> ]? <'font-family'># ]"
///
/// "All subproperties of the font property are first reset to their initial
/// values, then set to the values specified."
fn expand_font(value: &[ComponentValue]) -> Option<Longhands> {
    let mut layers = layers_of(value);
    if layers.is_empty() {
        return None;
    }
    let head = layers.remove(0);

    let mut style = None;
    let mut variant = None;
    let mut weight = None;
    let mut i = 0;
    // Up to three optional prefix values; "normal" may fill any of them.
    while i < head.len() && i < 3 {
        let item = head[i];
        if item.as_ident().is_some_and(|k| k.eq_ignore_ascii_case("normal")) {
            i += 1;
            continue;
        }
        if style.is_none() {
            if let Some(v) = parse_single(PropertyId::FontStyle, item) {
                style = Some(v);
                i += 1;
                continue;
            }
        }
        if variant.is_none() {
            if let Some(v) = parse_single(PropertyId::FontVariant, item) {
                variant = Some(v);
                i += 1;
                continue;
            }
        }
        if weight.is_none() {
            if let Some(v) = parse_single(PropertyId::FontWeight, item) {
                weight = Some(v);
                i += 1;
                continue;
            }
        }
        break;
    }

    let size = parse_single(PropertyId::FontSize, head.get(i)?)?;
    i += 1;
    let mut line_height = None;
    if head.get(i).is_some_and(|v| **v == ComponentValue::Token(CssToken::Delim('/'))) {
        line_height = Some(parse_single(PropertyId::LineHeight, head.get(i + 1)?)?);
        i += 2;
    }

    let mut families = vec![Layer::new(parse_family(&head[i..])?)];
    for layer in &layers {
        families.push(Layer::new(parse_family(layer)?));
    }

    let initial = |p: PropertyId| p.initial().to_owned_value();
    Some(vec![
        (PropertyId::FontStyle, vec![Layer::new(style.unwrap_or_else(|| initial(PropertyId::FontStyle)))]),
        (PropertyId::FontVariant, vec![Layer::new(variant.unwrap_or_else(|| initial(PropertyId::FontVariant)))]),
        (PropertyId::FontWeight, vec![Layer::new(weight.unwrap_or_else(|| initial(PropertyId::FontWeight)))]),
        (PropertyId::FontSize, vec![Layer::new(size)]),
        (PropertyId::LineHeight, vec![Layer::new(line_height.unwrap_or_else(|| initial(PropertyId::LineHeight)))]),
        (PropertyId::FontFamily, families),
    ])
}
