//! Images and gradients.
//!
//! [CSS Images Module Level 3](https://www.w3.org/TR/css-images-3/)

use serde::Serialize;

use super::{Colorf, GetValue, SetValue, StyleDimension, parse_color, parse_value};
use crate::cascade::{StyleCascade, compute_length};
use crate::parser::ComponentValue;
use crate::property::PropertyId;
use crate::tokenizer::CssToken;

/// [§ 3.4 Color Stop Lists](https://www.w3.org/TR/css-images-3/#color-stop-syntax)
///
/// A single color/offset pair. `position` is undefined when the stop was
/// written without one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    /// A color, or the `currentcolor` keyword.
    pub color: SetValue,
    /// A length, a percentage, or undefined.
    pub position: SetValue,
}

/// [§ 3 Gradients](https://www.w3.org/TR/css-images-3/#gradients)
///
/// Only the fields relevant to `kind` are meaningful.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    /// `linear-gradient` or `radial-gradient`.
    pub kind: SetValue,
    /// An angle, or a `to <corner>` keyword such as `to top right`.
    pub linear_angle: SetValue,
    /// `circle` or `ellipse`.
    pub radial_shape: SetValue,
    /// A size keyword, a length or a percentage.
    pub radial_size_x: SetValue,
    /// A size keyword, a length or a percentage.
    pub radial_size_y: SetValue,
    /// Center, horizontal.
    pub radial_position_x: SetValue,
    /// Center, vertical.
    pub radial_position_y: SetValue,
    /// Stops in rendering order.
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Returns true for `linear-gradient`.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.kind.is_keyword_named("linear-gradient")
    }

    /// Returns true for `radial-gradient`.
    #[must_use]
    pub fn is_radial(&self) -> bool {
        self.kind.is_keyword_named("radial-gradient")
    }

    fn new(kind: &str) -> Self {
        Self {
            kind: SetValue::from_keyword(kind),
            // "If the argument is omitted, it defaults to to bottom."
            linear_angle: SetValue::from_angle(180.0, StyleDimension::Deg),
            // "If <ending-shape> is omitted, the ending shape defaults to a
            // circle if the <size> is a single <length>, and to an ellipse
            // otherwise."
            radial_shape: SetValue::from_keyword("ellipse"),
            // "If omitted it defaults to farthest-corner."
            radial_size_x: SetValue::from_keyword("farthest-corner"),
            radial_size_y: SetValue::from_keyword("farthest-corner"),
            // "If <position> is omitted, it defaults to center."
            radial_position_x: SetValue::from_percentage(50.0),
            radial_position_y: SetValue::from_percentage(50.0),
            stops: Vec::new(),
        }
    }
}

/// [§ 2 Image Values](https://www.w3.org/TR/css-images-3/#image-values)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Image {
    /// An external image, a `url` value.
    Url(SetValue),
    /// A generated gradient.
    Gradient(Gradient),
}

impl Image {
    /// The url text, or `None` for gradients.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(v) => Some(v.text()),
            Self::Gradient(_) => None,
        }
    }
}

/// Parse `linear-gradient(...)` or `radial-gradient(...)`.
///
/// Returns `None` for other functions and for malformed arguments.
#[must_use]
pub fn parse_gradient(name: &str, args: &[ComponentValue]) -> Option<Gradient> {
    let name = name.to_ascii_lowercase();
    let mut gradient = Gradient::new(&name);
    let mut groups = split_commas(args).into_iter().peekable();

    let first = groups.peek()?;
    let configured = match name.as_str() {
        "linear-gradient" => parse_linear_config(first, &mut gradient),
        "radial-gradient" => parse_radial_config(first, &mut gradient)?,
        _ => return None,
    };
    if configured {
        let _ = groups.next();
    }

    for group in groups {
        parse_color_stop(&group, &mut gradient.stops)?;
    }

    // "A color stop list must have at least two stops."
    (gradient.stops.len() >= 2).then_some(gradient)
}

/// Split at top-level commas, dropping whitespace.
fn split_commas(args: &[ComponentValue]) -> Vec<Vec<&ComponentValue>> {
    let mut groups = vec![Vec::new()];
    for arg in args {
        if arg.is_comma() {
            groups.push(Vec::new());
        } else if !arg.is_whitespace() {
            if let Some(group) = groups.last_mut() {
                group.push(arg);
            }
        }
    }
    groups
}

/// `[ <angle> | to <side-or-corner> ]`
///
/// Sides become angles right away; corners stay keywords because their
/// angle depends on the box.
fn parse_linear_config(group: &[&ComponentValue], gradient: &mut Gradient) -> bool {
    match group {
        [ComponentValue::Token(CssToken::Dimension { value, unit })] => {
            let Ok(unit) = unit.parse::<StyleDimension>() else {
                return false;
            };
            #[allow(clippy::cast_possible_truncation)]
            let value = SetValue::from_dimension(*value as f32, unit);
            if value.as_get().is_angle() {
                gradient.linear_angle = value;
                return true;
            }
            false
        }
        [to, sides @ ..] if to.as_ident().is_some_and(|t| t.eq_ignore_ascii_case("to")) => {
            let sides: Option<Vec<String>> = sides
                .iter()
                .map(|s| s.as_ident().map(str::to_ascii_lowercase))
                .collect();
            let Some(mut sides) = sides else {
                return false;
            };
            // Normalize to "vertical horizontal" order.
            if sides.len() == 2 && matches!(sides[0].as_str(), "left" | "right") {
                sides.swap(0, 1);
            }
            let degrees = match sides.iter().map(String::as_str).collect::<Vec<_>>()[..] {
                ["top"] => 0.0,
                ["right"] => 90.0,
                ["bottom"] => 180.0,
                ["left"] => 270.0,
                ["top" | "bottom", "left" | "right"] => {
                    gradient.linear_angle = SetValue::from_keyword(format!("to {}", sides.join(" ")));
                    return true;
                }
                _ => return false,
            };
            gradient.linear_angle = SetValue::from_angle(degrees, StyleDimension::Deg);
            true
        }
        _ => false,
    }
}

/// `[ <ending-shape> || <size> ]? [ at <position> ]?`
///
/// `Some(false)` when the group is a color stop, `None` when it is neither.
fn parse_radial_config(group: &[&ComponentValue], gradient: &mut Gradient) -> Option<bool> {
    let at = group
        .iter()
        .position(|v| v.as_ident().is_some_and(|t| t.eq_ignore_ascii_case("at")));
    let (shape_part, position_part) = match at {
        Some(i) => (&group[..i], Some(&group[i + 1..])),
        None => (group, None),
    };

    let mut sizes = Vec::new();
    let mut shape = None;
    for item in shape_part {
        match item.as_ident().map(str::to_ascii_lowercase).as_deref() {
            Some(kw @ ("circle" | "ellipse")) => shape = Some(kw.to_string()),
            Some(
                kw @ ("closest-side" | "closest-corner" | "farthest-side" | "farthest-corner"),
            ) => sizes.push(SetValue::from_keyword(kw)),
            _ => match parse_value(item) {
                Some(v @ (SetValue::Length(..) | SetValue::Percentage(_))) => sizes.push(v),
                Some(SetValue::Number(n)) if n == 0.0 => {
                    sizes.push(SetValue::from_length(0.0, StyleDimension::Px));
                }
                // Anything else means this group is the first color stop.
                _ if at.is_none() => return Some(false),
                _ => return None,
            },
        }
    }

    match sizes.as_slice() {
        [] => {}
        [one] => {
            gradient.radial_size_x = one.clone();
            gradient.radial_size_y = one.clone();
            if one.as_get().is_length() && shape.is_none() {
                shape = Some("circle".to_string());
            }
        }
        [x, y] if !x.as_get().is_keyword() && !y.as_get().is_keyword() => {
            gradient.radial_size_x = x.clone();
            gradient.radial_size_y = y.clone();
        }
        _ => return None,
    }
    if let Some(shape) = shape {
        gradient.radial_shape = SetValue::from_keyword(shape);
    }

    if let Some(position) = position_part {
        let owned: Vec<ComponentValue> = position.iter().map(|v| (*v).clone()).collect();
        let (x, y) = parse_position(&owned)?;
        gradient.radial_position_x = x;
        gradient.radial_position_y = y;
    }
    Some(true)
}

/// `<color> <length-percentage>{0,2}`
///
/// A stop with two positions becomes two stops of the same color.
fn parse_color_stop(group: &[&ComponentValue], stops: &mut Vec<GradientStop>) -> Option<()> {
    let (color, positions) = group.split_first()?;
    let color = if color
        .as_ident()
        .is_some_and(|t| t.eq_ignore_ascii_case("currentcolor"))
    {
        SetValue::from_keyword("currentcolor")
    } else {
        SetValue::from_color(parse_color(color)?)
    };

    let positions: Vec<SetValue> = positions
        .iter()
        .map(|v| match parse_value(v)? {
            v @ (SetValue::Length(..) | SetValue::Percentage(_)) => Some(v),
            SetValue::Number(n) if n == 0.0 => Some(SetValue::from_length(0.0, StyleDimension::Px)),
            _ => None,
        })
        .collect::<Option<_>>()?;

    match positions.len() {
        0 => stops.push(GradientStop {
            color,
            position: SetValue::Undefined,
        }),
        1 | 2 => {
            for position in positions {
                stops.push(GradientStop {
                    color: color.clone(),
                    position,
                });
            }
        }
        _ => return None,
    }
    Some(())
}

/// Which axis a position keyword pins.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Either,
}

/// [§ 3.5.3 background-position](https://www.w3.org/TR/css-backgrounds-3/#background-position)
///
/// One or two `<length-percentage>` or keyword values. Keywords become
/// percentages: `left`/`top` 0%, `center` 50%, `right`/`bottom` 100%.
/// A single value leaves the other axis centered.
pub(crate) fn parse_position(values: &[ComponentValue]) -> Option<(SetValue, SetValue)> {
    let items: Vec<&ComponentValue> = values.iter().filter(|v| !v.is_whitespace()).collect();

    let single = |v: &ComponentValue| -> Option<(SetValue, Axis)> {
        if let Some(kw) = v.as_ident() {
            return match kw.to_ascii_lowercase().as_str() {
                "left" => Some((SetValue::from_percentage(0.0), Axis::X)),
                "right" => Some((SetValue::from_percentage(100.0), Axis::X)),
                "top" => Some((SetValue::from_percentage(0.0), Axis::Y)),
                "bottom" => Some((SetValue::from_percentage(100.0), Axis::Y)),
                "center" => Some((SetValue::from_percentage(50.0), Axis::Either)),
                _ => None,
            };
        }
        match parse_value(v)? {
            v @ (SetValue::Length(..) | SetValue::Percentage(_)) => Some((v, Axis::Either)),
            SetValue::Number(n) if n == 0.0 => {
                Some((SetValue::from_length(0.0, StyleDimension::Px), Axis::Either))
            }
            _ => None,
        }
    };

    let center = || SetValue::from_percentage(50.0);
    match items.as_slice() {
        [one] => match single(one)? {
            (v, Axis::Y) => Some((center(), v)),
            (v, _) => Some((v, center())),
        },
        [a, b] => {
            let (a, axis_a) = single(a)?;
            let (b, axis_b) = single(b)?;
            match (axis_a, axis_b) {
                (Axis::Y, Axis::X | Axis::Either) | (Axis::Either, Axis::X) => Some((b, a)),
                (Axis::X, Axis::X) | (Axis::Y, Axis::Y) => None,
                _ => Some((a, b)),
            }
        }
        _ => None,
    }
}

/// [§ 3.4.3 Color Stop "Fixup"](https://www.w3.org/TR/css-images-3/#color-stop-fixup)
///
/// Resolve stops to `(color, offset)` pairs, offsets as fractions of the
/// gradient line of length `axis_length` px.
///
/// 1. "If the first color stop does not have a position, set its position
///    to 0%. If the last color stop does not have a position, set its
///    position to 100%."
/// 2. "If a color stop or transition hint has a position that is less than
///    the specified position of any color stop or transition hint before it
///    in the list, set its position to be equal to the largest specified
///    position of any color stop or transition hint before it."
/// 3. "If any color stop still does not have a position, then, for each run
///    of adjacent color stops without positions, set their positions so
///    that they are evenly spaced between the preceding and following color
///    stops with positions."
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn resolve_stops(
    stops: &[GradientStop],
    axis_length: f32,
    cascade: &StyleCascade<'_>,
) -> Vec<(Colorf, f32)> {
    let units = cascade.unit_context();
    let mut offsets: Vec<Option<f32>> = stops
        .iter()
        .map(|stop| match stop.position.as_get() {
            GetValue::Percentage(p) => Some(p / 100.0),
            v @ GetValue::Length(..) if axis_length > 0.0 => {
                Some(compute_length(v, &units).number() / axis_length)
            }
            GetValue::Length(..) => Some(0.0),
            _ => None,
        })
        .collect();

    if let Some(first) = offsets.first_mut() {
        let _ = first.get_or_insert(0.0);
    }
    if let Some(last) = offsets.last_mut() {
        let _ = last.get_or_insert(1.0);
    }

    let mut max_so_far = f32::NEG_INFINITY;
    for offset in offsets.iter_mut().flatten() {
        max_so_far = max_so_far.max(*offset);
        *offset = max_so_far;
    }

    let mut resolved: Vec<f32> = Vec::with_capacity(offsets.len());
    let mut i = 0;
    while i < offsets.len() {
        if let Some(offset) = offsets[i] {
            resolved.push(offset);
            i += 1;
            continue;
        }
        // A run of missing positions; the first and last entries always
        // have one, so both neighbours exist.
        let start = resolved.last().copied().unwrap_or(0.0);
        let run_end = (i..offsets.len()).find(|&j| offsets[j].is_some()).unwrap_or(offsets.len());
        let end = offsets.get(run_end).copied().flatten().unwrap_or(1.0);
        let steps = (run_end - i + 1) as f32;
        for k in 1..=run_end - i {
            resolved.push(start + (end - start) * k as f32 / steps);
        }
        i = run_end;
    }

    let current = cascade.computed_value(PropertyId::Color).color();
    stops
        .iter()
        .zip(resolved)
        .map(|(stop, offset)| {
            let color = if stop.color.is_keyword_named("currentcolor") {
                current
            } else {
                stop.color.color()
            };
            (color, offset)
        })
        .collect()
}
