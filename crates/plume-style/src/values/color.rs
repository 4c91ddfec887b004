//! CSS Color values and parsing
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::Serialize;

use crate::parser::ComponentValue;
use crate::tokenizer::CssToken;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// sRGB color with each channel in `0.0..=1.0`. The default is transparent
/// black.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Colorf {
    /// "the red color channel"
    pub r: f32,
    /// "the green color channel"
    pub g: f32,
    /// "the blue color channel"
    pub b: f32,
    /// "the alpha channel" (1.0 = fully opaque)
    pub a: f32,
}

impl Colorf {
    /// `transparent`
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Black (#000000)
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// White (#ffffff)
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from float channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit channels.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    const fn from_rgb24(rgb: u32) -> [u8; 3] {
        let [_, r, g, b] = rgb.to_be_bytes();
        [r, g, b]
    }

    /// 8-bit channels, rounded and clamped.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(unit_to_u8)
    }

    /// Returns true when the color is fully transparent.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            // "The three-digit RGB notation (#RGB) is converted into six-digit
            // form (#RRGGBB) by replicating digits, not by adding zeros."
            3 => Some(Self::from_rgba8(digit(0)?, digit(1)?, digit(2)?, 255)),
            4 => Some(Self::from_rgba8(digit(0)?, digit(1)?, digit(2)?, digit(3)?)),
            6 => Some(Self::from_rgba8(pair(0)?, pair(2)?, pair(4)?, 255)),
            8 => Some(Self::from_rgba8(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// "CSS defines a large set of named colors, so that common colors can be
    /// written and read more easily." Matched ASCII case-insensitively.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("transparent") {
            return Some(Self::TRANSPARENT);
        }
        let index = NAMED_COLORS
            .binary_search_by(|(candidate, _)| {
                candidate
                    .bytes()
                    .cmp(name.bytes().map(|b| b.to_ascii_lowercase()))
            })
            .ok()?;
        let [r, g, b] = Self::from_rgb24(NAMED_COLORS[index].1);
        Some(Self::from_rgba8(r, g, b, 255))
    }
}

/// Text of the form `rgba(r,g,b,a)` that [`Style::set`](crate::Style::set)
/// parses back to the same color (within 8-bit precision).
///
/// Channels are rounded and clamped to `0..=255`; alpha is clamped to
/// `0..=1`.
#[must_use]
pub fn to_rgba(color: Colorf) -> String {
    let [r, g, b, _] = color.to_rgba8();
    let a = color.a.clamp(0.0, 1.0);
    format!("rgba({r},{g},{b},{a})")
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Parse a single component value as a color.
///
/// `currentcolor` is not a color here; it is kept as a keyword and resolved
/// by the cascade.
#[must_use]
pub fn parse_color(v: &ComponentValue) -> Option<Colorf> {
    match v {
        ComponentValue::Token(CssToken::Hash(value)) => Colorf::from_hex(value),
        ComponentValue::Token(CssToken::Ident(name)) => Colorf::from_named(name),
        ComponentValue::Function { name, args } => parse_color_function(name, args),
        _ => None,
    }
}

/// [§ 4.1 The RGB Functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
/// [§ 7 The HSL Functions](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
///
/// Per CSS Color 4, rgb()/rgba() and hsl()/hsla() are aliases.
fn parse_color_function(name: &str, args: &[ComponentValue]) -> Option<Colorf> {
    match name.to_ascii_lowercase().as_str() {
        "rgb" | "rgba" => parse_rgb_function(args),
        "hsl" | "hsla" => parse_hsl_function(args),
        _ => None,
    }
}

/// A numeric color function argument.
#[derive(Debug, Clone, Copy)]
enum ColorArg {
    Number(f64),
    Percentage(f64),
}

/// Extract numeric arguments, skipping whitespace, commas and the `/`
/// before alpha. Both the legacy comma syntax and the modern space syntax
/// produce the same list. Anything else makes the function invalid.
fn extract_color_args(args: &[ComponentValue]) -> Option<Vec<ColorArg>> {
    let mut result = Vec::new();
    for arg in args {
        match arg {
            ComponentValue::Token(CssToken::Number(value)) => result.push(ColorArg::Number(*value)),
            ComponentValue::Token(CssToken::Percentage(value)) => {
                result.push(ColorArg::Percentage(*value));
            }
            // "<hue> is a <number> or <angle>"; only degrees are common in themes.
            ComponentValue::Token(CssToken::Dimension { value, unit })
                if unit.eq_ignore_ascii_case("deg") =>
            {
                result.push(ColorArg::Number(*value));
            }
            ComponentValue::Token(
                CssToken::Whitespace | CssToken::Comma | CssToken::Delim('/'),
            ) => {}
            _ => return None,
        }
    }
    (3..=4).contains(&result.len()).then_some(result)
}

/// "rgb() = rgb( <percentage>{3} [ / <alpha-value> ]? ) |
///          rgb( <number>{3} [ / <alpha-value> ]? )"
///
/// "Values outside these ranges are not invalid, but are clamped to the
/// ranges defined here at parsed-value time."
fn parse_rgb_function(args: &[ComponentValue]) -> Option<Colorf> {
    let vals = extract_color_args(args)?;
    let channel = |arg: ColorArg| match arg {
        ColorArg::Number(n) => n / 255.0,
        ColorArg::Percentage(p) => p / 100.0,
    };
    Some(rgb_color(
        channel(vals[0]),
        channel(vals[1]),
        channel(vals[2]),
        vals.get(3).copied().map_or(1.0, alpha),
    ))
}

/// "hsl() = hsl( <hue> <percentage> <percentage> [ / <alpha-value> ]? )"
fn parse_hsl_function(args: &[ComponentValue]) -> Option<Colorf> {
    let vals = extract_color_args(args)?;
    let hue = match vals[0] {
        ColorArg::Number(v) => v,
        ColorArg::Percentage(v) => v * 3.6,
    };
    let fraction = |arg: ColorArg| match arg {
        ColorArg::Number(v) | ColorArg::Percentage(v) => v / 100.0,
    };
    let (r, g, b) = hsl_to_rgb(hue, fraction(vals[1]), fraction(vals[2]));
    Some(rgb_color(r, g, b, vals.get(3).copied().map_or(1.0, alpha)))
}

/// "The <alpha-value> can be a <number> (clamped to [0, 1]) or a
/// <percentage> (clamped to [0%, 100%])."
fn alpha(arg: ColorArg) -> f64 {
    match arg {
        ColorArg::Number(n) => n,
        ColorArg::Percentage(p) => p / 100.0,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn rgb_color(r: f64, g: f64, b: f64, a: f64) -> Colorf {
    let c = |v: f64| v.clamp(0.0, 1.0) as f32;
    Colorf::new(c(r), c(g), c(b), c(a))
}

/// [§ 7.1 Converting HSL Colors to sRGB](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
///
/// Hue in degrees (wraps), saturation and lightness in `0..=1`.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let h = hue.rem_euclid(360.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    (r1 + m, g1 + m, b1 + m)
}

/// The CSS named color table, sorted for binary search.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];
