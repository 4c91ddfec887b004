//! The property table.
//!
//! [CSS Cascading and Inheritance Level 4 § 7](https://www.w3.org/TR/css-cascade-4/#value-stages)
//!
//! A closed set of property names known at build time, with the per-property
//! facts the cascade needs: whether the property inherits, its initial value,
//! whether it takes a comma-separated list of layers, the value grammar, and
//! for shorthands the longhands they expand to.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::values::{Colorf, GetValue, StyleDimension, StyleValueType};

/// A property name.
///
/// Parses from the CSS name (`"border-top-width"`), ASCII
/// case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyId {
    // Inherited
    /// [CSS Color 4 § 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
    Color,
    /// [CSS Fonts 4 § 2.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
    FontFamily,
    /// [CSS Fonts 4 § 2.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
    FontSize,
    /// [CSS Fonts 4 § 2.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
    FontWeight,
    /// [CSS Fonts 4 § 2.4 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
    FontStyle,
    /// [CSS Fonts 4 § 6.11 'font-variant'](https://www.w3.org/TR/css-fonts-4/#font-variant-prop)
    FontVariant,
    /// [CSS 2.1 § 10.8.1 'line-height'](https://www.w3.org/TR/CSS2/visudet.html#propdef-line-height)
    LineHeight,
    /// [CSS Text 3 § 8.2 'letter-spacing'](https://www.w3.org/TR/css-text-3/#letter-spacing-property)
    LetterSpacing,
    /// [CSS Text 3 § 8.1 'word-spacing'](https://www.w3.org/TR/css-text-3/#word-spacing-property)
    WordSpacing,
    /// [CSS Text 3 § 7.1 'text-align'](https://www.w3.org/TR/css-text-3/#text-align-property)
    TextAlign,
    /// [CSS Text 3 § 8.1 'text-indent'](https://www.w3.org/TR/css-text-3/#text-indent-property)
    TextIndent,
    /// [CSS Text 3 § 2.1 'text-transform'](https://www.w3.org/TR/css-text-3/#text-transform-property)
    TextTransform,
    /// [CSS Text 3 § 3 'white-space'](https://www.w3.org/TR/css-text-3/#white-space-property)
    WhiteSpace,
    /// [CSS 2.1 § 11.2 'visibility'](https://www.w3.org/TR/CSS2/visufx.html#visibility)
    Visibility,
    /// [CSS UI 4 § 5.1 'cursor'](https://www.w3.org/TR/css-ui-4/#cursor)
    Cursor,
    /// [CSS Writing Modes 3 § 2.1 'direction'](https://www.w3.org/TR/css-writing-modes-3/#direction)
    Direction,
    /// [CSS 2.1 aural § 19.8 'pitch'](https://www.w3.org/TR/CSS2/aural.html#propdef-pitch)
    Pitch,
    /// [CSS Images 4 'image-resolution'](https://www.w3.org/TR/css-images-4/#the-image-resolution)
    ImageResolution,

    // Backgrounds
    /// [§ 3.2 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    BackgroundColor,
    /// [§ 3.3 'background-image'](https://www.w3.org/TR/css-backgrounds-3/#background-image)
    BackgroundImage,
    /// Horizontal half of 'background-position'.
    BackgroundPositionX,
    /// Vertical half of 'background-position'.
    BackgroundPositionY,
    /// Horizontal half of 'background-size'.
    BackgroundSizeX,
    /// Vertical half of 'background-size'.
    BackgroundSizeY,
    /// Horizontal half of 'background-repeat'.
    BackgroundRepeatX,
    /// Vertical half of 'background-repeat'.
    BackgroundRepeatY,
    /// [§ 3.5 'background-attachment'](https://www.w3.org/TR/css-backgrounds-3/#background-attachment)
    BackgroundAttachment,
    /// [§ 3.7 'background-origin'](https://www.w3.org/TR/css-backgrounds-3/#background-origin)
    BackgroundOrigin,
    /// [§ 3.8 'background-clip'](https://www.w3.org/TR/css-backgrounds-3/#background-clip)
    BackgroundClip,

    // Borders
    /// [§ 4.2 'border-top-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderTopWidth,
    /// [§ 4.2 'border-right-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderRightWidth,
    /// [§ 4.2 'border-bottom-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderBottomWidth,
    /// [§ 4.2 'border-left-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderLeftWidth,
    /// [§ 4.3 'border-top-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    BorderTopStyle,
    /// [§ 4.3 'border-right-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    BorderRightStyle,
    /// [§ 4.3 'border-bottom-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    BorderBottomStyle,
    /// [§ 4.3 'border-left-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    BorderLeftStyle,
    /// [§ 4.1 'border-top-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderTopColor,
    /// [§ 4.1 'border-right-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderRightColor,
    /// [§ 4.1 'border-bottom-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderBottomColor,
    /// [§ 4.1 'border-left-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderLeftColor,
    /// Horizontal radius of the top-left corner.
    BorderTopLeftRadiusX,
    /// Vertical radius of the top-left corner.
    BorderTopLeftRadiusY,
    /// Horizontal radius of the top-right corner.
    BorderTopRightRadiusX,
    /// Vertical radius of the top-right corner.
    BorderTopRightRadiusY,
    /// Horizontal radius of the bottom-right corner.
    BorderBottomRightRadiusX,
    /// Vertical radius of the bottom-right corner.
    BorderBottomRightRadiusY,
    /// Horizontal radius of the bottom-left corner.
    BorderBottomLeftRadiusX,
    /// Vertical radius of the bottom-left corner.
    BorderBottomLeftRadiusY,

    // Box
    /// [CSS Box 3 § 3.1 'margin-top'](https://www.w3.org/TR/css-box-3/#margin-physical)
    MarginTop,
    /// 'margin-right'
    MarginRight,
    /// 'margin-bottom'
    MarginBottom,
    /// 'margin-left'
    MarginLeft,
    /// [CSS Box 3 § 4.1 'padding-top'](https://www.w3.org/TR/css-box-3/#padding-physical)
    PaddingTop,
    /// 'padding-right'
    PaddingRight,
    /// 'padding-bottom'
    PaddingBottom,
    /// 'padding-left'
    PaddingLeft,
    /// [CSS Sizing 3 § 3.1 'width'](https://www.w3.org/TR/css-sizing-3/#preferred-size-properties)
    Width,
    /// 'height'
    Height,
    /// 'min-width'
    MinWidth,
    /// 'min-height'
    MinHeight,
    /// 'max-width'
    MaxWidth,
    /// 'max-height'
    MaxHeight,
    /// [CSS Color 4 § 3.2 'opacity'](https://www.w3.org/TR/css-color-4/#transparency)
    Opacity,
    /// [CSS Display 3 § 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
    Display,
    /// [CSS Position 3 § 2 'position'](https://www.w3.org/TR/css-position-3/#position-property)
    Position,
    /// 'left'
    Left,
    /// 'top'
    Top,
    /// 'right'
    Right,
    /// 'bottom'
    Bottom,
    /// [CSS 2.1 § 9.9.1 'z-index'](https://www.w3.org/TR/CSS2/visuren.html#z-index)
    ZIndex,

    // Transitions
    /// [CSS Transitions § 2.1 'transition-property'](https://www.w3.org/TR/css-transitions-1/#transition-property-property)
    TransitionProperty,
    /// [CSS Transitions § 2.2 'transition-duration'](https://www.w3.org/TR/css-transitions-1/#transition-duration-property)
    TransitionDuration,
    /// [CSS Transitions § 2.4 'transition-delay'](https://www.w3.org/TR/css-transitions-1/#transition-delay-property)
    TransitionDelay,

    // Shorthands
    /// 'margin' (top, right, bottom, left)
    Margin,
    /// 'padding' (top, right, bottom, left)
    Padding,
    /// 'border-width' (top, right, bottom, left)
    BorderWidth,
    /// 'border-style' (top, right, bottom, left)
    BorderStyle,
    /// 'border-color' (top, right, bottom, left)
    BorderColor,
    /// 'border-top' (width, style, color)
    BorderTop,
    /// 'border-right' (width, style, color)
    BorderRight,
    /// 'border-bottom' (width, style, color)
    BorderBottom,
    /// 'border-left' (width, style, color)
    BorderLeft,
    /// 'border' (all four sides)
    Border,
    /// 'border-radius' (all four corners)
    BorderRadius,
    /// 'border-top-left-radius' (x, y)
    BorderTopLeftRadius,
    /// 'border-top-right-radius' (x, y)
    BorderTopRightRadius,
    /// 'border-bottom-right-radius' (x, y)
    BorderBottomRightRadius,
    /// 'border-bottom-left-radius' (x, y)
    BorderBottomLeftRadius,
    /// 'background' (every background longhand)
    Background,
    /// 'background-position' (x, y)
    BackgroundPosition,
    /// 'background-size' (x, y)
    BackgroundSize,
    /// 'background-repeat' (x, y)
    BackgroundRepeat,
    /// 'font' (style, variant, weight, size, line-height, family)
    Font,
}

/// What a longhand accepts, besides the CSS-wide keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Single values of the listed kinds, or one of the listed keywords.
    Values {
        /// Accepted value kinds.
        kinds: &'static [StyleValueType],
        /// Accepted keywords, lower case.
        keywords: &'static [&'static str],
    },
    /// `none`, a url, or a gradient.
    Image,
    /// Family names: quoted strings, or runs of identifiers.
    FontFamily,
    /// Any identifier, such as a property name.
    AnyKeyword,
}

/// [CSS Values 4 § 3.1.1 CSS-wide keywords](https://www.w3.org/TR/css-values-4/#common-keywords)
pub const CSS_WIDE_KEYWORDS: [&str; 3] = ["inherit", "initial", "unset"];

use StyleValueType as T;

const LENGTH: &[StyleValueType] = &[T::Length];
const LENGTH_PERCENTAGE: &[StyleValueType] = &[T::Length, T::Percentage];
const COLOR: &[StyleValueType] = &[T::Color];
const NONE: &[StyleValueType] = &[];

const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];
const BOX_KEYWORDS: &[&str] = &["border-box", "padding-box", "content-box"];

/// Absolute `font-size` keywords and their sizes in px.
///
/// [CSS Fonts 4 § 2.5](https://www.w3.org/TR/css-fonts-4/#absolute-size-mapping)
pub const FONT_SIZE_KEYWORDS: &[(&str, f32)] = &[
    ("xx-small", 9.0),
    ("x-small", 10.0),
    ("small", 13.0),
    ("medium", 16.0),
    ("large", 18.0),
    ("x-large", 24.0),
    ("xx-large", 32.0),
    ("xxx-large", 48.0),
];

const fn values(kinds: &'static [StyleValueType], keywords: &'static [&'static str]) -> Grammar {
    Grammar::Values { kinds, keywords }
}

impl PropertyId {
    /// The CSS name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// [CSS Cascade 4 § 3.3 Inherited Properties](https://www.w3.org/TR/css-cascade-4/#inheriting)
    ///
    /// Whether an undeclared value comes from the parent rather than the
    /// initial value. Shorthands answer for their first longhand.
    #[must_use]
    pub const fn inherited(self) -> bool {
        matches!(
            self.query_target(),
            Self::Color
                | Self::FontFamily
                | Self::FontSize
                | Self::FontWeight
                | Self::FontStyle
                | Self::FontVariant
                | Self::LineHeight
                | Self::LetterSpacing
                | Self::WordSpacing
                | Self::TextAlign
                | Self::TextIndent
                | Self::TextTransform
                | Self::WhiteSpace
                | Self::Visibility
                | Self::Cursor
                | Self::Direction
                | Self::Pitch
                | Self::ImageResolution
        )
    }

    /// Whether the value is a comma-separated list of layers.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Self::FontFamily
                | Self::BackgroundImage
                | Self::BackgroundPositionX
                | Self::BackgroundPositionY
                | Self::BackgroundSizeX
                | Self::BackgroundSizeY
                | Self::BackgroundRepeatX
                | Self::BackgroundRepeatY
                | Self::BackgroundAttachment
                | Self::BackgroundOrigin
                | Self::BackgroundClip
                | Self::TransitionProperty
                | Self::TransitionDuration
                | Self::TransitionDelay
        )
    }

    /// Whether the property takes a color (and so `currentcolor`).
    #[must_use]
    pub const fn is_color(self) -> bool {
        matches!(
            self,
            Self::Color
                | Self::BackgroundColor
                | Self::BorderTopColor
                | Self::BorderRightColor
                | Self::BorderBottomColor
                | Self::BorderLeftColor
        )
    }

    /// The longhands a shorthand expands to, in order. Empty for longhands.
    #[must_use]
    pub const fn longhands(self) -> &'static [Self] {
        match self {
            Self::Margin => &[Self::MarginTop, Self::MarginRight, Self::MarginBottom, Self::MarginLeft],
            Self::Padding => &[
                Self::PaddingTop,
                Self::PaddingRight,
                Self::PaddingBottom,
                Self::PaddingLeft,
            ],
            Self::BorderWidth => &[
                Self::BorderTopWidth,
                Self::BorderRightWidth,
                Self::BorderBottomWidth,
                Self::BorderLeftWidth,
            ],
            Self::BorderStyle => &[
                Self::BorderTopStyle,
                Self::BorderRightStyle,
                Self::BorderBottomStyle,
                Self::BorderLeftStyle,
            ],
            Self::BorderColor => &[
                Self::BorderTopColor,
                Self::BorderRightColor,
                Self::BorderBottomColor,
                Self::BorderLeftColor,
            ],
            Self::BorderTop => &[Self::BorderTopWidth, Self::BorderTopStyle, Self::BorderTopColor],
            Self::BorderRight => &[
                Self::BorderRightWidth,
                Self::BorderRightStyle,
                Self::BorderRightColor,
            ],
            Self::BorderBottom => &[
                Self::BorderBottomWidth,
                Self::BorderBottomStyle,
                Self::BorderBottomColor,
            ],
            Self::BorderLeft => &[Self::BorderLeftWidth, Self::BorderLeftStyle, Self::BorderLeftColor],
            Self::Border => &[
                Self::BorderTopWidth,
                Self::BorderRightWidth,
                Self::BorderBottomWidth,
                Self::BorderLeftWidth,
                Self::BorderTopStyle,
                Self::BorderRightStyle,
                Self::BorderBottomStyle,
                Self::BorderLeftStyle,
                Self::BorderTopColor,
                Self::BorderRightColor,
                Self::BorderBottomColor,
                Self::BorderLeftColor,
            ],
            Self::BorderRadius => &[
                Self::BorderTopLeftRadiusX,
                Self::BorderTopRightRadiusX,
                Self::BorderBottomRightRadiusX,
                Self::BorderBottomLeftRadiusX,
                Self::BorderTopLeftRadiusY,
                Self::BorderTopRightRadiusY,
                Self::BorderBottomRightRadiusY,
                Self::BorderBottomLeftRadiusY,
            ],
            Self::BorderTopLeftRadius => &[Self::BorderTopLeftRadiusX, Self::BorderTopLeftRadiusY],
            Self::BorderTopRightRadius => &[Self::BorderTopRightRadiusX, Self::BorderTopRightRadiusY],
            Self::BorderBottomRightRadius => &[
                Self::BorderBottomRightRadiusX,
                Self::BorderBottomRightRadiusY,
            ],
            Self::BorderBottomLeftRadius => &[
                Self::BorderBottomLeftRadiusX,
                Self::BorderBottomLeftRadiusY,
            ],
            Self::Background => &[
                Self::BackgroundColor,
                Self::BackgroundImage,
                Self::BackgroundPositionX,
                Self::BackgroundPositionY,
                Self::BackgroundSizeX,
                Self::BackgroundSizeY,
                Self::BackgroundRepeatX,
                Self::BackgroundRepeatY,
                Self::BackgroundAttachment,
                Self::BackgroundOrigin,
                Self::BackgroundClip,
            ],
            Self::BackgroundPosition => &[Self::BackgroundPositionX, Self::BackgroundPositionY],
            Self::BackgroundSize => &[Self::BackgroundSizeX, Self::BackgroundSizeY],
            Self::BackgroundRepeat => &[Self::BackgroundRepeatX, Self::BackgroundRepeatY],
            Self::Font => &[
                Self::FontStyle,
                Self::FontVariant,
                Self::FontWeight,
                Self::FontSize,
                Self::LineHeight,
                Self::FontFamily,
            ],
            _ => &[],
        }
    }

    /// Returns true for shorthands.
    #[must_use]
    pub const fn is_shorthand(self) -> bool {
        !self.longhands().is_empty()
    }

    /// The longhand a query for this property reads: itself, or a
    /// shorthand's first longhand (`margin` reads `margin-top`).
    #[must_use]
    pub const fn query_target(self) -> Self {
        match self.longhands() {
            [first, ..] => *first,
            [] => self,
        }
    }

    /// For a `border-*-width`, the matching `border-*-style`.
    #[must_use]
    pub const fn border_style_for_width(self) -> Option<Self> {
        match self {
            Self::BorderTopWidth => Some(Self::BorderTopStyle),
            Self::BorderRightWidth => Some(Self::BorderRightStyle),
            Self::BorderBottomWidth => Some(Self::BorderBottomStyle),
            Self::BorderLeftWidth => Some(Self::BorderLeftStyle),
            _ => None,
        }
    }

    /// [CSS Cascade 4 § 7.1 Initial Values](https://www.w3.org/TR/css-cascade-4/#initial-values)
    ///
    /// Shorthands answer for their first longhand.
    #[must_use]
    pub const fn initial(self) -> GetValue<'static> {
        const ZERO: GetValue<'static> = GetValue::Length(0.0, StyleDimension::Px);
        const AUTO: GetValue<'static> = GetValue::Keyword("auto");
        const NORMAL: GetValue<'static> = GetValue::Keyword("normal");
        const NO: GetValue<'static> = GetValue::Keyword("none");

        match self.query_target() {
            Self::Color => GetValue::Color(Colorf::BLACK),
            Self::FontFamily => GetValue::Keyword("sans-serif"),
            Self::FontSize => GetValue::Keyword("medium"),
            Self::FontWeight
            | Self::FontStyle
            | Self::FontVariant
            | Self::LineHeight
            | Self::LetterSpacing
            | Self::WordSpacing
            | Self::WhiteSpace => NORMAL,
            Self::TextAlign => GetValue::Keyword("start"),
            Self::TextTransform
            | Self::BackgroundImage
            | Self::MaxWidth
            | Self::MaxHeight
            | Self::BorderTopStyle
            | Self::BorderRightStyle
            | Self::BorderBottomStyle
            | Self::BorderLeftStyle => NO,
            Self::Visibility => GetValue::Keyword("visible"),
            Self::Direction => GetValue::Keyword("ltr"),
            Self::Pitch => GetValue::Keyword("medium"),
            Self::ImageResolution => GetValue::Resolution(1.0, StyleDimension::Dppx),
            Self::BackgroundColor => GetValue::Color(Colorf::TRANSPARENT),
            Self::BackgroundPositionX | Self::BackgroundPositionY => GetValue::Percentage(0.0),
            Self::BackgroundRepeatX | Self::BackgroundRepeatY => GetValue::Keyword("repeat"),
            Self::BackgroundAttachment => GetValue::Keyword("scroll"),
            Self::BackgroundOrigin => GetValue::Keyword("padding-box"),
            Self::BackgroundClip => GetValue::Keyword("border-box"),
            Self::BorderTopWidth
            | Self::BorderRightWidth
            | Self::BorderBottomWidth
            | Self::BorderLeftWidth => GetValue::Keyword("medium"),
            Self::BorderTopColor
            | Self::BorderRightColor
            | Self::BorderBottomColor
            | Self::BorderLeftColor => GetValue::Keyword("currentcolor"),
            Self::Opacity => GetValue::Number(1.0),
            Self::Display => GetValue::Keyword("inline"),
            Self::Position => GetValue::Keyword("static"),
            Self::TransitionProperty => GetValue::Keyword("all"),
            Self::TransitionDuration | Self::TransitionDelay => GetValue::Time(0.0, StyleDimension::S),
            Self::Cursor
            | Self::BackgroundSizeX
            | Self::BackgroundSizeY
            | Self::Width
            | Self::Height
            | Self::Left
            | Self::Top
            | Self::Right
            | Self::Bottom
            | Self::ZIndex => AUTO,
            _ => ZERO,
        }
    }

    /// The value grammar of a longhand. `None` for shorthands.
    #[must_use]
    pub const fn grammar(self) -> Option<Grammar> {
        let grammar = match self {
            Self::Color
            | Self::BackgroundColor
            | Self::BorderTopColor
            | Self::BorderRightColor
            | Self::BorderBottomColor
            | Self::BorderLeftColor => values(COLOR, &["currentcolor"]),
            Self::FontFamily => Grammar::FontFamily,
            Self::FontSize => values(
                LENGTH_PERCENTAGE,
                &[
                    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large",
                    "xxx-large", "larger", "smaller",
                ],
            ),
            Self::FontWeight => values(&[T::Number], &["normal", "bold", "bolder", "lighter"]),
            Self::FontStyle => values(NONE, &["normal", "italic", "oblique"]),
            Self::FontVariant => values(NONE, &["normal", "small-caps"]),
            Self::LineHeight => values(&[T::Length, T::Percentage, T::Number], &["normal"]),
            Self::LetterSpacing | Self::WordSpacing => values(LENGTH, &["normal"]),
            Self::TextAlign => values(
                NONE,
                &["start", "end", "left", "right", "center", "justify"],
            ),
            Self::TextIndent
            | Self::PaddingTop
            | Self::PaddingRight
            | Self::PaddingBottom
            | Self::PaddingLeft
            | Self::BorderTopLeftRadiusX
            | Self::BorderTopLeftRadiusY
            | Self::BorderTopRightRadiusX
            | Self::BorderTopRightRadiusY
            | Self::BorderBottomRightRadiusX
            | Self::BorderBottomRightRadiusY
            | Self::BorderBottomLeftRadiusX
            | Self::BorderBottomLeftRadiusY
            | Self::MinWidth
            | Self::MinHeight => values(LENGTH_PERCENTAGE, &[]),
            Self::TextTransform => values(
                NONE,
                &["none", "capitalize", "uppercase", "lowercase"],
            ),
            Self::WhiteSpace => values(
                NONE,
                &["normal", "pre", "nowrap", "pre-wrap", "pre-line"],
            ),
            Self::Visibility => values(NONE, &["visible", "hidden", "collapse"]),
            Self::Cursor => values(
                NONE,
                &[
                    "auto", "default", "none", "pointer", "text", "move", "wait", "help",
                    "crosshair", "not-allowed", "grab", "grabbing", "ew-resize", "ns-resize",
                ],
            ),
            Self::Direction => values(NONE, &["ltr", "rtl"]),
            Self::Pitch => values(
                &[T::Frequency],
                &["x-low", "low", "medium", "high", "x-high"],
            ),
            Self::ImageResolution => values(&[T::Resolution], &["from-image"]),
            Self::BackgroundImage => Grammar::Image,
            Self::BackgroundPositionX | Self::BackgroundPositionY => values(LENGTH_PERCENTAGE, &[]),
            Self::BackgroundSizeX | Self::BackgroundSizeY => {
                values(LENGTH_PERCENTAGE, &["auto", "cover", "contain"])
            }
            Self::BackgroundRepeatX | Self::BackgroundRepeatY => {
                values(NONE, &["repeat", "no-repeat", "space", "round"])
            }
            Self::BackgroundAttachment => values(NONE, &["scroll", "fixed", "local"]),
            Self::BackgroundOrigin | Self::BackgroundClip => values(NONE, BOX_KEYWORDS),
            Self::BorderTopWidth
            | Self::BorderRightWidth
            | Self::BorderBottomWidth
            | Self::BorderLeftWidth => values(LENGTH, &["thin", "medium", "thick"]),
            Self::BorderTopStyle
            | Self::BorderRightStyle
            | Self::BorderBottomStyle
            | Self::BorderLeftStyle => values(NONE, BORDER_STYLES),
            Self::MarginTop
            | Self::MarginRight
            | Self::MarginBottom
            | Self::MarginLeft
            | Self::Width
            | Self::Height
            | Self::Left
            | Self::Top
            | Self::Right
            | Self::Bottom => values(LENGTH_PERCENTAGE, &["auto"]),
            Self::MaxWidth | Self::MaxHeight => values(LENGTH_PERCENTAGE, &["none"]),
            Self::Opacity => values(&[T::Number, T::Percentage], &[]),
            Self::Display => values(
                NONE,
                &[
                    "inline",
                    "block",
                    "inline-block",
                    "flex",
                    "inline-flex",
                    "grid",
                    "none",
                ],
            ),
            Self::Position => values(NONE, &["static", "relative", "absolute", "fixed", "sticky"]),
            Self::ZIndex => values(&[T::Number], &["auto"]),
            Self::TransitionProperty => Grammar::AnyKeyword,
            Self::TransitionDuration | Self::TransitionDelay => values(&[T::Time], &[]),
            _ => return None,
        };
        Some(grammar)
    }
}

/// Returns true if `keyword` is one of the border style keywords.
#[must_use]
pub fn is_border_style(keyword: &str) -> bool {
    BORDER_STYLES.contains(&keyword)
}

/// Returns true if `keyword` names a box edge (`border-box`, ...).
#[must_use]
pub fn is_box_keyword(keyword: &str) -> bool {
    BOX_KEYWORDS.contains(&keyword)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_names_round_trip() {
        for p in PropertyId::iter() {
            assert_eq!(PropertyId::from_str(p.name()), Ok(p));
        }
        assert_eq!(PropertyId::from_str("Border-Top-Width"), Ok(PropertyId::BorderTopWidth));
        assert_eq!(PropertyId::BorderTopLeftRadiusX.name(), "border-top-left-radius-x");
        assert_eq!(PropertyId::ZIndex.name(), "z-index");
        assert!(PropertyId::from_str("colour").is_err());
    }

    #[test]
    fn test_every_longhand_has_a_grammar() {
        for p in PropertyId::iter() {
            assert_eq!(p.grammar().is_none(), p.is_shorthand(), "{p}");
            for longhand in p.longhands() {
                assert!(!longhand.is_shorthand());
            }
        }
    }

    #[test]
    fn test_shorthand_queries_read_first_longhand() {
        assert_eq!(PropertyId::Margin.query_target(), PropertyId::MarginTop);
        assert_eq!(PropertyId::Font.query_target(), PropertyId::FontStyle);
        assert!(PropertyId::Font.inherited());
        assert!(!PropertyId::Margin.inherited());
    }

    #[test]
    fn test_initial_values_match_grammar() {
        for p in PropertyId::iter().filter(|p| !p.is_shorthand()) {
            let initial = p.initial();
            let Some(Grammar::Values { kinds, keywords }) = p.grammar() else {
                continue;
            };
            let ok = if initial.is_keyword() {
                keywords.contains(&initial.text())
            } else {
                kinds.contains(&initial.value_type())
            };
            assert!(ok, "initial value of {p} is not in its grammar");
        }
    }
}
