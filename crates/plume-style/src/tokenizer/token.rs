//! Declaration tokens per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! Only the token kinds that can appear inside a declaration block are
//! modelled. `<CDO-token>`, `<CDC-token>` and `<unicode-range-token>` never
//! occur in a `style`-attribute-like string and are tokenized as delimiters.

use core::fmt;

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// A token produced by [`CssTokenizer`](super::CssTokenizer).
#[derive(Debug, Clone, PartialEq)]
pub enum CssToken {
    /// "`<ident-token>`"
    Ident(String),

    /// "`<function-token>`" - the name, without the opening parenthesis.
    Function(String),

    /// "`<at-keyword-token>`" - the name, without the `@`.
    AtKeyword(String),

    /// "`<hash-token>`" - the value, without the `#`.
    Hash(String),

    /// "`<string-token>`"
    String(String),

    /// "`<bad-string-token>`" - "represents a parsing error"
    BadString,

    /// "`<url-token>`" - an unquoted `url(...)`.
    Url(String),

    /// "`<bad-url-token>`" - "represents a parsing error"
    BadUrl,

    /// "`<delim-token>`"
    Delim(char),

    /// "`<number-token>`"
    Number(f64),

    /// "`<percentage-token>`"
    Percentage(f64),

    /// "`<dimension-token>`" - "has a numeric value ... and a unit"
    Dimension {
        /// "a numeric value"
        value: f64,
        /// "a unit", exactly as written
        unit: String,
    },

    /// "`<whitespace-token>`"
    Whitespace,

    /// "`<colon-token>`"
    Colon,

    /// "`<semicolon-token>`"
    Semicolon,

    /// "`<comma-token>`"
    Comma,

    /// `<[-token>`
    LeftBracket,

    /// `<]-token>`
    RightBracket,

    /// `<(-token>`
    LeftParen,

    /// `<)-token>`
    RightParen,

    /// `<{-token>`
    LeftBrace,

    /// `<}-token>`
    RightBrace,

    /// End of input.
    Eof,
}

impl CssToken {
    /// Create a new ident token.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Ident(value.into())
    }

    /// Create a new dimension token.
    #[must_use]
    pub fn dimension(value: f64, unit: impl Into<String>) -> Self {
        Self::Dimension {
            value,
            unit: unit.into(),
        }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// The matching closing token for `(`, `[` and `{`.
    #[must_use]
    pub const fn mirror(&self) -> Option<Self> {
        match self {
            Self::LeftParen => Some(Self::RightParen),
            Self::LeftBracket => Some(Self::RightBracket),
            Self::LeftBrace => Some(Self::RightBrace),
            _ => None,
        }
    }
}

impl fmt::Display for CssToken {
    /// Serializes the token back to CSS text. Used when echoing dropped
    /// declarations in warnings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "{v}"),
            Self::Function(v) => write!(f, "{v}("),
            Self::AtKeyword(v) => write!(f, "@{v}"),
            Self::Hash(v) => write!(f, "#{v}"),
            Self::String(v) => write!(f, "\"{v}\""),
            Self::BadString | Self::BadUrl | Self::Eof => Ok(()),
            Self::Url(v) => write!(f, "url({v})"),
            Self::Delim(c) => write!(f, "{c}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Percentage(v) => write!(f, "{v}%"),
            Self::Dimension { value, unit } => write!(f, "{value}{unit}"),
            Self::Whitespace => write!(f, " "),
            Self::Colon => write!(f, ":"),
            Self::Semicolon => write!(f, ";"),
            Self::Comma => write!(f, ","),
            Self::LeftBracket => write!(f, "["),
            Self::RightBracket => write!(f, "]"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
        }
    }
}
