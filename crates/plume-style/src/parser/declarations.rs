//! Declaration list parsing per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! "The input to the parsing stage is a stream of tokens from the tokenization stage."
//! Only the declaration-list entry point is implemented; a property set is
//! always fed `style`-attribute-like text, never a full stylesheet.

use core::fmt;

use crate::error::DeclarationError;
use crate::tokenizer::{CssToken, CssTokenizer};

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A declaration such as `color: red`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name, ASCII lower-cased.
    pub name: String,
    /// The value, with surrounding whitespace and `!important` removed.
    pub value: Vec<ComponentValue>,
    /// Whether the declaration carried `!important`.
    pub important: bool,
}

/// [§ 5.4.9 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// A preserved token.
    Token(CssToken),
    /// A function with its arguments.
    Function {
        /// The function name, as written.
        name: String,
        /// The arguments, including separators.
        args: Vec<ComponentValue>,
    },
    /// A `()`, `[]` or `{}` block.
    Block {
        /// The opening token.
        open: char,
        /// The block contents.
        value: Vec<ComponentValue>,
    },
}

impl ComponentValue {
    /// Returns true for whitespace tokens.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Token(CssToken::Whitespace))
    }

    /// Returns true for comma tokens.
    #[must_use]
    pub const fn is_comma(&self) -> bool {
        matches!(self, Self::Token(CssToken::Comma))
    }

    /// The ident text if this is an ident token.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Token(CssToken::Ident(name)) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => write!(f, "{token}"),
            Self::Function { name, args } => {
                write!(f, "{name}(")?;
                for arg in args {
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Self::Block { open, value } => {
                let close = match open {
                    '(' => ')',
                    '[' => ']',
                    _ => '}',
                };
                write!(f, "{open}")?;
                for v in value {
                    write!(f, "{v}")?;
                }
                write!(f, "{close}")
            }
        }
    }
}

/// Serialize a component value list back to CSS text.
#[must_use]
pub fn serialize(values: &[ComponentValue]) -> String {
    values.iter().map(ToString::to_string).collect::<String>().trim().to_string()
}

/// Declaration list parser.
#[derive(Debug)]
pub struct DeclarationParser {
    tokens: Vec<CssToken>,
    position: usize,
}

impl DeclarationParser {
    /// Create a new parser from a list of tokens.
    #[must_use]
    pub const fn new(tokens: Vec<CssToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Tokenize and parse `text` in one call.
    #[must_use]
    pub fn parse(text: &str) -> Vec<Result<Declaration, DeclarationError>> {
        Self::new(CssTokenizer::tokenize(text)).parse_declaration_list()
    }

    /// [§ 5.3.8 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
    ///
    /// Every item between semicolons yields one entry: the declaration, or
    /// the reason it was thrown away.
    pub fn parse_declaration_list(&mut self) -> Vec<Result<Declaration, DeclarationError>> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                // "<whitespace-token>, <semicolon-token>: Do nothing."
                Some(CssToken::Whitespace | CssToken::Semicolon) => self.position += 1,

                // "<EOF-token>: Return the list of declarations."
                None | Some(CssToken::Eof) => return declarations,

                // "<at-keyword-token>: ... Consume an at-rule."
                // At-rules have no meaning in a property set.
                Some(CssToken::AtKeyword(name)) => {
                    let error = DeclarationError::UnexpectedToken(format!("@{name}"));
                    self.skip_to_semicolon();
                    declarations.push(Err(error));
                }

                // "<ident-token>: ... Consume a declaration."
                Some(CssToken::Ident(_)) => declarations.push(self.consume_declaration()),

                // "anything else: This is a parse error. ... As long as the
                // next input token is anything other than a <semicolon-token>
                // or <EOF-token>, consume a component value and throw away the
                // returned value."
                Some(token) => {
                    let error = DeclarationError::UnexpectedToken(token.to_string());
                    self.skip_to_semicolon();
                    declarations.push(Err(error));
                }
            }
        }
    }

    /// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
    fn consume_declaration(&mut self) -> Result<Declaration, DeclarationError> {
        let name = match self.bump() {
            Some(CssToken::Ident(name)) => name.to_ascii_lowercase(),
            other => {
                let found = other.as_ref().map(ToString::to_string).unwrap_or_default();
                return Err(DeclarationError::UnexpectedToken(found));
            }
        };

        self.skip_whitespace();

        // "If the next input token is anything other than a <colon-token>,
        // this is a parse error. Return nothing."
        if self.peek() != Some(&CssToken::Colon) {
            self.skip_to_semicolon();
            return Err(DeclarationError::MissingColon(name));
        }
        self.position += 1;
        self.skip_whitespace();

        let mut value = Vec::new();
        while !matches!(self.peek(), None | Some(CssToken::Eof | CssToken::Semicolon)) {
            if let Some(v) = self.consume_component_value() {
                value.push(v);
            }
        }

        let important = strip_important(&mut value);
        while value.last().is_some_and(ComponentValue::is_whitespace) {
            let _ = value.pop();
        }

        if value.is_empty() {
            return Err(DeclarationError::EmptyValue(name));
        }

        Ok(Declaration {
            name,
            value,
            important,
        })
    }

    /// [§ 5.4.9 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    fn consume_component_value(&mut self) -> Option<ComponentValue> {
        let token = self.bump()?;
        match token {
            CssToken::LeftParen | CssToken::LeftBracket | CssToken::LeftBrace => {
                let open = match token {
                    CssToken::LeftParen => '(',
                    CssToken::LeftBracket => '[',
                    _ => '{',
                };
                let close = token.mirror();
                let value = self.consume_until(close.as_ref());
                Some(ComponentValue::Block { open, value })
            }
            CssToken::Function(name) => {
                let args = self.consume_until(Some(&CssToken::RightParen));
                Some(ComponentValue::Function { name, args })
            }
            token => Some(ComponentValue::Token(token)),
        }
    }

    /// [§ 5.4.8 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    ///
    /// Consumes component values up to and including `ending`.
    fn consume_until(&mut self, ending: Option<&CssToken>) -> Vec<ComponentValue> {
        let mut value = Vec::new();
        loop {
            match self.peek() {
                None | Some(CssToken::Eof) => return value,
                Some(token) if Some(token) == ending => {
                    self.position += 1;
                    return value;
                }
                Some(_) => {
                    if let Some(v) = self.consume_component_value() {
                        value.push(v);
                    }
                }
            }
        }
    }

    /// Error recovery: drop component values up to the next top-level `;`.
    fn skip_to_semicolon(&mut self) {
        while !matches!(self.peek(), None | Some(CssToken::Eof | CssToken::Semicolon)) {
            let _ = self.consume_component_value();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(CssToken::is_whitespace) {
            self.position += 1;
        }
    }

    fn bump(&mut self) -> Option<CssToken> {
        let token = self.tokens.get(self.position)?.clone();
        self.position += 1;
        Some(token)
    }

    fn peek(&self) -> Option<&CssToken> {
        self.tokens.get(self.position)
    }
}

/// [§ 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
///
/// "A declaration is important if it has a !important annotation, i.e. if
/// the last two (non-whitespace, non-comment) tokens in its value are a
/// <delim-token> with the value "!" followed by an <ident-token> with a value
/// that is an ASCII case-insensitive match for "important"."
///
/// Removes the annotation from `value` and reports whether it was present.
fn strip_important(value: &mut Vec<ComponentValue>) -> bool {
    let significant: Vec<usize> = value
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, v)| !v.is_whitespace())
        .map(|(i, _)| i)
        .take(2)
        .collect();

    let [last, before] = significant[..] else {
        return false;
    };
    let is_important = value[last]
        .as_ident()
        .is_some_and(|ident| ident.eq_ignore_ascii_case("important"))
        && value[before] == ComponentValue::Token(CssToken::Delim('!'));

    if is_important {
        value.truncate(before);
    }
    is_important
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_declaration() {
        let decls = DeclarationParser::parse("color: red");
        assert_eq!(decls.len(), 1);
        let decl = decls[0].as_ref().unwrap();
        assert_eq!(decl.name, "color");
        assert_eq!(decl.value, vec![ComponentValue::Token(CssToken::ident("red"))]);
        assert!(!decl.important);
    }

    #[test]
    fn test_name_is_lowercased() {
        let decls = DeclarationParser::parse("COLOR: Red");
        let decl = decls[0].as_ref().unwrap();
        assert_eq!(decl.name, "color");
        // Values are kept as written; keyword folding happens later.
        assert_eq!(decl.value[0].as_ident(), Some("Red"));
    }

    #[test]
    fn test_missing_colon_recovers_at_semicolon() {
        let decls = DeclarationParser::parse("margin 4px; color: blue");
        assert_eq!(decls.len(), 2);
        assert_eq!(
            decls[0],
            Err(DeclarationError::MissingColon("margin".to_string()))
        );
        assert_eq!(decls[1].as_ref().unwrap().name, "color");
    }

    #[test]
    fn test_important_is_stripped() {
        let decls = DeclarationParser::parse("width: 10px ! IMPORTANT ;");
        let decl = decls[0].as_ref().unwrap();
        assert!(decl.important);
        assert_eq!(decl.value, vec![ComponentValue::Token(CssToken::dimension(10.0, "px"))]);
    }

    #[test]
    fn test_function_arguments_keep_semicolon_scope() {
        let decls = DeclarationParser::parse("color: rgba(1, 2, 3, 0.5); margin: 0");
        assert_eq!(decls.len(), 2);
        match &decls[0].as_ref().unwrap().value[0] {
            ComponentValue::Function { name, args } => {
                assert_eq!(name, "rgba");
                assert_eq!(args.iter().filter(|a| a.is_comma()).count(), 3);
            }
            other => panic!("expected function, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_value_is_an_error() {
        let decls = DeclarationParser::parse("color: ;");
        assert_eq!(decls[0], Err(DeclarationError::EmptyValue("color".to_string())));
    }

    #[test]
    fn test_declaration_needs_a_name() {
        let mut parser = DeclarationParser::new(vec![CssToken::Number(4.0)]);
        assert_eq!(
            parser.consume_declaration(),
            Err(DeclarationError::UnexpectedToken("4".to_string()))
        );
        let mut parser = DeclarationParser::new(Vec::new());
        assert_eq!(
            parser.consume_declaration(),
            Err(DeclarationError::UnexpectedToken(String::new()))
        );
    }

    #[test]
    fn test_serialize_round_trips_text() {
        let decls = DeclarationParser::parse("background: url(a.png) no-repeat");
        assert_eq!(serialize(&decls[0].as_ref().unwrap().value), "url(a.png) no-repeat");
    }
}
