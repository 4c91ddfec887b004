use super::token::CssToken;

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// Tokenizer for declaration-block text such as `"color: red; margin: 4px"`.
#[derive(Debug)]
pub struct CssTokenizer {
    /// The input, as code points
    input: Vec<char>,
    /// Index of the next code point to consume
    position: usize,
    /// Collected tokens
    tokens: Vec<CssToken>,
}

impl CssTokenizer {
    /// Create a new tokenizer over the given input.
    #[must_use]
    pub fn new(input: impl AsRef<str>) -> Self {
        Self {
            input: input.as_ref().chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize `input` in one call.
    #[must_use]
    pub fn tokenize(input: impl AsRef<str>) -> Vec<CssToken> {
        let mut tokenizer = Self::new(input);
        tokenizer.run();
        tokenizer.into_tokens()
    }

    /// Consume tokens until end of input. The last token is always
    /// [`CssToken::Eof`].
    pub fn run(&mut self) {
        loop {
            let token = self.consume_token();
            let done = token.is_eof();
            self.tokens.push(token);
            if done {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<CssToken> {
        self.tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> CssToken {
        self.consume_comments();

        let Some(c) = self.bump() else {
            return CssToken::Eof;
        };

        match c {
            c if is_whitespace(c) => {
                while self.peek(0).is_some_and(is_whitespace) {
                    self.position += 1;
                }
                CssToken::Whitespace
            }
            '"' | '\'' => self.consume_string(c),
            '#' => {
                // "If the next input code point is an ident code point or the
                // next two input code points are a valid escape"
                if self.peek(0).is_some_and(is_ident_code_point)
                    || is_valid_escape(self.peek(0), self.peek(1))
                {
                    CssToken::Hash(self.consume_ident_sequence())
                } else {
                    CssToken::Delim('#')
                }
            }
            '(' => CssToken::LeftParen,
            ')' => CssToken::RightParen,
            '[' => CssToken::LeftBracket,
            ']' => CssToken::RightBracket,
            '{' => CssToken::LeftBrace,
            '}' => CssToken::RightBrace,
            ',' => CssToken::Comma,
            ':' => CssToken::Colon,
            ';' => CssToken::Semicolon,
            '+' | '.' if self.starts_number(Some(c), 0) => {
                self.position -= 1;
                self.consume_numeric()
            }
            '-' => {
                if self.starts_number(Some('-'), 0) {
                    self.position -= 1;
                    self.consume_numeric()
                } else if self.starts_ident(Some('-'), 0) {
                    self.position -= 1;
                    self.consume_ident_like()
                } else {
                    CssToken::Delim('-')
                }
            }
            '@' if self.starts_ident(self.peek(0), 1) => {
                CssToken::AtKeyword(self.consume_ident_sequence())
            }
            '\\' if is_valid_escape(Some('\\'), self.peek(0)) => {
                self.position -= 1;
                self.consume_ident_like()
            }
            c if c.is_ascii_digit() => {
                self.position -= 1;
                self.consume_numeric()
            }
            c if is_ident_start_code_point(c) => {
                self.position -= 1;
                self.consume_ident_like()
            }
            // "anything else"
            c => CssToken::Delim(c),
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    fn consume_comments(&mut self) {
        while self.peek(0) == Some('/') && self.peek(1) == Some('*') {
            self.position += 2;
            loop {
                match self.bump() {
                    Some('*') if self.peek(0) == Some('/') => {
                        self.position += 1;
                        break;
                    }
                    Some(_) => {}
                    None => return,
                }
            }
        }
    }

    /// [§ 4.3.5 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string(&mut self, ending: char) -> CssToken {
        let mut value = String::new();
        loop {
            match self.bump() {
                // "EOF: This is a parse error. Return the <string-token>."
                None => return CssToken::String(value),
                Some(c) if c == ending => return CssToken::String(value),
                // "newline: This is a parse error. Reconsume the current input
                // code point, create a <bad-string-token>, and return it."
                Some('\n') => {
                    self.position -= 1;
                    return CssToken::BadString;
                }
                Some('\\') => match self.peek(0) {
                    None => {}
                    Some('\n') => self.position += 1,
                    Some(_) => value.push(self.consume_escaped_code_point()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric(&mut self) -> CssToken {
        let value = self.consume_number();

        if self.starts_ident(self.peek(0), 1) {
            CssToken::Dimension {
                value,
                unit: self.consume_ident_sequence(),
            }
        } else if self.peek(0) == Some('%') {
            self.position += 1;
            CssToken::Percentage(value)
        } else {
            CssToken::Number(value)
        }
    }

    /// [§ 4.3.4 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like(&mut self) -> CssToken {
        let name = self.consume_ident_sequence();

        if self.peek(0) != Some('(') {
            return CssToken::Ident(name);
        }
        self.position += 1;

        if !name.eq_ignore_ascii_case("url") {
            return CssToken::Function(name);
        }

        // "While the next two input code points are whitespace, consume the
        // next input code point."
        while self.peek(0).is_some_and(is_whitespace) && self.peek(1).is_some_and(is_whitespace) {
            self.position += 1;
        }

        // A quoted url is a function whose argument is a string token.
        let quoted = |c: Option<char>| matches!(c, Some('"' | '\''));
        if quoted(self.peek(0))
            || (self.peek(0).is_some_and(is_whitespace) && quoted(self.peek(1)))
        {
            CssToken::Function(name)
        } else {
            self.consume_url()
        }
    }

    /// [§ 4.3.6 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    fn consume_url(&mut self) -> CssToken {
        let mut value = String::new();
        while self.peek(0).is_some_and(is_whitespace) {
            self.position += 1;
        }

        loop {
            match self.bump() {
                Some(')') | None => return CssToken::Url(value),
                Some(c) if is_whitespace(c) => {
                    while self.peek(0).is_some_and(is_whitespace) {
                        self.position += 1;
                    }
                    return match self.peek(0) {
                        Some(')') => {
                            self.position += 1;
                            CssToken::Url(value)
                        }
                        None => CssToken::Url(value),
                        Some(_) => self.consume_bad_url_remnants(),
                    };
                }
                Some('"' | '\'' | '(') => return self.consume_bad_url_remnants(),
                Some('\\') => {
                    if is_valid_escape(Some('\\'), self.peek(0)) {
                        value.push(self.consume_escaped_code_point());
                    } else {
                        return self.consume_bad_url_remnants();
                    }
                }
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.14 Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    fn consume_bad_url_remnants(&mut self) -> CssToken {
        loop {
            match self.bump() {
                Some(')') | None => return CssToken::BadUrl,
                Some('\\') if is_valid_escape(Some('\\'), self.peek(0)) => {
                    let _ = self.consume_escaped_code_point();
                }
                Some(_) => {}
            }
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();
        while let Some(c) = self.peek(0) {
            if is_ident_code_point(c) {
                self.position += 1;
                result.push(c);
            } else if is_valid_escape(Some(c), self.peek(1)) {
                self.position += 1;
                result.push(self.consume_escaped_code_point());
            } else {
                break;
            }
        }
        result
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    fn consume_number(&mut self) -> f64 {
        let mut repr = String::new();

        if let Some(sign @ ('+' | '-')) = self.peek(0) {
            self.position += 1;
            repr.push(sign);
        }
        self.consume_digits(&mut repr);

        // "If the next 2 input code points are U+002E FULL STOP (.) followed by a digit"
        if self.peek(0) == Some('.') && self.peek(1).is_some_and(|c| c.is_ascii_digit()) {
            self.position += 1;
            repr.push('.');
            self.consume_digits(&mut repr);
        }

        // "E or e, optionally followed by - or +, followed by a digit"
        if matches!(self.peek(0), Some('e' | 'E')) {
            let signed = matches!(self.peek(1), Some('+' | '-'));
            let digit_at = if signed { 2 } else { 1 };
            if self.peek(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                repr.push('e');
                if signed && let Some(sign) = self.peek(1) {
                    repr.push(sign);
                }
                self.position += digit_at;
                self.consume_digits(&mut repr);
            }
        }

        repr.parse().unwrap_or(0.0)
    }

    fn consume_digits(&mut self, repr: &mut String) {
        while let Some(c) = self.peek(0).filter(char::is_ascii_digit) {
            self.position += 1;
            repr.push(c);
        }
    }

    /// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    ///
    /// Called with the reverse solidus already consumed.
    fn consume_escaped_code_point(&mut self) -> char {
        let Some(c) = self.bump() else {
            return char::REPLACEMENT_CHARACTER;
        };
        if !c.is_ascii_hexdigit() {
            return c;
        }

        let mut hex = String::from(c);
        while hex.len() < 6 {
            match self.peek(0) {
                Some(h) if h.is_ascii_hexdigit() => {
                    self.position += 1;
                    hex.push(h);
                }
                _ => break,
            }
        }
        if self.peek(0).is_some_and(is_whitespace) {
            self.position += 1;
        }

        // "If this number is zero, or is for a surrogate, or is greater than
        // the maximum allowed code point, return U+FFFD REPLACEMENT CHARACTER."
        u32::from_str_radix(&hex, 16)
            .ok()
            .filter(|&cp| cp != 0)
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    ///
    /// `first` is the first code point; the remaining two are read from the
    /// input starting `offset` code points ahead.
    fn starts_ident(&self, first: Option<char>, offset: usize) -> bool {
        let second = self.peek(offset);
        match first {
            Some('-') => {
                second.is_some_and(|c| is_ident_start_code_point(c) || c == '-')
                    || is_valid_escape(second, self.peek(offset + 1))
            }
            Some('\\') => is_valid_escape(first, second),
            Some(c) => is_ident_start_code_point(c),
            None => false,
        }
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    fn starts_number(&self, first: Option<char>, offset: usize) -> bool {
        let digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
        let second = self.peek(offset);
        match first {
            Some('+' | '-') => {
                digit(second) || (second == Some('.') && digit(self.peek(offset + 1)))
            }
            Some('.') => digit(second),
            c => digit(c),
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.position += 1;
        Some(c)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second != Some('\n')
}

/// [§ 4.2 Definitions - whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
const fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// [§ 4.2 Definitions - ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
///
/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
const fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.2 Definitions - ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
///
/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
const fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}
