//! Declaration-block tokenizer.

/// Token types per [CSS Syntax Level 3 § 4](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod token;
/// Tokenizer implementation.
#[allow(clippy::module_inception)]
pub mod tokenizer;

pub use token::CssToken;
pub use tokenizer::CssTokenizer;
