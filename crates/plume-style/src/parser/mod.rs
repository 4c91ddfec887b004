//! CSS Parser
//!
//! [CSS Syntax Module Level 3 § 5](https://www.w3.org/TR/css-syntax-3/#parsing)
//!
//! Turns a declaration-block token stream into [`Declaration`]s made of
//! [`ComponentValue`]s. Property-specific grammar lives in
//! [`crate::style`].

/// Declaration list parsing and component values.
pub mod declarations;

pub use declarations::{ComponentValue, Declaration, DeclarationParser, serialize};
