//! Error types for declaration parsing and cascade construction.

use thiserror::Error;

use crate::cascade::CascadeId;
use crate::style::StyleId;

/// Why a single declaration was dropped.
///
/// `Style::set` never surfaces these; it logs them and moves on. They are
/// returned by [`parse_declarations`](crate::style::parse_declarations) for
/// callers that want to report bad input themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// The item did not start with a property name.
    #[error("expected a property name, found '{0}'")]
    UnexpectedToken(String),

    /// The property name was not followed by a colon.
    #[error("missing ':' after '{0}'")]
    MissingColon(String),

    /// The property name is not in the property table.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// The declaration had a name and a colon but nothing after it.
    #[error("empty value for '{0}'")]
    EmptyValue(String),

    /// The value does not match the property's grammar.
    #[error("invalid value '{value}' for '{property}'")]
    InvalidValue {
        /// Property name as written
        property: String,
        /// Value text as written
        value: String,
    },
}

/// Misuse of the cascade arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CascadeError {
    /// The style id does not belong to this arena.
    #[error("style {0:?} does not exist")]
    UnknownStyle(StyleId),

    /// The cascade id does not belong to this arena.
    #[error("cascade {0:?} does not exist")]
    UnknownCascade(CascadeId),

    /// Re-parenting would make a cascade its own ancestor.
    #[error("making {parent:?} the parent of {child:?} would create a cycle")]
    Cycle {
        /// The node being re-parented
        child: CascadeId,
        /// The rejected parent
        parent: CascadeId,
    },

    /// The parent chain would exceed [`MAX_CASCADE_DEPTH`](crate::cascade::MAX_CASCADE_DEPTH).
    #[error("cascade chain depth {0} exceeds the maximum")]
    TooDeep(usize),
}
