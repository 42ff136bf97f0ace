//! The single domain error type produced anywhere in the interpreter.
//!
//! Categories are distinguished by variant, not by a bare string, so callers
//! that care (tests, a future host) can match on the kind of failure without
//! scraping the message. The message text itself is what spec compliance is
//! actually checked against.

use std::fmt;

/// A interpreter-level failure, carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoError {
    /// Unbalanced brackets, unexpected `]`, or any other failure turning a
    /// source line into tokens.
    Lex(String),
    /// A variable or procedure name could not be resolved.
    Lookup(String),
    /// A procedure ran out of tokens, or out of values, while its arguments
    /// were being collected.
    Arity(String),
    /// A structural problem at the token-cursor level: stray `)`, missing
    /// `)`, and similar.
    Syntax(String),
    /// A primitive's type guard rejected one of its arguments (e.g. `if`'s
    /// non-boolean condition).
    TypeGuard(String),
    /// A line evaluated to a value nobody asked for.
    Statement(String),
    /// Any other failure raised from inside a primitive's native body.
    Primitive(String),
}

impl LogoError {
    /// The message text, independent of category.
    pub fn message(&self) -> &str {
        match self {
            Self::Lex(m)
            | Self::Lookup(m)
            | Self::Arity(m)
            | Self::Syntax(m)
            | Self::TypeGuard(m)
            | Self::Statement(m)
            | Self::Primitive(m) => m,
        }
    }
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LogoError {}

/// Shorthand used throughout the crate.
pub type LogoResult<T> = Result<T, LogoError>;
