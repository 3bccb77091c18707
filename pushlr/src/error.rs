//! Errors reported by the [`Parser`](crate::Parser) engine.
//!
//! Malformed input and failing reductions are kept apart so a caller can tell
//! "this is not a sentence of the grammar" from "this sentence is well formed
//! but its value is undefined".
//!
//! # Examples
//!
//! ```rust
//! # use pushlr::ParseError;
//! let err: ParseError<&str, std::fmt::Error> = ParseError::Syntax {
//!     token: "num",
//!     state: 3,
//!     position: 1,
//! };
//! assert!(err.is_syntax());
//! assert!(err.is_recoverable());
//! assert_eq!(err.position(), Some(1));
//! assert_eq!(err.to_string(), "syntax error on \"num\" in state 3 at token 1");
//! ```

use std::fmt::Debug;
use thiserror::Error;

/// A terminal outcome of a parse session.
///
/// `T` is the token type, `E` the error type of the reduction driver.
#[derive(Debug, Error)]
pub enum ParseError<T, E>
where
    T: Debug,
    E: std::error::Error + 'static,
{
    /// No shift or reduction exists for `token` in `state`.
    #[error("syntax error on {token:?} in state {state} at token {position}")]
    Syntax {
        /// The offending token.
        token: T,
        /// Automaton state on top of the stack when the token was refused.
        state: usize,
        /// Zero-based index of the token in the input.
        position: usize,
    },

    /// A reduction action failed.
    #[error("semantic error in {prod} at token {position}: {source}")]
    Semantic {
        /// Label of the failing production.
        prod: &'static str,
        /// Zero-based index of the token that triggered the reduction.
        position: usize,
        #[source]
        source: E,
    },

    /// The parse stack would grow past the configured limit.
    #[error("parse stack exceeds {max_depth} entries")]
    StackOverflow { max_depth: usize },

    /// A reduction needed more entries than the stack holds.
    #[error("parse stack underflow")]
    StackUnderflow,

    /// The goto table has no entry for a reduced nonterminal.
    #[error("no goto for {nonterminal} in state {state}")]
    MissingGoto {
        state: usize,
        nonterminal: &'static str,
    },

    /// The session already accepted its input or failed.
    #[error("parser finished, token {position} refused")]
    Finished { position: usize },
}

impl<T, E> ParseError<T, E>
where
    T: Debug,
    E: std::error::Error + 'static,
{
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, ParseError::Semantic { .. })
    }

    /// Whether skipping to the next synchronizing token can resume the
    /// session. Table inconsistencies are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ParseError::Syntax { .. }
                | ParseError::Semantic { .. }
                | ParseError::StackOverflow { .. }
        )
    }

    /// Index of the token the error was reported on, when known.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { position, .. }
            | ParseError::Semantic { position, .. }
            | ParseError::Finished { position } => Some(*position),
            ParseError::StackOverflow { .. }
            | ParseError::StackUnderflow
            | ParseError::MissingGoto { .. } => None,
        }
    }
}
