//! # pushlr-calc
//!
//! A calculator built on **pushlr**, and the demonstration drivers that feed
//! it. Tokens are created by the caller and pushed into the parser one at a
//! time; the parser evaluates `+ - * /` over integers as it reduces.
//!
//! ## Overview
//!
//! - [`parser_data`]: the precomputed automaton: states, productions, token
//!   kinds, action and goto tables, and the operator precedence declarations
//!   the tables were resolved with.
//! - [`parser`]: the reduction actions ([`CalcParserDriver`]) and the
//!   [`CalcParser`] wrapper around the engine.
//! - [`token`]: [`CalcToken`] and its [`TokenValue`].
//! - [`error`]: [`CalcError`], the semantic errors of the reductions.
//! - [`demo`]: hardcoded token scripts replayed by the `pushlr-calc` binary.
//!
//! ## Example
//!
//! ```rust
//! use pushlr_calc::{CalcParser, CalcToken, TokenID, TokenValue};
//!
//! // 4 * 13 + 13
//! let tokens = [
//!     CalcToken::num(4, 0),
//!     CalcToken::punct(TokenID::Times, 1),
//!     CalcToken::num(13, 2),
//!     CalcToken::punct(TokenID::Plus, 3),
//!     CalcToken::num(13, 4),
//!     CalcToken::punct(TokenID::End, 5),
//! ];
//!
//! let mut parser = CalcParser::new();
//! let stats = parser.feed_all(tokens).unwrap();
//! assert!(matches!(
//!     stats.as_slice(),
//!     [CalcToken {
//!         token_id: TokenID::Stat,
//!         value: TokenValue::Computed(65),
//!         seq: 0,
//!     }]
//! ));
//! ```
pub mod demo;
pub mod error;
pub mod parser;
pub mod parser_data;
pub mod token;

#[cfg(test)]
mod properties;

pub use demo::{Demo, Outcome, Session};
pub use error::CalcError;
pub use parser::{CalcParseError, CalcParser, CalcParserDriver};
pub use parser_data::TokenID;
pub use token::{CalcToken, TokenValue};
