//! # pushlr
//!
//! Runtime for table-driven shift-reduce parsers fed one token at a time.
//!
//! A grammar plugs in through two seams:
//!
//! - [`ParserData`]: the precomputed action and goto tables, together with
//!   the state, production and token identifier types;
//! - [`ParserDriver`]: the semantic action run when a production is reduced.
//!
//! The [`Parser`] engine owns the parse stack. The caller pushes tokens with
//! [`Parser::feed`]; each call performs every reduction the token triggers and
//! then shifts it, accepts, or reports a [`ParseError`]. Engines share no
//! state, so independent sessions may run on separate threads.
mod error;
mod parser;

#[cfg(test)]
mod test_parser_data;

pub use crate::error::ParseError;
pub use crate::parser::{
    Action, Parser, ParserAction, ParserData, ParserDriver, ParserOptions, ParserProdID,
    ParserStateID, ParserStats, ParserStatus, ParserTokenID, Step, Token,
};
