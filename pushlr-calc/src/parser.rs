//! # Calculator Parser
//!
//! This module couples the precomputed tables in [`parser_data`](crate::parser_data)
//! with the calculator's semantic actions. It exposes:
//!
//! - [`CalcParserDriver`]: the reduction actions, one per production;
//! - [`CalcParser`]: a thin wrapper around the [`pushlr::Parser`] engine that
//!   accepts [`CalcToken`]s one at a time.
//!
//! ## Behavior highlights
//! - **Operator precedence & associativity** are already resolved in the
//!   tables: `*` and `/` bind tighter than `+` and `-`, and all four are
//!   left-associative.
//! - **Arithmetic** is checked `i64` arithmetic. Division truncates toward
//!   zero; a zero divisor or an overflow fails the reduction with a
//!   [`CalcError`].
//! - **Empty statements** (a bare `newline`, or an `end` right after a
//!   completed statement) are reported as a `Stat` token with
//!   [`TokenValue::None`]. An input that is only `end` is a syntax error.

use crate::parser_data::{ParData, ProdID};
use crate::{CalcError, CalcToken, TokenID, TokenValue};
use pushlr::{ParseError, Parser, ParserDriver, ParserOptions, ParserStats, ParserStatus, Step};

/// Errors surfaced by [`CalcParser`].
pub type CalcParseError = ParseError<CalcToken, CalcError>;

/// Semantic actions of the calculator grammar.
///
/// The driver holds no state: every reduction is a pure function of the
/// production and its right-hand side.
///
/// The reductions are:
///
/// ```text
/// Stat -> ε              empty statement, no value
/// Stat -> Expr           value of the expression
/// Expr -> num            the literal operand
/// Expr -> Expr + Expr    sum
/// Expr -> Expr - Expr    difference
/// Expr -> Expr * Expr    product
/// Expr -> Expr / Expr    quotient, fails on a zero divisor
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CalcParserDriver;

impl ParserDriver for CalcParserDriver {
    type ParserData = ParData;
    type Token = CalcToken;
    type Error = CalcError;

    fn reduce(
        &mut self,
        prod_id: ProdID,
        rhs: Vec<CalcToken>,
        lookahead: &CalcToken,
    ) -> Result<CalcToken, CalcError> {
        match prod_id {
            ProdID::Start => {
                // Start -> Stat
                // Accept - does not get reduced
                unreachable!()
            }
            ProdID::Stat1 => {
                // Stat ->
                Ok(CalcToken::new(TokenID::Stat, TokenValue::None, lookahead.seq))
            }
            ProdID::Stat2 => {
                // Stat -> Expr
                let Ok([mut expr]) = <[CalcToken; 1]>::try_from(rhs) else {
                    unreachable!()
                };
                expr.token_id = TokenID::Stat;
                Ok(expr)
            }
            ProdID::Expr1 => {
                // Expr -> num
                let Ok([mut number]) = <[CalcToken; 1]>::try_from(rhs) else {
                    unreachable!()
                };
                let TokenValue::Literal(value) = number.value else {
                    return Err(CalcError::MissingValue { seq: number.seq });
                };
                number.token_id = TokenID::Expr;
                number.value = TokenValue::Computed(value);
                Ok(number)
            }
            ProdID::Expr2 => {
                // Expr -> Expr + Expr
                binary(rhs, '+', i64::checked_add)
            }
            ProdID::Expr3 => {
                // Expr -> Expr - Expr
                binary(rhs, '-', i64::checked_sub)
            }
            ProdID::Expr4 => {
                // Expr -> Expr * Expr
                binary(rhs, '*', i64::checked_mul)
            }
            ProdID::Expr5 => {
                // Expr -> Expr / Expr
                binary(rhs, '/', i64::checked_div)
            }
        }
    }
}

fn binary(
    rhs: Vec<CalcToken>,
    op: char,
    apply: fn(i64, i64) -> Option<i64>,
) -> Result<CalcToken, CalcError> {
    let Ok([mut expr1, _, expr2]) = <[CalcToken; 3]>::try_from(rhs) else {
        unreachable!()
    };
    let TokenValue::Computed(value1) = expr1.value else {
        unreachable!()
    };
    let TokenValue::Computed(value2) = expr2.value else {
        unreachable!()
    };
    if op == '/' && value2 == 0 {
        return Err(CalcError::DivisionByZero { dividend: value1 });
    }
    let value = apply(value1, value2).ok_or(CalcError::Overflow {
        op,
        lhs: value1,
        rhs: value2,
    })?;
    log::trace!("{} {} {} = {}", value1, op, value2, value);
    expr1.value = TokenValue::Computed(value);
    Ok(expr1)
}

/// The calculator parser: the [`pushlr::Parser`] engine driven by
/// [`CalcParserDriver`].
///
/// Tokens are pushed with [`CalcParser::feed`] in input order. A sentence
/// ends with [`TokenID::End`], which finishes the session, or with
/// [`TokenID::Newline`], which reports the statement and keeps going.
///
/// # Errors
///
/// - [`ParseError::Syntax`]: the token cannot follow what came before;
/// - [`ParseError::Semantic`]: a reduction failed, see [`CalcError`].
///
/// Both finish the session unless [`ParserOptions::resync`] is set, in which
/// case tokens are skipped up to the next `newline`.
///
/// # Example
///
/// ```rust
/// # use pushlr_calc::{CalcParser, CalcToken, TokenID, TokenValue};
/// # use pushlr::Step;
/// let mut parser = CalcParser::new();
/// parser.feed(CalcToken::num(4, 0)).unwrap();
/// parser.feed(CalcToken::punct(TokenID::Plus, 1)).unwrap();
/// parser.feed(CalcToken::num(13, 2)).unwrap();
/// let Step::Accept(stat) = parser.feed(CalcToken::punct(TokenID::End, 3)).unwrap() else {
///     panic!("expected accept");
/// };
/// assert_eq!(stat.token_id, TokenID::Stat);
/// assert_eq!(stat.value, TokenValue::Computed(17));
/// ```
pub struct CalcParser {
    parser: Parser<CalcParserDriver>,
}

impl CalcParser {
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            parser: Parser::with_options(CalcParserDriver, options),
        }
    }

    /// Pushes one token into the parser.
    pub fn feed(&mut self, token: CalcToken) -> Result<Step<CalcToken>, CalcParseError> {
        self.parser.feed(token)
    }

    /// Pushes tokens until the input is accepted or an error occurs, and
    /// returns the completed statements.
    pub fn feed_all<I>(&mut self, tokens: I) -> Result<Vec<CalcToken>, CalcParseError>
    where
        I: IntoIterator<Item = CalcToken>,
    {
        self.parser.feed_all(tokens)
    }

    pub fn reset(&mut self) {
        self.parser.reset()
    }

    pub fn status(&self) -> ParserStatus {
        self.parser.status()
    }

    pub fn position(&self) -> usize {
        self.parser.position()
    }

    pub fn stats(&self) -> ParserStats {
        self.parser.stats()
    }
}

impl Default for CalcParser {
    fn default() -> Self {
        Self::new()
    }
}
