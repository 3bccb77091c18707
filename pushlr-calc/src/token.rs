//! # Calculator Tokens
//!
//! This module defines the token type pushed into the calculator parser and
//! the semantic value it carries:
//!
//! - [`TokenValue`]: the payload of a token, either nothing, a literal operand
//!   supplied by the caller, or a value computed by a reduction;
//! - [`CalcToken`]: a [`TokenID`], a [`TokenValue`] and a caller-supplied
//!   sequence number. It implements [`pushlr::Token`].
//!
//! Terminal tokens are built by the caller; nonterminal tokens (`Expr`,
//! `Stat`) are built by the parser driver during reductions.
use crate::TokenID;
use pushlr::Token;

/// The payload carried by a token.
///
/// # Example
/// ```rust
/// # use pushlr_calc::TokenValue;
/// let literal = TokenValue::Literal(42);
/// let computed = TokenValue::Computed(42);
/// assert_eq!(literal.number(), computed.number());
/// assert_ne!(literal, computed);
/// assert_eq!(TokenValue::None.number(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValue {
    /// No associated data (operators, separators, empty statements).
    None,

    /// Operand of a `num` token as supplied by the caller.
    Literal(i64),

    /// Result of a reduction.
    Computed(i64),
}

impl TokenValue {
    /// The numeric value, whether literal or computed.
    pub fn number(&self) -> Option<i64> {
        match *self {
            TokenValue::None => None,
            TokenValue::Literal(n) | TokenValue::Computed(n) => Some(n),
        }
    }
}

/// A token of the calculator grammar.
///
/// `seq` is bookkeeping for the caller and is never inspected by the
/// automaton. A reduced token takes the `seq` of its leftmost constituent.
///
/// # Example
/// ```rust
/// # use pushlr_calc::{CalcToken, TokenID, TokenValue};
/// # use pushlr::Token;
/// let four = CalcToken::num(4, 0);
/// let plus = CalcToken::punct(TokenID::Plus, 1);
///
/// assert_eq!(four.token_id(), TokenID::Num);
/// assert_eq!(four.value, TokenValue::Literal(4));
/// assert_eq!(plus.value, TokenValue::None);
/// assert_eq!(plus.seq, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcToken {
    /// The token’s kind.
    pub token_id: TokenID,
    /// The associated value, if any.
    pub value: TokenValue,
    /// Caller-supplied sequence number.
    pub seq: usize,
}

impl CalcToken {
    pub fn new(token_id: TokenID, value: TokenValue, seq: usize) -> Self {
        Self {
            token_id,
            value,
            seq,
        }
    }

    /// A `num` token carrying `value`.
    pub fn num(value: i64, seq: usize) -> Self {
        Self::new(TokenID::Num, TokenValue::Literal(value), seq)
    }

    /// An operator or separator token without a value.
    pub fn punct(token_id: TokenID, seq: usize) -> Self {
        Self::new(token_id, TokenValue::None, seq)
    }

    pub fn number(&self) -> Option<i64> {
        self.value.number()
    }
}

impl Token for CalcToken {
    type TokenID = TokenID;

    fn token_id(&self) -> Self::TokenID {
        self.token_id
    }
}
