//! # Calculator Error Type
//!
//! This module defines [`CalcError`], the error raised by the calculator's
//! reduction actions. These are *semantic* errors: the input is a sentence of
//! the grammar but its value is undefined. The parser engine wraps them in
//! [`pushlr::ParseError::Semantic`] together with the failing production, so
//! they stay distinct from syntax errors.
use thiserror::Error;

/// Represents the failures of arithmetic reductions.
///
/// Every variant names the operands involved.
///
/// # Examples
/// ```rust
/// # use pushlr_calc::CalcError;
/// let err = CalcError::DivisionByZero { dividend: 4 };
/// assert_eq!(err.to_string(), "division by zero: 4 / 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The divisor of `/` is zero.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i64 },

    /// The result does not fit in an `i64`.
    #[error("integer overflow: {lhs} {op} {rhs}")]
    Overflow { op: char, lhs: i64, rhs: i64 },

    /// A `num` token was pushed without a numeric value.
    #[error("num token {seq} carries no value")]
    MissingValue { seq: usize },
}
