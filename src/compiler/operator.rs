//! Operator table: symbols, precedence, arity, and evaluation rules.

use std::fmt;

use crate::error::CalcError;
use crate::number::Decimal;

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Binary `+`.
    Add,
    /// Binary `-`.
    Subtract,
    /// Binary `*`.
    Multiply,
    /// Binary `/`.
    Divide,
    /// Unary `-`, recognized by position rather than by symbol.
    Negate,
}

impl Operator {
    /// Looks up the binary operator written as `symbol`.
    ///
    /// `-` always maps to [`Operator::Subtract`]; the compiler decides when it
    /// means negation.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the source symbol; `None` for [`Operator::Negate`].
    pub fn symbol(self) -> Option<char> {
        match self {
            Self::Add => Some('+'),
            Self::Subtract => Some('-'),
            Self::Multiply => Some('*'),
            Self::Divide => Some('/'),
            Self::Negate => None,
        }
    }

    /// Precedence order; higher binds tighter.
    pub fn order(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::Negate => 2,
        }
    }

    /// Number of operands consumed.
    pub fn arity(self) -> usize {
        match self {
            Self::Negate => 1,
            _ => 2,
        }
    }

    /// Applies the operator to exactly [`Operator::arity`] operands, left
    /// operand first.
    pub fn apply(self, operands: &[Decimal]) -> Result<Decimal, CalcError> {
        match (self, operands) {
            (Self::Negate, [operand]) => Ok(-operand),
            (Self::Add, [left, right]) => Ok(left + right),
            (Self::Subtract, [left, right]) => Ok(left - right),
            (Self::Multiply, [left, right]) => Ok(left * right),
            (Self::Divide, [left, right]) => left
                .checked_div(right)
                .ok_or_else(CalcError::division_by_zero),
            _ => Err(CalcError::missing_operand(None, self)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "'{symbol}'"),
            None => write!(f, "unary '-'"),
        }
    }
}
