//! Error contracts shared by compilation and evaluation.

use std::fmt;

use crate::lexer::Span;

/// Stable error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcErrorKind {
    /// Unrecognized character or an expression shape the grammar rejects.
    MalformedExpression,
    /// A digit run that does not form a valid number.
    InvalidNumber,
    /// An operator found fewer operands than its arity.
    MissingOperand,
    /// A `(` was never closed.
    UnbalancedOpenBracket,
    /// A `)` has no matching `(`.
    UnbalancedCloseBracket,
    /// Bracket depth exceeded the configured limit.
    NestingLimitExceeded,
    /// Expression tree size exceeded the configured limit.
    NodeLimitExceeded,
    /// Division by a zero divisor during evaluation.
    DivisionByZero,
    /// Fewer argument values than the expression has parameter slots.
    ArgumentCountMismatch,
    /// The argument record is not a struct or map.
    InvalidArgumentRecord,
}

impl fmt::Display for CalcErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedExpression => write!(f, "malformed expression"),
            Self::InvalidNumber => write!(f, "invalid number"),
            Self::MissingOperand => write!(f, "missing operand"),
            Self::UnbalancedOpenBracket => write!(f, "unbalanced open bracket"),
            Self::UnbalancedCloseBracket => write!(f, "unbalanced close bracket"),
            Self::NestingLimitExceeded => write!(f, "nesting limit exceeded"),
            Self::NodeLimitExceeded => write!(f, "node limit exceeded"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ArgumentCountMismatch => write!(f, "argument count mismatch"),
            Self::InvalidArgumentRecord => write!(f, "invalid argument record"),
        }
    }
}

/// Error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcError {
    /// Error category.
    pub kind: CalcErrorKind,
    /// Optional span into the expression text near the failure.
    pub span: Option<Span>,
    /// Human-readable error message.
    pub message: String,
}

impl CalcError {
    /// Creates an error.
    pub fn new(kind: CalcErrorKind, span: Option<Span>, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    /// Creates a `MalformedExpression` error for an unrecognized character.
    pub fn unexpected_character(span: Span, ch: char) -> Self {
        Self::new(
            CalcErrorKind::MalformedExpression,
            Some(span),
            format!("encountered invalid character {ch:?} at {span}"),
        )
    }

    /// Creates a `MalformedExpression` error.
    pub fn malformed(span: Option<Span>, message: impl Into<String>) -> Self {
        Self::new(CalcErrorKind::MalformedExpression, span, message)
    }

    /// Creates an `InvalidNumber` error.
    pub fn invalid_number(span: Option<Span>, text: impl AsRef<str>) -> Self {
        Self::new(
            CalcErrorKind::InvalidNumber,
            span,
            format!("invalid number {:?}", text.as_ref()),
        )
    }

    /// Creates a `MissingOperand` error.
    pub fn missing_operand(span: Option<Span>, operator: impl fmt::Display) -> Self {
        Self::new(
            CalcErrorKind::MissingOperand,
            span,
            format!("operator {operator} is missing an operand"),
        )
    }

    /// Creates an `UnbalancedOpenBracket` error.
    pub fn unbalanced_open_bracket(span: Option<Span>) -> Self {
        Self::new(
            CalcErrorKind::UnbalancedOpenBracket,
            span,
            "missing closing bracket",
        )
    }

    /// Creates an `UnbalancedCloseBracket` error.
    pub fn unbalanced_close_bracket(span: Option<Span>) -> Self {
        Self::new(
            CalcErrorKind::UnbalancedCloseBracket,
            span,
            "missing opening bracket",
        )
    }

    /// Creates a `NestingLimitExceeded` error.
    pub fn nesting_limit_exceeded(span: Option<Span>, limit: usize) -> Self {
        Self::new(
            CalcErrorKind::NestingLimitExceeded,
            span,
            format!("bracket nesting deeper than {limit}"),
        )
    }

    /// Creates a `NodeLimitExceeded` error.
    pub fn node_limit_exceeded(span: Option<Span>, limit: usize) -> Self {
        Self::new(
            CalcErrorKind::NodeLimitExceeded,
            span,
            format!("expression has more than {limit} nodes"),
        )
    }

    /// Creates a `DivisionByZero` error.
    pub fn division_by_zero() -> Self {
        Self::new(CalcErrorKind::DivisionByZero, None, "division by zero")
    }

    /// Creates an `ArgumentCountMismatch` error.
    pub fn argument_count_mismatch(expected: usize, supplied: usize) -> Self {
        Self::new(
            CalcErrorKind::ArgumentCountMismatch,
            None,
            format!("expression needs {expected} argument(s), {supplied} supplied"),
        )
    }

    /// Creates an `InvalidArgumentRecord` error.
    pub fn invalid_argument_record(message: impl Into<String>) -> Self {
        Self::new(CalcErrorKind::InvalidArgumentRecord, None, message)
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CalcError {}
