//! Library entrypoint for `tally`.
//!
//! The crate compiles infix arithmetic text into an immutable expression tree
//! in a single pass and evaluates it over exact decimals.

pub mod calculator;
pub mod compiler;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod number;

pub use calculator::Calculator;
pub use compiler::{CompileOptions, CompiledExpression, Compiler, compile};
pub use error::{CalcError, CalcErrorKind};
pub use eval::{Arguments, Evaluation, arguments_from, evaluate, evaluate_with_fallback};
pub use lexer::NumberFormat;
pub use number::Decimal;
