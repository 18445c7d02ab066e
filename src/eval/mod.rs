//! Evaluation of compiled expressions.

pub mod adapter;
pub mod arguments;
pub mod evaluator;

pub use adapter::arguments_from;
pub use arguments::Arguments;
pub use evaluator::{Evaluation, evaluate, evaluate_with_fallback};
