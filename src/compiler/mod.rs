//! Expression compiler: operator table, expression tree, and the single-pass
//! shunting-yard compiler that builds it.

pub mod compiler;
pub mod expr;
pub mod operator;

pub use compiler::{CompileOptions, Compiler, compile};
pub use expr::{CompiledExpression, Expr};
pub use operator::Operator;
