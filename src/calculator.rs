//! One-call compile-and-evaluate entry point.

use serde::Serialize;

use crate::compiler::{CompileOptions, Compiler};
use crate::error::CalcError;
use crate::eval::{Arguments, arguments_from, evaluate};
use crate::number::Decimal;

/// Compiles and evaluates expressions with one reusable [`Compiler`].
#[derive(Debug, Default)]
pub struct Calculator {
    compiler: Compiler,
}

impl Calculator {
    /// Creates a calculator with explicit compile options.
    pub fn new(options: CompileOptions) -> Self {
        Self {
            compiler: Compiler::new(options),
        }
    }

    /// Returns the active compile options.
    pub fn options(&self) -> &CompileOptions {
        self.compiler.options()
    }

    /// Computes `text` with variables bound from `arguments`.
    pub fn result(&mut self, text: &str, arguments: &Arguments) -> Result<Decimal, CalcError> {
        let compiled = self.compiler.compile(text)?;
        evaluate(&compiled, arguments)
    }

    /// Computes `text` with variables taken from the numeric fields of
    /// `record`.
    pub fn result_for<T: Serialize + ?Sized>(
        &mut self,
        text: &str,
        record: &T,
    ) -> Result<Decimal, CalcError> {
        let arguments = arguments_from(record)?;
        self.result(text, &arguments)
    }
}
