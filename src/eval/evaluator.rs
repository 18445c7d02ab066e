//! Binds argument mappings to positional slots and runs compiled expressions.

use log::warn;

use crate::compiler::CompiledExpression;
use crate::error::{CalcError, CalcErrorKind};
use crate::eval::arguments::Arguments;
use crate::number::Decimal;

/// Result of an evaluation that may have recovered from an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Computed or fallback value.
    pub value: Decimal,
    /// The recovered error, when `value` is the fallback.
    pub warning: Option<CalcError>,
}

/// Evaluates `compiled` with `arguments` bound positionally.
///
/// The *i*-th argument in mapping order fills slot *i*; names are not
/// consulted. Surplus arguments are ignored.
pub fn evaluate(
    compiled: &CompiledExpression,
    arguments: &Arguments,
) -> Result<Decimal, CalcError> {
    let values = bind(compiled, arguments)?;
    compiled.evaluate(&values)
}

/// Like [`evaluate`], but a division by zero yields `fallback` and is
/// reported through [`Evaluation::warning`]. Other errors propagate.
pub fn evaluate_with_fallback(
    compiled: &CompiledExpression,
    arguments: &Arguments,
    fallback: Decimal,
) -> Result<Evaluation, CalcError> {
    match evaluate(compiled, arguments) {
        Ok(value) => Ok(Evaluation {
            value,
            warning: None,
        }),
        Err(error) if error.kind == CalcErrorKind::DivisionByZero => {
            warn!("{error}; using fallback {fallback}");
            Ok(Evaluation {
                value: fallback,
                warning: Some(error),
            })
        }
        Err(error) => Err(error),
    }
}

fn bind(
    compiled: &CompiledExpression,
    arguments: &Arguments,
) -> Result<Vec<Decimal>, CalcError> {
    if arguments.len() < compiled.arity() {
        return Err(CalcError::argument_count_mismatch(
            compiled.arity(),
            arguments.len(),
        ));
    }

    let bound = arguments.iter().zip(compiled.parameters()).enumerate();
    for (slot, ((name, _), expected)) in bound {
        if name != expected.to_string() {
            warn!("slot {slot} ('{expected}') is bound to argument {name:?} by position");
        }
    }

    Ok(arguments.values().cloned().collect())
}
