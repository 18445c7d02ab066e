//! Record-to-arguments conversion.
//!
//! Any `Serialize` value shaped like a struct or map becomes an [`Arguments`]
//! mapping of its numeric fields, in field declaration order.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::CalcError;
use crate::eval::arguments::Arguments;
use crate::number::Decimal;

/// Collects the numeric fields of `record`.
///
/// Non-numeric fields are skipped. A unit value or `None` yields an empty
/// mapping.
pub fn arguments_from<T: Serialize + ?Sized>(record: &T) -> Result<Arguments, CalcError> {
    let value = serde_json::to_value(record)
        .map_err(|error| CalcError::invalid_argument_record(error.to_string()))?;

    match value {
        Value::Null => Ok(Arguments::new()),
        Value::Object(fields) => {
            let mut arguments = Arguments::new();
            for (name, field) in fields {
                if let Value::Number(number) = field {
                    arguments.insert(name, decimal_from_json(&number)?);
                }
            }
            Ok(arguments)
        }
        other => Err(CalcError::invalid_argument_record(format!(
            "expected a struct or map, found {}",
            describe(&other)
        ))),
    }
}

fn decimal_from_json(number: &Number) -> Result<Decimal, CalcError> {
    if let Some(value) = number.as_i64() {
        return Ok(Decimal::from(value));
    }
    if let Some(value) = number.as_u64() {
        return Ok(Decimal::from(value));
    }
    match number.as_f64() {
        Some(value) => Decimal::try_from(value),
        None => Err(CalcError::invalid_number(None, number.to_string())),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a map",
    }
}
