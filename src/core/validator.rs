use crate::core::numeric::{number_is_even, number_is_whole, Numeric};
use crate::core::render::render_value;
use crate::domain::model::ValueType;
use crate::domain::ports::NumberChecks;
use crate::utils::error::{Result, ValidatorError};
use serde_json::{Number, Value};

/// Stateless numeric validator.
///
/// The `NumberChecks` methods accept untyped values and reject anything of
/// the wrong shape with `ValidatorError::InvalidType`. Numeric-looking
/// strings are never coerced. Typed callers can use [`NumbersValidator::even_numbers`]
/// and the [`Numeric`] trait directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumbersValidator;

impl NumbersValidator {
    pub fn new() -> Self {
        Self
    }

    /// Even elements of a typed slice, in order.
    pub fn even_numbers<N: Numeric>(&self, numbers: &[N]) -> Vec<N> {
        numbers.iter().copied().filter(|n| n.is_even()).collect()
    }

    fn expect_number<'a>(
        &self,
        value: &'a Value,
        message: impl FnOnce() -> String,
    ) -> Result<&'a Number> {
        match value {
            Value::Number(n) => Ok(n),
            _ => {
                let message = message();
                tracing::debug!("Rejected input: {}", message);
                Err(ValidatorError::invalid_type(message))
            }
        }
    }
}

impl NumberChecks for NumbersValidator {
    fn is_number_even(&self, n: &Value) -> Result<bool> {
        let number = self.expect_number(n, || {
            format!(
                "[{}] is not of type \"Number\" it is of type \"{}\"",
                render_value(n),
                ValueType::of(n)
            )
        })?;
        Ok(number_is_even(number))
    }

    fn is_integer(&self, n: &Value) -> Result<bool> {
        let number = self.expect_number(n, || format!("[{}] is not a number", render_value(n)))?;
        Ok(number_is_whole(number))
    }

    fn is_all_numbers(&self, arr: &Value) -> Result<bool> {
        let Value::Array(items) = arr else {
            let message = format!("[{}] is not an array", render_value(arr));
            tracing::debug!("Rejected input: {}", message);
            return Err(ValidatorError::invalid_type(message));
        };
        Ok(items.iter().all(Value::is_number))
    }

    fn get_even_numbers_from_array(&self, arr: &Value) -> Result<Vec<Number>> {
        // Not-an-array and not-all-numbers share one message.
        let numbers: Option<Vec<&Number>> = match arr {
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Number(n) => Some(n),
                    _ => None,
                })
                .collect(),
            _ => None,
        };
        let Some(numbers) = numbers else {
            let message = format!("[{}] is not an array of \"Numbers\"", render_value(arr));
            tracing::debug!("Rejected input: {}", message);
            return Err(ValidatorError::invalid_type(message));
        };

        let evens: Vec<Number> = numbers
            .into_iter()
            .filter(|n| number_is_even(n))
            .cloned()
            .collect();
        tracing::debug!("Kept {} even numbers", evens.len());
        Ok(evens)
    }
}
