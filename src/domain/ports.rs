use crate::domain::model::{Operation, Outcome};
use crate::utils::error::Result;
use serde_json::{Number, Value};

/// Checks over untyped values. Every method validates its input first and
/// returns `ValidatorError::InvalidType` before computing anything.
pub trait NumberChecks: Send + Sync {
    fn is_number_even(&self, n: &Value) -> Result<bool>;
    fn is_integer(&self, n: &Value) -> Result<bool>;
    fn is_all_numbers(&self, arr: &Value) -> Result<bool>;
    fn get_even_numbers_from_array(&self, arr: &Value) -> Result<Vec<Number>>;

    fn run(&self, operation: Operation, input: &Value) -> Result<Outcome> {
        let outcome = match operation {
            Operation::IsNumberEven => Outcome::Bool(self.is_number_even(input)?),
            Operation::IsInteger => Outcome::Bool(self.is_integer(input)?),
            Operation::IsAllNumbers => Outcome::Bool(self.is_all_numbers(input)?),
            Operation::GetEvenNumbersFromArray => {
                Outcome::Numbers(self.get_even_numbers_from_array(input)?)
            }
        };
        Ok(outcome)
    }
}
