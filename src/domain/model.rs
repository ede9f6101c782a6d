use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// One of the validator operations, under its public camelCase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    IsNumberEven,
    IsInteger,
    IsAllNumbers,
    GetEvenNumbersFromArray,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::IsNumberEven,
        Operation::IsInteger,
        Operation::IsAllNumbers,
        Operation::GetEvenNumbersFromArray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::IsNumberEven => "isNumberEven",
            Operation::IsInteger => "isInteger",
            Operation::IsAllNumbers => "isAllNumbers",
            Operation::GetEvenNumbersFromArray => "getEvenNumbersFromArray",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of running an [`Operation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Bool(bool),
    Numbers(Vec<Number>),
}

impl Outcome {
    pub fn to_value(&self) -> Value {
        match self {
            Outcome::Bool(b) => Value::Bool(*b),
            Outcome::Numbers(numbers) => {
                Value::Array(numbers.iter().cloned().map(Value::Number).collect())
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

/// `typeof` name of an untyped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Number,
    String,
    Boolean,
    Object,
}

impl ValueType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Bool(_) => ValueType::Boolean,
            Value::Null | Value::Array(_) | Value::Object(_) => ValueType::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
