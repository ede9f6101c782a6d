pub mod batch;
pub mod numeric;
pub mod render;
pub mod validator;

pub use crate::domain::model::{Operation, Outcome, ValueType};
pub use crate::domain::ports::NumberChecks;
pub use crate::utils::error::Result;
