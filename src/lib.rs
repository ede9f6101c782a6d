pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::BatchConfig;
pub use crate::core::{
    batch::{BatchRunner, BatchSummary, CheckReport},
    numeric::Numeric,
    validator::NumbersValidator,
};
pub use crate::domain::{
    model::{Operation, Outcome, ValueType},
    ports::NumberChecks,
};
pub use crate::utils::error::{Result, ValidatorError};
