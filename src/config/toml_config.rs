use crate::domain::model::Operation;
use crate::utils::error::{Result, ValidatorError};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_unique_names, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A batch of checks loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchSection,
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSection {
    pub name: String,
    pub description: Option<String>,
    pub fail_fast: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub name: String,
    pub operation: Operation,
    pub input: serde_json::Value,
    pub expected: Option<serde_json::Value>,
    pub expected_error: Option<String>,
}

impl BatchConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ValidatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(ValidatorError::TomlError)
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ValidatorError::config("environment", e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;
        validate_non_empty_list("checks", &self.checks)?;

        for (i, check) in self.checks.iter().enumerate() {
            validate_non_empty_string(&format!("checks[{}].name", i), &check.name)?;

            if check.expected.is_some() && check.expected_error.is_some() {
                return Err(ValidatorError::config(
                    format!("checks[{}]", i),
                    "set either `expected` or `expected_error`, not both",
                ));
            }
        }

        validate_unique_names("checks", self.checks.iter().map(|c| c.name.as_str()))
    }

    pub fn fail_fast(&self) -> bool {
        self.batch.fail_fast.unwrap_or(false)
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
