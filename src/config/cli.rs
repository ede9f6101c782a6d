use serde_json::Value;

/// Parses command-line input as JSON, falling back to a plain string.
pub fn parse_input(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(feature = "cli")]
mod validate {
    use crate::config::CliConfig;
    use crate::utils::error::{Result, ValidatorError};
    use crate::utils::validation::Validate;

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            match (&self.operation, &self.config) {
                (None, None) => Err(ValidatorError::config(
                    "arguments",
                    "pass --operation with --input, or --config",
                )),
                (Some(_), Some(_)) => Err(ValidatorError::config(
                    "arguments",
                    "--operation and --config cannot be combined",
                )),
                (Some(_), None) if self.input.is_none() => {
                    Err(ValidatorError::config("input", "--operation needs --input"))
                }
                (None, Some(path)) if path.trim().is_empty() => {
                    Err(ValidatorError::config("config", "path cannot be empty"))
                }
                _ => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_input_json() {
        assert_eq!(parse_input("4"), json!(4));
        assert_eq!(parse_input("2.5"), json!(2.5));
        assert_eq!(parse_input("\"4\""), json!("4"));
        assert_eq!(parse_input("[1, 2, \"3\", 4]"), json!([1, 2, "3", 4]));
        assert_eq!(parse_input("{\"a\": 1}"), json!({"a": 1}));
    }

    #[test]
    fn test_parse_input_falls_back_to_string() {
        assert_eq!(parse_input("two"), json!("two"));
        assert_eq!(parse_input("[1, 2"), json!("[1, 2"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_validation() {
        use crate::config::CliConfig;
        use crate::domain::model::Operation;
        use crate::utils::validation::Validate;
        use clap::Parser;

        let config =
            CliConfig::parse_from(["numbers-validator", "-o", "is-number-even", "-i", "4"]);
        assert_eq!(config.operation, Some(Operation::IsNumberEven));
        assert!(config.validate().is_ok());

        let config = CliConfig::parse_from(["numbers-validator", "--config", "checks.toml"]);
        assert!(config.validate().is_ok());

        let config = CliConfig::parse_from(["numbers-validator"]);
        assert!(config.validate().is_err());

        assert!(CliConfig::try_parse_from([
            "numbers-validator",
            "-o",
            "is-integer",
            "-i",
            "1",
            "-c",
            "checks.toml"
        ])
        .is_err());
    }
}
