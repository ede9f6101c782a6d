use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Input had the wrong type or shape. Displays as the bare message.
    #[error("{message}")]
    InvalidType { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl ValidatorError {
    pub fn invalid_type(message: impl Into<String>) -> Self {
        Self::InvalidType {
            message: message.into(),
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_invalid_type(&self) -> bool {
        matches!(self, Self::InvalidType { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidType { message } => format!("Invalid input: {}", message),
            Self::IoError(e) => format!("Could not read file: {}", e),
            Self::SerializationError(e) => format!("Could not encode result: {}", e),
            Self::TomlError(e) => format!("Batch file is not valid TOML: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Batch file field '{}' is invalid: {}", field, message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
