use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown login scenario: {name}")]
    UnknownScenarioError { name: String },
}

/// 錯誤分類，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
}

impl PlaygroundError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlaygroundError::IoError(_) | PlaygroundError::SerializationError(_) => {
                ErrorCategory::Output
            }
            PlaygroundError::ConfigValidationError { .. }
            | PlaygroundError::MissingConfigError { .. }
            | PlaygroundError::InvalidConfigValueError { .. }
            | PlaygroundError::UnknownScenarioError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Output => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlaygroundError::IoError(e) => format!("Could not write playground output: {}", e),
            PlaygroundError::SerializationError(e) => {
                format!("Could not render playground output: {}", e)
            }
            PlaygroundError::ConfigValidationError { field, message } => {
                format!("The scenario file is invalid ({}): {}", field, message)
            }
            PlaygroundError::MissingConfigError { field } => {
                format!("The scenario file is missing '{}'", field)
            }
            PlaygroundError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            PlaygroundError::UnknownScenarioError { name } => {
                format!("There is no login scenario named '{}'", name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlaygroundError::IoError(_) | PlaygroundError::SerializationError(_) => {
                "Check that standard output is writable (e.g. the pipe is not closed)"
            }
            PlaygroundError::ConfigValidationError { .. } => {
                "Make sure the file exists and is valid TOML format"
            }
            PlaygroundError::MissingConfigError { .. }
            | PlaygroundError::InvalidConfigValueError { .. } => {
                "Fix the highlighted field in the scenario file and run again"
            }
            PlaygroundError::UnknownScenarioError { .. } => {
                "Pick one of the names listed under [[login.scenarios]]"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
