use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwimError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SwimError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SwimError::IoError(e) => format!("Could not read or write: {}", e),
            SwimError::TomlError(e) => format!("Roster file is not valid TOML: {}", e),
            SwimError::SerializationError(e) => format!("Failed to serialize output: {}", e),
            SwimError::ConfigError { message } => format!("Configuration problem: {}", message),
            SwimError::ValidationError { field, reason, .. } => {
                format!("Field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SwimError::IoError(_) => "Check that the file exists and stdout is writable",
            SwimError::TomlError(_) => "Fix the TOML syntax; every swimmer needs a `kind`",
            SwimError::SerializationError(_) => "Retry with --format text",
            SwimError::ConfigError { .. } => {
                "The ${VAR} substitution pattern failed to build; report this as a bug"
            }
            SwimError::ValidationError { .. } => {
                "Provide a non-empty name, or drop --strict to accept it verbatim"
            }
        }
    }

    /// 程式結束碼: 設定錯誤為 1, 系統錯誤為 3
    pub fn exit_code(&self) -> i32 {
        match self {
            SwimError::IoError(_) | SwimError::SerializationError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SwimError>;
