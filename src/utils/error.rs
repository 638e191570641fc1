use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Order not found: {id}")]
    NotFound { id: u64 },

    #[error("Cannot move order {id} to index {index}: list has {len} orders")]
    IndexOutOfRange { id: u64, index: i64, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Cannot parse action '{input}': {reason}")]
    ActionParseError { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Mutation,
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OrderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OrderError::NotFound { .. } => ErrorCategory::Lookup,
            OrderError::IndexOutOfRange { .. } => ErrorCategory::Mutation,
            OrderError::ConfigError { .. }
            | OrderError::InvalidConfigValueError { .. }
            | OrderError::TomlError(_) => ErrorCategory::Configuration,
            OrderError::ValidationError { .. } | OrderError::ActionParseError { .. } => {
                ErrorCategory::Input
            }
            OrderError::IoError(_)
            | OrderError::SerializationError(_)
            | OrderError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 找不到或越界的操作不會改變狀態
            OrderError::NotFound { .. } | OrderError::IndexOutOfRange { .. } => ErrorSeverity::Low,
            OrderError::ValidationError { .. } | OrderError::ActionParseError { .. } => {
                ErrorSeverity::Medium
            }
            OrderError::ConfigError { .. }
            | OrderError::InvalidConfigValueError { .. }
            | OrderError::TomlError(_)
            | OrderError::SerializationError(_)
            | OrderError::CsvError(_) => ErrorSeverity::High,
            OrderError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            OrderError::NotFound { id } => {
                format!("Order {} may have been removed; refresh the list", id)
            }
            OrderError::IndexOutOfRange { .. } => {
                "The order is already at the edge of the list; move it the other way".to_string()
            }
            OrderError::ConfigError { .. } | OrderError::TomlError(_) => {
                "Check the TOML configuration file syntax and required sections".to_string()
            }
            OrderError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            OrderError::ValidationError { .. } => {
                "Make sure every order id is unique within a list".to_string()
            }
            OrderError::ActionParseError { .. } => {
                "Use show:ID, like:ID, remove:ID, up:ID, down:ID or move:ID:BY".to_string()
            }
            OrderError::IoError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
            OrderError::SerializationError(_) | OrderError::CsvError(_) => {
                "Try a different export format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Lookup => format!("Order lookup failed: {}", self),
            ErrorCategory::Mutation => format!("Order update rejected: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Output => format!("Could not write output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
