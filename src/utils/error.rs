use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Benchmark '{benchmark}' failed: {message}")]
    ExecutionError { benchmark: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Execution,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity; 0 means
    /// the run carries on.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl BenchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BenchError::IoError(_) => ErrorCategory::Io,
            BenchError::SerializationError(_) => ErrorCategory::Serialization,
            BenchError::ConfigError { .. }
            | BenchError::ConfigValidationError { .. }
            | BenchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BenchError::ExecutionError { .. } => ErrorCategory::Execution,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Execution => ErrorSeverity::High,
            // console or report file unusable
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BenchError::IoError(_) => "Check that stdout and the report output path are writable",
            BenchError::SerializationError(_) => "Retry with --format text",
            BenchError::ConfigError { .. } | BenchError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            BenchError::InvalidConfigValueError { .. } => {
                "Adjust the reported value or remove it to use the default"
            }
            BenchError::ExecutionError { .. } => {
                "Run with --verbose to see the calibration rounds"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BenchError::IoError(e) => format!("Could not write benchmark output: {}", e),
            BenchError::SerializationError(e) => format!("Could not encode the report: {}", e),
            BenchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
