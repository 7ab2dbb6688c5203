use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown pattern: {name}")]
    UnknownPattern { name: String },

    #[error("Unsupported {kind}: {name}")]
    UnsupportedVariant { kind: String, name: String },

    #[error("No service registered for {name}")]
    MissingService { name: String },

    #[error("Build failed: {message}")]
    BuildError { message: String },

    #[error("Demo '{pattern}' failed: {message}")]
    DemoFailed { pattern: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PatternError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PatternError::UnsupportedVariant { .. } => ErrorSeverity::Low,
            PatternError::BuildError { .. }
            | PatternError::MissingService { .. }
            | PatternError::DemoFailed { .. } => {
                ErrorSeverity::Medium
            }
            PatternError::ConfigValidationError { .. }
            | PatternError::InvalidConfigValueError { .. }
            | PatternError::UnknownPattern { .. }
            | PatternError::SerializationError(_) => ErrorSeverity::High,
            PatternError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a failed run. Low severity counts as success.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PatternError::IoError(e) => format!("Could not read or write a file: {}", e),
            PatternError::SerializationError(e) => format!("Could not serialize a value: {}", e),
            PatternError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            PatternError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has invalid value '{}': {}", field, value, reason)
            }
            PatternError::UnknownPattern { name } => format!("There is no pattern named '{}'", name),
            PatternError::UnsupportedVariant { kind, name } => {
                format!("'{}' is not a supported {}", name, kind)
            }
            PatternError::MissingService { name } => {
                format!("Nothing was registered to provide {}", name)
            }
            PatternError::BuildError { message } => format!("Could not build object: {}", message),
            PatternError::DemoFailed { pattern, message } => {
                format!("The {} demo failed: {}", pattern, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PatternError::IoError(_) => "Check that the file exists and is readable",
            PatternError::SerializationError(_) => "Check the values being serialized",
            PatternError::ConfigValidationError { .. } => "Fix the configuration file and try again",
            PatternError::InvalidConfigValueError { .. } => "Use a value within the allowed range",
            PatternError::UnknownPattern { .. } => "Run with --list to see the available patterns",
            PatternError::UnsupportedVariant { .. } => "Pick one of the supported variants",
            PatternError::MissingService { .. } => "Register the service before resolving it",
            PatternError::BuildError { .. } => "Provide every required part before building",
            PatternError::DemoFailed { .. } => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
