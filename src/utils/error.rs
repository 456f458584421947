use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptUiError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No prompt text was provided")]
    MissingInputError,

    #[error("Unknown component kind: {kind}")]
    UnknownComponentKind { kind: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PromptUiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::UnknownComponentKind { .. } => ErrorCategory::Data,
            Self::TomlError(_) | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::MissingInputError => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingInputError => ErrorSeverity::Low,
            Self::UnknownComponentKind { .. } => ErrorSeverity::Medium,
            Self::SerializationError(_)
            | Self::TomlError(_)
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Data => "Make sure the descriptor file is a JSON array of {kind, properties} objects",
            ErrorCategory::Configuration => "Fix the configuration file or remove it to use the defaults",
            ErrorCategory::Input => "Pass the prompt as an argument, with --file, or on stdin",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::SerializationError(e) => format!("Could not process descriptor JSON: {}", e),
            Self::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {} ({})", value, field, reason)
            }
            Self::MissingInputError => "This command does not take a prompt".to_string(),
            Self::UnknownComponentKind { kind } => {
                format!("'{}' is not a known component kind", kind)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PromptUiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering_drives_exit_codes() {
        assert!(PromptUiError::MissingInputError.severity() < ErrorSeverity::High);
        let io = PromptUiError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_user_friendly_message_mentions_field() {
        let err = PromptUiError::InvalidConfigValueError {
            field: "code.component_name".to_string(),
            value: "lower".to_string(),
            reason: "must start with an uppercase letter".to_string(),
        };
        assert!(err.user_friendly_message().contains("code.component_name"));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
