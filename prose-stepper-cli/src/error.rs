//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// A step script token that could not be parsed
    InvalidStep(String),
    /// Input without a single word to step through
    EmptyInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidStep(token) => write!(
                f,
                "Invalid step '{token}': expected s/w/f/j followed by a signed number, or '.'"
            ),
            CliError::EmptyInput(source) => write!(f, "No words to step through in {source}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_invalid_step_display() {
        let error = CliError::InvalidStep("x+1".to_string());
        assert!(error.to_string().starts_with("Invalid step 'x+1'"));
    }

    #[test]
    fn test_empty_input_display() {
        let error = CliError::EmptyInput("notes.txt".to_string());
        assert_eq!(error.to_string(), "No words to step through in notes.txt");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::InvalidStep(".5".into()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
