//! Error types for the stepper

use thiserror::Error;

/// Error type for stepper operations
///
/// `MissingArgument` and `WrongShape` are precondition failures: they are
/// raised before any position is touched, so a failed call leaves the
/// cursor exactly where it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepperError {
    /// A required input was absent
    #[error("Was expecting {expected}. Received: nothing")]
    MissingArgument {
        /// Description of the accepted input
        expected: &'static str,
    },

    /// An input was present but structurally invalid
    #[error("Was expecting {expected}. Received: {received}")]
    WrongShape {
        /// Description of the accepted input
        expected: &'static str,
        /// Short description of what was actually passed
        received: String,
    },

    /// Navigation was requested before any collection was processed
    #[error("No sentences have been processed yet")]
    NotProcessed,

    /// Configuration text could not be parsed
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StepperError {
    pub(crate) fn wrong_shape(expected: &'static str, received: impl Into<String>) -> Self {
        StepperError::WrongShape {
            expected,
            received: received.into(),
        }
    }

    /// True for the "input absent" kind
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, StepperError::MissingArgument { .. })
    }

    /// True for the "wrong type or shape" kind
    pub fn is_wrong_shape(&self) -> bool {
        matches!(self, StepperError::WrongShape { .. })
    }
}

/// Result type for stepper operations
pub type Result<T> = std::result::Result<T, StepperError>;
