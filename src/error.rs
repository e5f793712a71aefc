//! Error handling module for resume-review
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Input and wizard errors are recoverable and never escape the wizard
//! controller; `ResumeReviewError` covers the application boundary (terminal,
//! configuration, report export).

use crate::wizard::WizardStep;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected user input. Reported synchronously, never changes wizard state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Resume text was empty or whitespace only
    #[error("Resume content is empty")]
    EmptyInput,

    /// Uploaded file was not a PDF or text file
    #[error("Unsupported file type '{declared_type}' (upload a PDF or text file)")]
    TypeRejected { declared_type: String },

    /// Target job role was empty or whitespace only
    #[error("Target job role is required")]
    MissingRole,
}

/// A file could not be read or decoded to text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The file could not be opened or read
    #[error("Could not read file {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// The file exceeds the configured upload limit
    #[error("File {path} is {size} bytes (limit is {limit} bytes)")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// The file content could not be decoded to text
    #[error("Could not decode file as text: {0}")]
    Decode(String),
}

/// Any failure while collecting resume input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Errors returned by wizard controller transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Read(#[from] ReadError),

    /// A processing operation is already in flight
    #[error("Still processing, please wait")]
    Busy,

    /// The action is not available from the current step
    #[error("Cannot {action} from step {step}")]
    WrongStep {
        action: &'static str,
        step: WizardStep,
    },
}

impl From<IntakeError> for WizardError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::Validation(e) => Self::Validation(e),
            IntakeError::Read(e) => Self::Read(e),
        }
    }
}

impl WizardError {
    /// Returns true for failures caused by what the user entered
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Read(_))
    }
}

/// Main error type for the application boundary
#[derive(Error, Debug)]
pub enum ResumeReviewError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wizard transition errors surfaced to the caller
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Analysis did not produce a report
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for resume-review operations
pub type Result<T> = std::result::Result<T, ResumeReviewError>;

impl ResumeReviewError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create an analysis error
    pub fn analysis(msg: impl Into<String>) -> Self {
        Self::Analysis(msg.into())
    }
}
