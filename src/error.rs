//! Error handling for the promptable crate
//!
//! Defines the application error taxonomy with thiserror. The one unusual
//! resident is [`AppError::ConfirmationPending`]: the halting signal raised by
//! a business action that just opened a confirmation prompt. It is not a
//! fault; the host dispatch loop suppresses it and every other variant
//! propagates normally.

use thiserror::Error;

/// Application result type alias
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Main application error enum
#[derive(Error, Debug)]
pub enum AppError {
    /// Halting signal: a confirmation prompt was opened and the calling
    /// action must abort until the user responds. Suppressed at the
    /// dispatch point, never shown as a fault.
    #[error("confirmation pending: {question}")]
    ConfirmationPending { question: String },

    /// I/O operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parse errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Terminal/UI operation errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Application state errors
    #[error("State error: {message}")]
    State { message: String },

    /// Generic application errors
    #[error("Application error: {message}")]
    Application { message: String },
}

impl AppError {
    /// Create the halting signal for a prompt that was just opened
    pub fn confirmation_pending<S: Into<String>>(question: S) -> Self {
        Self::ConfirmationPending {
            question: question.into(),
        }
    }

    /// Create a new State error
    pub fn state<S: Into<String>>(message: S) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Create a new Application error
    pub fn application<S: Into<String>>(message: S) -> Self {
        Self::Application {
            message: message.into(),
        }
    }

    /// True only for the halting signal. The interception hook uses this to
    /// decide whether to suppress an error, so it must never match a genuine
    /// fault.
    pub fn is_confirmation_pending(&self) -> bool {
        matches!(self, AppError::ConfirmationPending { .. })
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::ConfirmationPending { .. } => true,
            AppError::Io(_) => false,
            AppError::Config(_) => false,
            AppError::Terminal(_) => false,
            AppError::State { .. } => true,
            AppError::Application { .. } => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::ConfirmationPending { .. } => ErrorSeverity::Low,
            AppError::Io(_) => ErrorSeverity::High,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Terminal(_) => ErrorSeverity::High,
            AppError::State { .. } => ErrorSeverity::Medium,
            AppError::Application { .. } => ErrorSeverity::Medium,
        }
    }
}

/// Error severity levels for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Convert severity to string for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSeverity::Low => "LOW",
            ErrorSeverity::Medium => "MEDIUM",
            ErrorSeverity::High => "HIGH",
            ErrorSeverity::Critical => "CRITICAL",
        }
    }
}
