//! Unified error hierarchy for fitstat
//!
//! Provides structured error types for packet decoding and statistic
//! calculation, with severity mapping into the tracing system.

use thiserror::Error;

/// Top-level error type for all fitstat operations
#[derive(Debug, Error)]
pub enum FitstatError {
    /// Sensor packet decoding errors
    #[error("Packet error: {0}")]
    Packet(#[from] PacketError),

    /// Statistic calculation errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Sensor packet decoding errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PacketError {
    /// Type code not in the factory's mapping
    #[error("Unrecognized workout type: {code}")]
    UnknownWorkoutType { code: String },

    /// Field count does not match the workout's constructor arity
    #[error("Wrong field count for {workout}: expected {expected}, got {actual}")]
    FieldCount {
        workout: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Field value fails type or range validation
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

/// Statistic calculation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// A workout kind did not override a required operation
    #[error("{operation} is not implemented for {workout}")]
    UnimplementedOperation {
        workout: &'static str,
        operation: &'static str,
    },
}

/// Result type alias for fitstat operations
pub type Result<T> = std::result::Result<T, FitstatError>;

impl FitstatError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitstatError::Packet(_) => ErrorSeverity::Warning,
            FitstatError::Configuration(_) => ErrorSeverity::Error,
            FitstatError::Io(_) => ErrorSeverity::Error,
            // Reachable only through a workout impl that forgot an override
            FitstatError::Calculation(_) => ErrorSeverity::Critical,
            FitstatError::Internal(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitstatError::Packet(PacketError::UnknownWorkoutType { code }) => {
                format!(
                    "Unrecognized workout type '{}'. Supported codes are RUN, WLK and SWM.",
                    code
                )
            }
            FitstatError::Packet(PacketError::FieldCount {
                workout,
                expected,
                actual,
            }) => {
                format!(
                    "A {} packet carries {} sensor fields, but {} were supplied.",
                    workout, expected, actual
                )
            }
            FitstatError::Configuration(reason) => {
                format!("Configuration problem: {}", reason)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
    /// Informational message
    Info,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
            ErrorSeverity::Info => tracing::Level::INFO,
        }
    }
}
