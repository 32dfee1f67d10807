//! Error types for the mathops_core library.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for mathops_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Operator token outside the supported set
    #[error("invalid operation: {0:?}")]
    InvalidOperation(String),

    /// Operand text that does not parse as a number
    #[error("malformed number: {0:?}")]
    MalformedNumber(String),

    /// Truncated operand or checked result outside the 32-bit signed range
    #[error("arithmetic overflow in 32-bit operation")]
    ArithmeticOverflow,

    /// Division with a divisor of exactly zero
    #[error("division by zero")]
    DivisionByZero,

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Classification of a failed operation, as reported to the user and
/// persisted to the error-event log
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidOperation,
    MalformedNumber,
    ArithmeticOverflow,
    DivisionByZero,
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidOperation => "invalid_operation",
            ErrorKind::MalformedNumber => "malformed_number",
            ErrorKind::ArithmeticOverflow => "arithmetic_overflow",
            ErrorKind::DivisionByZero => "division_by_zero",
            ErrorKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Classify this error. Anything outside the calculator taxonomy
    /// maps to `Unknown`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidOperation(_) => ErrorKind::InvalidOperation,
            Error::MalformedNumber(_) => ErrorKind::MalformedNumber,
            Error::ArithmeticOverflow => ErrorKind::ArithmeticOverflow,
            Error::DivisionByZero => ErrorKind::DivisionByZero,
            _ => ErrorKind::Unknown,
        }
    }

    /// Fixed user-facing message for this error's classification
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidOperation => "invalid operation",
            ErrorKind::MalformedNumber => "invalid number input",
            ErrorKind::ArithmeticOverflow => "number too large or too small",
            ErrorKind::DivisionByZero => "division by zero is not allowed",
            ErrorKind::Unknown => "unknown error",
        }
    }
}
