// --- File: crates/bookagame_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// Fallback text when neither the server nor the transport gave a reason.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// The error type shared by every Book a Game crate.
///
/// Each crate converts its own failures into one of these variants, so a caller
/// only ever has to triage a single enum.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Transport-level failure (connection refused, TLS, DNS, ...)
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The API rejected the credentials and no refresh was possible
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A response body did not match the expected schema
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// User input was rejected before anything was sent
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// The same action is already running
    #[error("{0} is already in progress")]
    InProgress(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookingError {
    /// Normalizes an error into the message shown to the user.
    ///
    /// Server-provided messages win, then the transport error text, then a
    /// generic fallback.
    pub fn user_message(&self) -> String {
        let message = match self {
            BookingError::Api { message, .. } | BookingError::Unauthorized { message } => {
                message.as_str()
            }
            BookingError::Http(message)
            | BookingError::Timeout(message)
            | BookingError::Validation(message) => message.as_str(),
            other => return other.to_string(),
        };
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message.to_string()
        }
    }

    /// True for a 401 from the API.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, BookingError::Unauthorized { .. })
    }
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for BookingError {
    fn status_code(&self) -> u16 {
        match self {
            BookingError::Http(_) => 503,
            BookingError::Timeout(_) => 504,
            BookingError::Unauthorized { .. } => 401,
            BookingError::Api { status, .. } => *status,
            BookingError::Parse(_) => 502,
            BookingError::Validation(_) => 400,
            BookingError::Config(_) => 500,
            BookingError::Storage(_) => 500,
            BookingError::InProgress(_) => 409,
            BookingError::Internal(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, BookingError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, BookingError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, BookingError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| BookingError::Internal(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, BookingError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| BookingError::Internal(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for BookingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BookingError::Timeout(err.to_string())
        } else if err.is_decode() {
            BookingError::Parse(err.to_string())
        } else {
            BookingError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BookingError {
    fn from(err: serde_json::Error) -> Self {
        BookingError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for BookingError {
    fn from(err: std::io::Error) -> Self {
        BookingError::Storage(err.to_string())
    }
}

impl From<bookagame_config::ConfigError> for BookingError {
    fn from(err: bookagame_config::ConfigError) -> Self {
        BookingError::Config(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::Validation(message.to_string())
}

pub fn parse_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::Parse(message.to_string())
}

pub fn storage_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::Storage(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::Internal(message.to_string())
}
