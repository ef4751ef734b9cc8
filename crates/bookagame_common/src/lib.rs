// --- File: crates/bookagame_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error handling
pub mod guard;    // In-flight action guards
pub mod http;     // HTTP utilities
pub mod logging;  // Logging utilities
pub mod models;   // Data structures and models
pub mod services; // Service abstractions
pub mod time;     // Wall-clock time of day
#[cfg(test)]
mod time_test;

// Re-export error types and utilities for easier access
pub use error::{
    BookingError,
    HttpStatusCode,
    Context,
    validation_error,
    parse_error,
    storage_error,
    internal_error,
    GENERIC_ERROR_MESSAGE,
};

pub use guard::{InFlight, InFlightToken};

pub use http::client::create_client;

// Re-export logging utilities for easier access
pub use logging::{init_with_level, log_error};

pub use time::ClockTime;
