// --- File: crates/bookagame_api/src/lib.rs ---
//! Client for the Book a Game REST API.
//!
//! [`ApiClient`] attaches the stored bearer token to every request and, when
//! the API answers 401, refreshes the session once and replays the request.
//! Each endpoint decodes its response into one fixed schema; a body that does
//! not match surfaces as [`BookingError::Parse`].

pub mod auth;
pub mod backend;
pub mod bookings;
pub mod client;
pub mod envelope;
pub mod favorites;
pub mod owner;
pub mod reviews;
pub mod tokens;
pub mod venues;

pub use client::{ApiClient, ApiRequest};
pub use owner::OwnerApi;
pub use tokens::{token_store_from_config, FileTokenStore, MemoryTokenStore};

use bookagame_common::BookingError;

/// Human-readable message for an API failure, as shown to the user.
pub fn error_message(err: &BookingError) -> String {
    err.user_message()
}
