// --- File: crates/bookagame_common/src/services.rs ---
//! Service abstractions.
//!
//! These traits decouple the booking flows and the session from the concrete
//! HTTP client and token storage, so either side can be swapped for a test
//! double.

use chrono::NaiveDate;
use std::future::Future;
use std::pin::Pin;

use crate::error::BookingError;
use crate::models::{
    BlockedSlot, BlockedSlotRequest, Booking, CreateBookingRequest, OwnerBooking,
    SessionTokens, TimeSlot, WalkInRequest,
};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Persistent storage for the bearer tokens.
///
/// Reads never fail: an unreadable store behaves like an empty one, so a
/// corrupted file simply means "logged out".
pub trait TokenStore: Send + Sync {
    /// Current access token, if any.
    fn access_token(&self) -> BoxFuture<'_, Option<String>, BookingError>;

    /// Current refresh token, if any.
    fn refresh_token(&self) -> BoxFuture<'_, Option<String>, BookingError>;

    /// Replace both tokens.
    fn set_tokens(&self, tokens: SessionTokens) -> BoxFuture<'_, (), BookingError>;

    /// Forget both tokens.
    fn clear_tokens(&self) -> BoxFuture<'_, (), BookingError>;
}

/// The slice of the remote API the booking flows depend on.
pub trait BookingBackend: Send + Sync {
    /// Slots of one court on one date, sorted by start time.
    fn court_slots(&self, court_id: &str, date: NaiveDate)
        -> BoxFuture<'_, Vec<TimeSlot>, BookingError>;

    /// Book a court for a player.
    fn create_booking(&self, request: CreateBookingRequest) -> BoxFuture<'_, Booking, BookingError>;

    /// Book a court on behalf of a walk-in guest.
    fn create_walk_in(&self, request: WalkInRequest) -> BoxFuture<'_, OwnerBooking, BookingError>;

    /// Mark a time range of a court as unavailable.
    fn create_blocked_slot(
        &self,
        court_id: &str,
        request: BlockedSlotRequest,
    ) -> BoxFuture<'_, BlockedSlot, BookingError>;
}
