// --- File: crates/bookagame_booking/src/reconcile.rs ---
//! Classification of a player's bookings against the current time.

use bookagame_common::models::{Booking, BookingQuery, BookingStatus};
use chrono::NaiveDateTime;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use bookagame_common::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingFilter {
    Upcoming,
    Past,
    Cancelled,
}

impl BookingFilter {
    pub const ALL: [BookingFilter; 3] = [
        BookingFilter::Upcoming,
        BookingFilter::Past,
        BookingFilter::Cancelled,
    ];

    /// Server-side narrowing for `GET /bookings`.
    pub fn query(&self) -> BookingQuery {
        match self {
            BookingFilter::Upcoming => BookingQuery {
                status: Some(BookingStatus::Confirmed),
                upcoming: Some(true),
            },
            BookingFilter::Past => BookingQuery {
                status: None,
                upcoming: Some(false),
            },
            BookingFilter::Cancelled => BookingQuery {
                status: Some(BookingStatus::Cancelled),
                upcoming: None,
            },
        }
    }

    /// Text shown when the list is empty.
    pub fn empty_hint(&self) -> &'static str {
        match self {
            BookingFilter::Upcoming => "Book a court to see your upcoming sessions here",
            BookingFilter::Past => "Your completed bookings will appear here",
            BookingFilter::Cancelled => "Cancelled bookings will appear here",
        }
    }
}

impl fmt::Display for BookingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingFilter::Upcoming => "upcoming",
            BookingFilter::Past => "past",
            BookingFilter::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

impl FromStr for BookingFilter {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(BookingFilter::Upcoming),
            "past" => Ok(BookingFilter::Past),
            "cancelled" | "canceled" => Ok(BookingFilter::Cancelled),
            other => Err(BookingError::Validation(format!(
                "Unknown booking filter '{}'",
                other
            ))),
        }
    }
}

/// Date and start time of the booking as one local timestamp.
pub fn starts_at(booking: &Booking) -> NaiveDateTime {
    booking.date.and_time(booking.start_time.as_naive())
}

/// Which tab a booking belongs to at `now`.
///
/// Confirmed bookings move to `Past` once they have started.
pub fn classify(booking: &Booking, now: NaiveDateTime) -> BookingFilter {
    match booking.status {
        BookingStatus::Cancelled => BookingFilter::Cancelled,
        BookingStatus::Completed => BookingFilter::Past,
        BookingStatus::Confirmed if starts_at(booking) > now => BookingFilter::Upcoming,
        BookingStatus::Confirmed => BookingFilter::Past,
    }
}

/// Only confirmed bookings that have not started yet can be cancelled.
pub fn can_cancel(booking: &Booking, now: NaiveDateTime) -> bool {
    booking.status == BookingStatus::Confirmed && starts_at(booking) > now
}

pub fn can_review(booking: &Booking) -> bool {
    booking.status == BookingStatus::Completed
}

/// Bookings of one tab: upcoming soonest first, the others most recent first.
pub fn filter_bookings(bookings: &[Booking], filter: BookingFilter, now: NaiveDateTime) -> Vec<Booking> {
    let mut selected: Vec<Booking> = bookings
        .iter()
        .filter(|b| classify(b, now) == filter)
        .cloned()
        .collect();
    match filter {
        BookingFilter::Upcoming => selected.sort_by_key(starts_at),
        BookingFilter::Past | BookingFilter::Cancelled => selected.sort_by_key(|b| Reverse(starts_at(b))),
    }
    selected
}
