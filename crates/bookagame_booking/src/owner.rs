// --- File: crates/bookagame_booking/src/owner.rs ---
//! Figures and views for the venue-owner screens.

use bookagame_common::models::{BookingStatus, DashboardStats, OwnerBooking, Venue, VenueStatus};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use crate::reconcile::starts_at;

/// Dashboard figures derived from the owner's bookings and venues.
///
/// Week earnings cover the ISO week containing `now` and skip cancelled
/// bookings. Pending bookings are confirmed ones that have not started.
pub fn dashboard_stats(bookings: &[OwnerBooking], venues: &[Venue], now: NaiveDateTime) -> DashboardStats {
    let today = now.date();
    let week = today.iso_week();

    let mut stats = DashboardStats {
        active_venues: venues
            .iter()
            .filter(|v| v.status == VenueStatus::Approved)
            .count() as u32,
        ..DashboardStats::default()
    };

    for entry in bookings {
        let booking = &entry.booking;
        if booking.status == BookingStatus::Cancelled {
            continue;
        }
        if booking.date == today {
            stats.today_bookings += 1;
        }
        if booking.date.iso_week() == week {
            stats.week_earnings += booking.final_price;
        }
        if booking.status == BookingStatus::Confirmed && starts_at(booking) > now {
            stats.pending_bookings += 1;
        }
    }
    stats
}

/// The date strip of the schedule screen: `days` dates starting at `today`.
pub fn schedule_days(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..u64::from(days))
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .collect()
}

/// Non-cancelled bookings on `date`, earliest first.
pub fn bookings_on(bookings: &[OwnerBooking], date: NaiveDate) -> Vec<&OwnerBooking> {
    let mut day: Vec<&OwnerBooking> = bookings
        .iter()
        .filter(|b| b.booking.date == date && b.booking.status != BookingStatus::Cancelled)
        .collect();
    day.sort_by_key(|b| b.booking.start_time);
    day
}

/// Total booked hours across `bookings`, for the schedule summary line.
pub fn booked_hours(bookings: &[&OwnerBooking]) -> f64 {
    bookings
        .iter()
        .map(|b| f64::from(b.booking.start_time.minutes_until(b.booking.end_time)) / 60.0)
        .sum()
}
