// --- File: crates/services/bookagame_cli/src/output.rs ---
//! Rendering of command results on stdout.

use bookagame_common::models::{Booking, OwnerBooking, SlotRange, SlotStatus, TimeSlot};
use bookagame_common::{BookingError, ClockTime};
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), BookingError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn slot_line(slot: &TimeSlot, selected: bool) -> String {
    let marker = match (selected, slot.status) {
        (true, _) => "[x]",
        (false, SlotStatus::Available) => "[ ]",
        (false, SlotStatus::Booked) => "[B]",
        (false, SlotStatus::Blocked) => "[-]",
    };
    format!(
        "{} {} - {}  {}",
        marker,
        slot.start_time.to_12h_string(),
        slot.end_time.to_12h_string(),
        status_label(slot.status)
    )
}

fn status_label(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Available => "available",
        SlotStatus::Booked => "booked",
        SlotStatus::Blocked => "blocked",
    }
}

pub fn print_slots(slots: &[TimeSlot], selected: &[ClockTime]) {
    if slots.is_empty() {
        println!("No slots available for this date");
        return;
    }
    for slot in slots {
        println!("{}", slot_line(slot, selected.contains(&slot.start_time)));
    }
}

pub fn range_line(range: &SlotRange) -> String {
    let minutes = range.duration_minutes();
    format!(
        "{} - {} ({}h{:02})",
        range.start_time.to_12h_string(),
        range.end_time.to_12h_string(),
        minutes / 60,
        minutes % 60
    )
}

pub fn booking_line(booking: &Booking) -> String {
    let place = match (&booking.venue, &booking.court) {
        (Some(venue), Some(court)) => format!("{} / {}", venue.name, court.name),
        (None, Some(court)) => court.name.clone(),
        _ => booking.court_id.clone(),
    };
    format!(
        "{}  {} {}-{}  {}  {:?}  Rs. {:.0}",
        booking.id,
        booking.date,
        booking.start_time,
        booking.end_time,
        place,
        booking.status,
        booking.final_price
    )
}

pub fn owner_booking_line(entry: &OwnerBooking) -> String {
    let customer = entry.customer_name().unwrap_or("-");
    let phone = entry
        .user_phone
        .as_deref()
        .or(entry.guest_phone.as_deref())
        .unwrap_or("");
    format!("{}  {} {}", booking_line(&entry.booking), customer, phone)
}
