// --- File: crates/services/bookagame_cli/src/commands/bookings.rs ---
use bookagame_booking::{can_cancel, can_review, filter_bookings, BookingFilter, BookingFlow, ReviewForm};
use bookagame_common::models::TimeSlot;
use bookagame_common::{BookingError, ClockTime};
use bookagame_slots::{IgnoreReason, TapOutcome};
use chrono::Local;
use serde::Serialize;

use super::today;
use crate::app_context::AppContext;
use crate::cli::SlotArgs;
use crate::output::{booking_line, print_json, print_slots, range_line};

#[derive(Serialize)]
struct SlotView {
    slots: Vec<TimeSlot>,
    selected: Vec<ClockTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    estimated_price: Option<f64>,
}

fn ignored_reason(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::UnknownSlot => "no slot starts at that time",
        IgnoreReason::Unavailable => "slot is not available",
        IgnoreReason::MaxReached => "maximum number of slots reached",
    }
}

/// Loads the court's slots and taps the picked start times in order.
pub(super) async fn load_and_pick(ctx: &AppContext, args: &SlotArgs) -> Result<BookingFlow, BookingError> {
    let flow = ctx.booking_flow();
    let date = args.date.unwrap_or_else(today);
    flow.load(&args.court_id, date).await?;
    for &pick in &args.picks {
        if let TapOutcome::Ignored(reason) = flow.tap(pick) {
            eprintln!("Skipped {}: {}", pick, ignored_reason(reason));
        }
    }
    Ok(flow)
}

pub(super) fn print_selection(flow: &BookingFlow, rate: Option<f64>) {
    match flow.selection() {
        Some(range) => {
            println!("Selected: {}", range_line(&range));
            if let Some(rate) = rate {
                println!("Estimated price: Rs. {:.0}", flow.estimated_price(rate));
            }
        }
        None => println!("No slots selected"),
    }
}

pub async fn slots(ctx: &AppContext, args: SlotArgs, json: bool) -> Result<(), BookingError> {
    let flow = load_and_pick(ctx, &args).await?;
    let selected = flow.selected_start_times();
    if json {
        return print_json(&SlotView {
            slots: flow.slots(),
            estimated_price: args.rate.filter(|_| !selected.is_empty()).map(|r| flow.estimated_price(r)),
            selected,
        });
    }
    print_slots(&flow.slots(), &selected);
    print_selection(&flow, args.rate);
    Ok(())
}

pub async fn book(ctx: &AppContext, args: SlotArgs, json: bool) -> Result<(), BookingError> {
    ctx.require_user().await?;
    let flow = load_and_pick(ctx, &args).await?;
    if !json {
        print_selection(&flow, args.rate);
    }
    let booking = flow.confirm().await?;
    if json {
        return print_json(&booking);
    }
    println!("Booking confirmed");
    println!("{}", booking_line(&booking));
    Ok(())
}

pub async fn list(ctx: &AppContext, filter: BookingFilter, json: bool) -> Result<(), BookingError> {
    ctx.require_user().await?;
    let now = Local::now().naive_local();
    let fetched = ctx.api.bookings(&filter.query()).await?;
    let bookings = filter_bookings(&fetched, filter, now);
    if json {
        return print_json(&bookings);
    }
    if bookings.is_empty() {
        println!("No {} bookings. {}", filter, filter.empty_hint());
        return Ok(());
    }
    for booking in &bookings {
        let mut hints = Vec::new();
        if can_cancel(booking, now) {
            hints.push("cancellable");
        }
        if can_review(booking) {
            hints.push("reviewable");
        }
        if hints.is_empty() {
            println!("{}", booking_line(booking));
        } else {
            println!("{}  [{}]", booking_line(booking), hints.join(", "));
        }
    }
    Ok(())
}

pub async fn cancel(ctx: &AppContext, booking_id: &str, reason: Option<String>) -> Result<(), BookingError> {
    ctx.require_user().await?;
    let booking = ctx.api.booking(booking_id).await?;
    if !can_cancel(&booking, Local::now().naive_local()) {
        return Err(BookingError::Validation(
            "Only upcoming confirmed bookings can be cancelled".to_string(),
        ));
    }
    ctx.api.cancel_booking(booking_id, reason).await?;
    println!("Booking {} cancelled", booking_id);
    Ok(())
}

pub async fn review(
    ctx: &AppContext,
    booking_id: &str,
    rating: u8,
    comment: String,
    json: bool,
) -> Result<(), BookingError> {
    ctx.require_user().await?;
    let form = ReviewForm { rating, comment };
    let request = form.validate()?;
    let review = ctx.api.submit_review(booking_id, &request).await?;
    if json {
        return print_json(&review);
    }
    println!("Thanks for your review ({})", form.rating_label());
    Ok(())
}
