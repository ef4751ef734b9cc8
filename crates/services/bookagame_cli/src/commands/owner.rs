// --- File: crates/services/bookagame_cli/src/commands/owner.rs ---
//! `bookagame owner ...` subcommands. All of them need an owner account.

use bookagame_booking::owner::{booked_hours, bookings_on, dashboard_stats, schedule_days};
use bookagame_booking::{BlockSlotForm, CourtForm, VenueForm, WalkInForm};
use bookagame_common::models::{DashboardStats, OwnerBooking, OwnerBookingQuery, Venue};
use bookagame_common::BookingError;
use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::bookings::{load_and_pick, print_selection};
use super::today;
use crate::app_context::AppContext;
use crate::cli::{OwnerAction, VenueFormArgs};
use crate::output::{owner_booking_line, print_json};

fn venue_form(args: VenueFormArgs) -> VenueForm {
    VenueForm {
        name: args.name,
        address: args.address,
        description: args.description,
        sport_types: args.sports,
        amenities: args.amenities,
        latitude: args.lat,
        longitude: args.lng,
        opening_time: args.open,
        closing_time: args.close,
    }
}

fn print_venue(venue: &Venue, json: bool) -> Result<(), BookingError> {
    if json {
        return print_json(venue);
    }
    println!(
        "{}  {}  ({})  {:?}  {} courts",
        venue.id,
        venue.name,
        venue.address,
        venue.status,
        venue.courts.len()
    );
    Ok(())
}

fn print_stats(stats: &DashboardStats, json: bool) -> Result<(), BookingError> {
    if json {
        return print_json(stats);
    }
    println!("Today's bookings: {}", stats.today_bookings);
    println!("This week:        Rs. {:.0}", stats.week_earnings);
    println!("Pending bookings: {}", stats.pending_bookings);
    println!("Active venues:    {}", stats.active_venues);
    Ok(())
}

#[derive(Serialize)]
struct ScheduleDay<'a> {
    date: NaiveDate,
    booked_hours: f64,
    bookings: Vec<&'a OwnerBooking>,
}

pub async fn run(ctx: &AppContext, action: OwnerAction, json: bool) -> Result<(), BookingError> {
    ctx.require_owner().await?;
    let owner = ctx.api.owner();

    match action {
        OwnerAction::Venues => {
            let venues = owner.venues().await?;
            if json {
                return print_json(&venues);
            }
            if venues.is_empty() {
                println!("No venues yet. Add one with `bookagame owner add-venue`.");
            }
            for venue in &venues {
                print_venue(venue, false)?;
            }
        }
        OwnerAction::AddVenue(args) => {
            let request = venue_form(args).validate()?;
            let venue = owner.create_venue(&request).await?;
            if !json {
                println!("Venue submitted for approval");
            }
            print_venue(&venue, json)?;
        }
        OwnerAction::UpdateVenue { id, venue } => {
            let request = venue_form(venue).validate()?;
            let venue = owner.update_venue(&id, &request).await?;
            print_venue(&venue, json)?;
        }
        OwnerAction::DeleteVenue { id } => {
            owner.delete_venue(&id).await?;
            println!("Venue {} deleted", id);
        }
        OwnerAction::Courts { venue_id } => {
            let courts = owner.venue_courts(&venue_id).await?;
            if json {
                return print_json(&courts);
            }
            for court in courts {
                let state = if court.is_active { "" } else { "  (inactive)" };
                println!(
                    "{}  {}  {}  Rs. {:.0}/hr{}",
                    court.id, court.name, court.sport_type, court.base_price, state
                );
            }
        }
        OwnerAction::AddCourt {
            venue_id,
            name,
            sport,
            rate,
        } => {
            let form = CourtForm {
                id: None,
                name,
                sport_type: sport,
                hourly_rate: rate,
            };
            let court = owner.create_court(&venue_id, &form.validate()?).await?;
            if json {
                return print_json(&court);
            }
            println!("Court {} added ({})", court.name, court.id);
        }
        OwnerAction::Bookings { date, court } => {
            let query = OwnerBookingQuery { date, court_id: court };
            let bookings = owner.bookings(&query).await?;
            if json {
                return print_json(&bookings);
            }
            if bookings.is_empty() {
                println!("No bookings");
            }
            for entry in &bookings {
                println!("{}", owner_booking_line(entry));
            }
        }
        OwnerAction::WalkIn {
            slots,
            guest_name,
            guest_phone,
        } => {
            let flow = load_and_pick(ctx, &slots).await?;
            if !json {
                print_selection(&flow, slots.rate);
            }
            let form = WalkInForm {
                guest_name,
                guest_phone,
            };
            let booking = flow.confirm_walk_in(&form).await?;
            if json {
                return print_json(&booking);
            }
            println!("Walk-in booked");
            println!("{}", owner_booking_line(&booking));
        }
        OwnerAction::Block {
            court_id,
            date,
            start,
            end,
            reason,
        } => {
            let form = BlockSlotForm {
                court_id: Some(court_id),
                date: date.unwrap_or_else(today),
                start_time: start,
                end_time: end,
                reason,
            };
            let blocked = ctx.booking_flow().block_slot(&form).await?;
            if json {
                return print_json(&blocked);
            }
            println!(
                "Blocked {} {}-{} ({})",
                blocked.date, blocked.start_time, blocked.end_time, blocked.id
            );
        }
        OwnerAction::Unblock { slot_id } => {
            owner.delete_blocked_slot(&slot_id).await?;
            println!("Blocked slot {} removed", slot_id);
        }
        OwnerAction::Blocked { court_id } => {
            let blocked = owner.blocked_slots(&court_id).await?;
            if json {
                return print_json(&blocked);
            }
            if blocked.is_empty() {
                println!("No blocked time on this court");
            }
            for slot in blocked {
                println!(
                    "{}  {} {}-{}  {}",
                    slot.id,
                    slot.date,
                    slot.start_time,
                    slot.end_time,
                    slot.reason.as_deref().unwrap_or("")
                );
            }
        }
        OwnerAction::Earnings => {
            let earnings = owner.earnings_summary().await?;
            if json {
                return print_json(&earnings);
            }
            println!("Total:           Rs. {:.0}", earnings.total_earnings);
            println!("This week:       Rs. {:.0}", earnings.this_week);
            println!("This month:      Rs. {:.0}", earnings.this_month);
            println!("Pending payouts: Rs. {:.0}", earnings.pending_payouts);
        }
        OwnerAction::Dashboard { derive } => {
            let stats = if derive {
                let bookings = owner.bookings(&OwnerBookingQuery::default()).await?;
                let venues = owner.venues().await?;
                dashboard_stats(&bookings, &venues, Local::now().naive_local())
            } else {
                owner.dashboard_stats().await?
            };
            print_stats(&stats, json)?;
        }
        OwnerAction::Schedule { date, days } => {
            let start = date.unwrap_or_else(today);
            let days = days.unwrap_or(ctx.config.booking.schedule_days);
            let bookings = owner.bookings(&OwnerBookingQuery::default()).await?;
            let schedule: Vec<ScheduleDay<'_>> = schedule_days(start, days)
                .into_iter()
                .map(|day| {
                    let entries = bookings_on(&bookings, day);
                    ScheduleDay {
                        date: day,
                        booked_hours: booked_hours(&entries),
                        bookings: entries,
                    }
                })
                .collect();
            if json {
                return print_json(&schedule);
            }
            for day in &schedule {
                println!("{}  {} bookings, {:.1}h booked", day.date, day.bookings.len(), day.booked_hours);
                for entry in &day.bookings {
                    println!("    {}", owner_booking_line(entry));
                }
            }
        }
    }
    Ok(())
}
