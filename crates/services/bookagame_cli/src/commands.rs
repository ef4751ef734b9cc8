// --- File: crates/services/bookagame_cli/src/commands.rs ---
//! Command dispatch.

mod account;
mod bookings;
mod browse;
mod owner;

use bookagame_common::BookingError;
use chrono::{Local, NaiveDate};

use crate::app_context::AppContext;
use crate::cli::Command;

pub async fn run(ctx: &AppContext, command: Command, json: bool) -> Result<(), BookingError> {
    match command {
        Command::Login { email, password } => account::login(ctx, email, password, json).await,
        Command::Logout => account::logout(ctx).await,
        Command::Register(args) => account::register(ctx, args).await,
        Command::Me => account::me(ctx, json).await,
        Command::Profile { name, phone } => account::update_profile(ctx, name, phone, json).await,
        Command::Venues(args) => browse::venues(ctx, args, json).await,
        Command::Venue { id, availability } => browse::venue(ctx, &id, availability, json).await,
        Command::Sports => browse::sports(ctx, json).await,
        Command::Reviews {
            venue_id,
            mine,
            limit,
            offset,
        } => browse::reviews(ctx, venue_id, mine, limit, offset, json).await,
        Command::Slots(args) => bookings::slots(ctx, args, json).await,
        Command::Book(args) => bookings::book(ctx, args, json).await,
        Command::Bookings { filter } => bookings::list(ctx, filter, json).await,
        Command::Cancel { booking_id, reason } => bookings::cancel(ctx, &booking_id, reason).await,
        Command::Review {
            booking_id,
            rating,
            comment,
        } => bookings::review(ctx, &booking_id, rating, comment, json).await,
        Command::Favorites { action } => browse::favorites(ctx, action, json).await,
        Command::Owner { action } => owner::run(ctx, action, json).await,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
