// --- File: crates/services/bookagame_cli/src/cli.rs ---
use bookagame_booking::BookingFilter;
use bookagame_common::ClockTime;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookagame")]
#[command(about = "Find sports venues and book courts from the terminal")]
#[command(version)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (overrides logging.level from the configuration)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Create a player or venue-owner account
    Register(RegisterArgs),
    /// Show the signed-in account
    Me,
    /// Update name or phone of the signed-in account
    Profile {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Browse venues
    Venues(VenueArgs),
    /// Show one venue with its courts
    Venue {
        id: String,
        /// Also fetch the venue's availability overview
        #[arg(long)]
        availability: bool,
    },
    /// List the sport types venues offer
    Sports,
    /// Reviews of a venue, or your own with --mine
    Reviews {
        venue_id: Option<String>,
        #[arg(long)]
        mine: bool,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Show a court's slots; --pick taps slots to preview a selection
    Slots(SlotArgs),
    /// Book the picked slots of a court
    Book(SlotArgs),
    /// List your bookings
    Bookings {
        #[arg(long, default_value = "upcoming")]
        filter: BookingFilter,
    },
    /// Cancel one of your bookings
    Cancel {
        booking_id: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Review a completed booking
    Review {
        booking_id: String,
        #[arg(long, default_value_t = 5)]
        rating: u8,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Manage favorite venues
    Favorites {
        #[command(subcommand)]
        action: FavoriteAction,
    },
    /// Venue-owner tools
    Owner {
        #[command(subcommand)]
        action: OwnerAction,
    },
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Repeat of the password; defaults to --password
    #[arg(long)]
    pub confirm_password: Option<String>,
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Register as a venue owner
    #[arg(long)]
    pub owner: bool,
}

#[derive(Args)]
pub struct VenueArgs {
    #[arg(long)]
    pub sport: Option<String>,
    #[arg(long, requires = "lng")]
    pub lat: Option<f64>,
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,
    /// Search radius in km around --lat/--lng
    #[arg(long)]
    pub radius: Option<f64>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Args)]
pub struct SlotArgs {
    pub court_id: String,
    /// Date as YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Slot start times to tap, in order (HH:MM)
    #[arg(long = "pick", value_name = "HH:MM")]
    pub picks: Vec<ClockTime>,
    /// Hourly rate used for the price estimate
    #[arg(long)]
    pub rate: Option<f64>,
}

#[derive(Subcommand)]
pub enum FavoriteAction {
    List,
    Add { venue_id: String },
    Remove { venue_id: String },
}

#[derive(Args)]
pub struct VenueFormArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub address: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Sport offered at the venue (repeatable)
    #[arg(long = "sport")]
    pub sports: Vec<String>,
    /// Amenity (repeatable)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,
    #[arg(long, default_value = "")]
    pub lat: String,
    #[arg(long, default_value = "")]
    pub lng: String,
    #[arg(long, default_value = "06:00")]
    pub open: ClockTime,
    #[arg(long, default_value = "22:00")]
    pub close: ClockTime,
}

#[derive(Subcommand)]
pub enum OwnerAction {
    /// List your venues
    Venues,
    /// Create a venue (reviewed by an admin before it is listed)
    AddVenue(VenueFormArgs),
    /// Replace a venue's details
    UpdateVenue {
        id: String,
        #[command(flatten)]
        venue: VenueFormArgs,
    },
    DeleteVenue { id: String },
    /// List the courts of a venue
    Courts { venue_id: String },
    /// Add a court to a venue
    AddCourt {
        venue_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        sport: String,
        /// Hourly rate
        #[arg(long)]
        rate: String,
    },
    /// Bookings across your venues
    Bookings {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        court: Option<String>,
    },
    /// Book a court for a walk-in guest
    WalkIn {
        #[command(flatten)]
        slots: SlotArgs,
        #[arg(long)]
        guest_name: String,
        #[arg(long)]
        guest_phone: String,
    },
    /// Block a time range on a court
    Block {
        court_id: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        start: Option<ClockTime>,
        #[arg(long)]
        end: Option<ClockTime>,
        #[arg(long, default_value = "")]
        reason: String,
    },
    /// Remove a blocked range
    Unblock { slot_id: String },
    /// List blocked ranges of a court
    Blocked { court_id: String },
    /// Earnings summary
    Earnings,
    /// Dashboard figures
    Dashboard {
        /// Compute the figures from your bookings and venues instead of asking the API
        #[arg(long)]
        derive: bool,
    },
    /// Day-by-day schedule
    Schedule {
        /// Day to list (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Length of the date strip (default: booking.schedule_days)
        #[arg(long)]
        days: Option<u32>,
    },
}
