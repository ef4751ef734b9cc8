//! Logging utilities for the Book a Game client.
//!
//! Every crate logs through `tracing` macros; binaries call
//! [`init_with_level`] once at startup.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with a specific level for the
/// `bookagame` crates. `RUST_LOG` directives are honoured as well.
///
/// # Examples
///
/// ```
/// use bookagame_common::logging;
///
/// logging::init_with_level(logging::parse_level("debug"));
/// // A second call is a no-op.
/// logging::init_with_level(tracing::Level::INFO);
/// ```
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in [
        "bookagame",
        "bookagame_api",
        "bookagame_session",
        "bookagame_booking",
        "bookagame_slots",
        "bookagame_config",
    ] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    // try_init: a global subscriber may already be set (tests, embedding apps)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Parses a level name from configuration, defaulting to INFO.
pub fn parse_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::INFO)
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}
