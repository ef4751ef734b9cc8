//! Environment variable naming for the Book a Game configuration.
//!
//! Configuration paths such as `api.base_url` map to variables such as
//! `BOOKAGAME__API__BASE_URL`.

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "BOOKAGAME";

/// The separator between prefix, sections and keys
pub const CONFIG_SEPARATOR: &str = "__";

/// Get the prefix for configuration environment variables.
///
/// `BOOKAGAME_PREFIX` overrides the default, which lets tests and side-by-side
/// installs use isolated variable sets.
pub fn get_config_prefix() -> String {
    env::var("BOOKAGAME_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "api.base_url")
///
/// # Returns
///
/// The environment variable name (e.g., "BOOKAGAME__API__BASE_URL")
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}
