// --- File: crates/bookagame_config/src/models.rs ---

use config::ConfigError;
use serde::{Deserialize, Serialize};

use crate::env_vars::config_path_to_env_var;

pub const DEFAULT_API_URL: &str = "http://localhost:5050/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TOKEN_PATH: &str = ".bookagame/tokens.json";
pub const DEFAULT_MAX_SLOTS: usize = 4;
pub const DEFAULT_MIN_SLOTS: usize = 1;
pub const DEFAULT_SCHEDULE_DAYS: u32 = 7;

/// Host loopback address as seen from inside the Android emulator.
const ANDROID_EMULATOR_HOST: &str = "10.0.2.2";

/// Target platform the client runs on. Only affects base URL resolution.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Native,
    Android,
    Ios,
    Web,
}

// --- Remote API ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String, // BOOKAGAME__API__BASE_URL
    pub timeout_secs: u64,
    pub platform: Platform,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            platform: Platform::Native,
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash, with `localhost` swapped for the
    /// emulator host address on Android.
    pub fn resolved_base_url(&self) -> String {
        let url = self.base_url.trim_end_matches('/');
        if self.platform == Platform::Android && url.contains("localhost") {
            return url.replace("localhost", ANDROID_EMULATOR_HOST);
        }
        url.to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenBackend {
    #[default]
    File,
    Memory,
}

// --- Token storage ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: TokenBackend,
    pub token_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: TokenBackend::File,
            token_path: DEFAULT_TOKEN_PATH.to_string(),
        }
    }
}

// --- Booking UI limits ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct BookingConfig {
    pub max_slots: usize, // consecutive one-hour slots per booking
    pub min_slots: usize,
    pub schedule_days: u32, // length of the owner schedule date strip
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_slots: DEFAULT_MAX_SLOTS,
            min_slots: DEFAULT_MIN_SLOTS,
            schedule_days: DEFAULT_SCHEDULE_DAYS,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Rejects values the client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(invalid("api.base_url", "must not be empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(invalid("api.timeout_secs", "must be positive"));
        }
        if self.booking.max_slots == 0 {
            return Err(invalid("booking.max_slots", "must be at least 1"));
        }
        if self.booking.min_slots > self.booking.max_slots {
            return Err(invalid(
                "booking.min_slots",
                &format!("({}) exceeds booking.max_slots ({})", self.booking.min_slots, self.booking.max_slots),
            ));
        }
        if self.storage.backend == TokenBackend::File && self.storage.token_path.trim().is_empty() {
            return Err(invalid("storage.token_path", "is required for the file backend"));
        }
        Ok(())
    }
}

/// Error for an invalid setting, naming the variable that overrides it.
fn invalid(path: &str, problem: &str) -> ConfigError {
    ConfigError::Message(format!(
        "{} {} (set it in config/ or via {})",
        path,
        problem,
        config_path_to_env_var(path)
    ))
}
