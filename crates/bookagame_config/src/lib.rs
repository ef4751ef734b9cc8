// --- File: crates/bookagame_config/src/lib.rs ---
use config::{Config, Environment, File};
pub use config::ConfigError;
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod env_vars;
pub mod models;

pub use models::*;

/// Loads the layered application configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. built-in defaults of [`AppConfig`]
/// 2. `config/default.*` below the config root
/// 3. `config/<RUN_ENV>.*` below the config root (`RUN_ENV` defaults to `debug`)
/// 4. environment variables `BOOKAGAME__<SECTION>__<KEY>`
///
/// The config root is `BOOKAGAME_CONFIG_DIR` when set, else the current directory.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let root = env::var("BOOKAGAME_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    load_config_from(&root)
}

/// Same as [`load_config`] with an explicit config root.
pub fn load_config_from(root: &Path) -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();

    let default_path = root.join("config/default");
    let env_path = root.join(format!("config/{}", run_env));

    debug!(
        default = %default_path.display(),
        env = %env_path.display(),
        "loading configuration"
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .prefix_separator(env_vars::CONFIG_SEPARATOR)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// `DOTENV_OVERRIDE` names an alternative file; otherwise `.env` is used.
/// Loading happens at most once per process. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
