//! Replay configuration

use std::path::PathBuf;

use clap::Parser;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Storefront cart replay configuration
#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    about = "Replay cart actions against a product catalogue",
    long_about = None
)]
pub struct Config {
    /// Base directory holding `products/` and `actions/` fixtures
    #[arg(long, env = "STOREFRONT_FIXTURES", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Product catalogue fixture name
    #[arg(short, long, env = "STOREFRONT_CATALOGUE", default_value = "storefront")]
    pub catalogue: String,

    /// Action script fixture name
    #[arg(short, long, env = "STOREFRONT_ACTIONS", default_value = "checkout")]
    pub actions: String,

    /// Replay a JSON array of action records instead of the action script
    #[arg(long, env = "STOREFRONT_JSON")]
    pub json: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
