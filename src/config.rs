//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `BLIP_API_KEY` (required): API key sent as `X-API-Key` on every Blip call
/// - `BLIP_API_URL` (required): base URL of the Blip API
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `DATA_DIR` (optional): directory holding the sample JSON files, defaults to `data`
/// - `DELETE_PACING_MS` (optional): pause between individual delete calls, defaults to 400
/// - `POLL_INTERVAL_SECS` (optional): pause between batch status checks, defaults to 5
/// - `POLL_MAX_ATTEMPTS` (optional): batch status checks before giving up, defaults to 10
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub blip_api_key: String,

    pub blip_api_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_delete_pacing_ms")]
    pub delete_pacing_ms: u64,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_poll_max_attempts")]
    pub poll_max_attempts: u32,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_delete_pacing_ms() -> u64 {
    400
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_poll_max_attempts() -> u32 {
    10
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., BLIP_API_KEY)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: blip_api_url -> BLIP_API_URL
        envy::from_env::<Config>()
    }
}
