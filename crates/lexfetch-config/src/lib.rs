use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://od-api.oxforddictionaries.com:443";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// One run's configuration, loaded once and passed by reference everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app_id: String,
    pub app_key: String,
    /// Dictionary language code, e.g. "en-gb"
    pub lang: String,
    pub base_url: String,

    pub in_file: PathBuf,
    pub out_file: PathBuf,
    pub error_file: PathBuf,

    /// Separator between word and definition in the success file
    pub divider: String,
    /// Fixed delay before each API call
    pub throttle_secs: u64,
}

impl Config {
    /// Read configuration from the environment. Only the API credentials
    /// are required; everything else falls back to a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_id = env::var("LEXFETCH_APP_ID").map_err(|_| ConfigError::Missing("LEXFETCH_APP_ID"))?;
        let app_key =
            env::var("LEXFETCH_APP_KEY").map_err(|_| ConfigError::Missing("LEXFETCH_APP_KEY"))?;

        let lang = env::var("LEXFETCH_LANG").unwrap_or_else(|_| "en-gb".to_string());
        let base_url = env::var("LEXFETCH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let in_file = env::var("LEXFETCH_IN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("words.txt"));
        let out_file = env::var("LEXFETCH_OUT_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("definitions.txt"));
        let error_file = env::var("LEXFETCH_ERROR_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("errors.txt"));

        let divider = env::var("LEXFETCH_DIVIDER").unwrap_or_else(|_| ";".to_string());

        let throttle_secs = env::var("LEXFETCH_THROTTLE_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Ok(Config {
            app_id,
            app_key,
            lang,
            base_url,
            in_file,
            out_file,
            error_file,
            divider,
            throttle_secs,
        })
    }
}
