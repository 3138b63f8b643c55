//! # Application Configuration
//!
//! Settings come from environment variables (after `.env` has been loaded by
//! the binary):
//!
//! - `CARELINK_API_URL`: REST API base URL (required)
//! - `CARELINK_STORAGE_DIR`: directory for persisted sessions (default: ".carelink")
//! - `CARELINK_REQUEST_TIMEOUT_SECONDS`: per-request timeout (default: 30)
//! - `CARELINK_SEARCH_DEBOUNCE_MS`: search input debounce window (default: 500)
//! - `CARELINK_VIDEO_APP_ID`: app id handed to the video SDK (optional)
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `LOG_FILTER`: `RUST_LOG` style filter, overrides `LOG_LEVEL` when set

use carelink_client::ClientConfig;
use eyre::{Result, WrapErr, eyre};
use std::{env, path::PathBuf, time::Duration};
use tracing::Level;

pub const DEFAULT_STORAGE_DIR: &str = ".carelink";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL and timeout for the REST client
    pub client: ClientConfig,

    /// Where the local-storage files live
    pub storage_dir: PathBuf,

    /// Quiet period before a search query is sent
    pub search_debounce: Duration,

    /// Passed through to the video SDK hand-off
    pub video_app_id: Option<String>,

    pub log_level: Level,

    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Blank values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = get("CARELINK_API_URL")
            .ok_or_else(|| eyre!("CARELINK_API_URL environment variable must be set"))?;

        let request_timeout = get("CARELINK_REQUEST_TIMEOUT_SECONDS")
            .map(|value| value.trim().parse::<u64>())
            .transpose()
            .wrap_err("Invalid CARELINK_REQUEST_TIMEOUT_SECONDS value")?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS);

        let client = ClientConfig::new(api_url.trim(), Duration::from_secs(request_timeout))
            .wrap_err("Invalid CARELINK_API_URL value")?;

        let storage_dir = get("CARELINK_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR));

        let search_debounce = get("CARELINK_SEARCH_DEBOUNCE_MS")
            .map(|value| value.trim().parse::<u64>())
            .transpose()
            .wrap_err("Invalid CARELINK_SEARCH_DEBOUNCE_MS value")?
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS);

        let video_app_id = get("CARELINK_VIDEO_APP_ID").map(|id| id.trim().to_string());

        let log_level = match get("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .trim()
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            client,
            storage_dir,
            search_debounce: Duration::from_millis(search_debounce),
            video_app_id,
            log_level,
            log_filter: get("LOG_FILTER"),
        })
    }
}
