use carelink_core::errors::{CareError, CareResult};
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Where the REST API lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Validates `base_url`; it must be an absolute http(s) URL.
    pub fn new(base_url: &str, request_timeout: Duration) -> CareResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CareError::Validation(format!("Invalid API base URL {base_url:?}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(CareError::Validation(format!(
                "API base URL must be http or https, got {base_url}"
            )));
        }
        Ok(Self {
            base_url,
            request_timeout,
        })
    }

    pub fn with_default_timeout(base_url: &str) -> CareResult<Self> {
        Self::new(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }
}
