//! Directions client configuration from explicit values or environment.

use std::env;
use std::time::Duration;

pub const DEFAULT_DIRECTIONS_URL: &str = "https://restapi.amap.com/v5/direction/driving";

/// Provider routing heuristic. "32" asks the provider to avoid congestion.
pub const DEFAULT_STRATEGY: &str = "32";

/// Pause between consecutive directions requests. The provider enforces a
/// per-second quota on web-service keys; 600 ms keeps a whole batch under it.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(600);

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// Web-service API key. Required for real requests.
    pub api_key: String,
    pub base_url: String,
    pub strategy: String,
    /// Minimum pause between consecutive requests in a batch.
    pub request_delay: Duration,
    pub http_timeout: Duration,
}

impl DirectionsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_DIRECTIONS_URL.to_string(),
            strategy: DEFAULT_STRATEGY.to_string(),
            request_delay: DEFAULT_REQUEST_DELAY,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::new(env::var("COLDROUTE_AMAP_KEY").unwrap_or_default());
        if let Ok(url) = env::var("COLDROUTE_DIRECTIONS_URL") {
            config.base_url = url;
        }
        if let Ok(strategy) = env::var("COLDROUTE_STRATEGY") {
            config.strategy = strategy;
        }
        if let Some(ms) = env::var("COLDROUTE_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.request_delay = Duration::from_millis(ms);
        }
        config
    }
}
