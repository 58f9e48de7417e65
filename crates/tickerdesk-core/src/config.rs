use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, owned by the top-level controller and threaded into
/// each component. No ambient globals: the API key, cache policy, and quota
/// all live here.
///
/// Environment variables (all optional):
///
/// | Variable | Default |
/// |----------|---------|
/// | `TICKERDESK_API_KEY` | `demo` |
/// | `TICKERDESK_BASE_URL` | `https://www.alphavantage.co/query` |
/// | `TICKERDESK_DATA_DIR` | `.tickerdesk` |
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream access credential, sent as a query parameter.
    pub api_key: String,
    /// Upstream query endpoint.
    pub base_url: String,
    /// Per-request timeout budget.
    pub timeout_ms: u64,
    /// Transient quote cache lifetime.
    pub cache_ttl: Duration,
    /// Provider quota window paired with `quota_limit`.
    pub quota_window: Duration,
    /// Requests allowed per `quota_window` (free tier: 5/min).
    pub quota_limit: u32,
    /// Directory holding the persisted favorites blob.
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(api_key) = std::env::var("TICKERDESK_API_KEY") {
            config.api_key = api_key;
        }
        if let Ok(base_url) = std::env::var("TICKERDESK_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(data_dir) = std::env::var("TICKERDESK_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }
        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::from("demo"),
            base_url: String::from("https://www.alphavantage.co/query"),
            timeout_ms: 5_000,
            cache_ttl: Duration::from_secs(300),
            quota_window: Duration::from_secs(60),
            quota_limit: 5,
            data_dir: PathBuf::from(".tickerdesk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_provider_free_tier() {
        let config = AppConfig::default();

        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.quota_window, Duration::from_secs(60));
        assert_eq!(config.quota_limit, 5);
    }
}
