use std::time::Duration;

/// Default CDN the HTTP sources fetch from.
pub const DEFAULT_CDN_BASE_URL: &str = "https://cdn.jsdelivr.net";

/// Settings shared by the HTTP stroke sources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourcesConfig {
    /// Base URL every source path is appended to (no trailing slash).
    pub cdn_base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_owned(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("strokeorder/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl SourcesConfig {
    /// Defaults overridden by `STROKEORDER_CDN_BASE_URL` and `STROKEORDER_HTTP_TIMEOUT_SECS`.
    ///
    /// Empty or unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var("STROKEORDER_CDN_BASE_URL").ok().as_deref(),
            std::env::var("STROKEORDER_HTTP_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    /// Apply textual overrides (as read from the environment or flags).
    pub fn with_overrides(mut self, base_url: Option<&str>, timeout_secs: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.cdn_base_url = url.trim_end_matches('/').to_owned();
        }
        if let Some(secs) = timeout_secs
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|&s| s.is_finite() && s > 0.0)
        {
            self.timeout = Duration::from_secs_f64(secs);
        }
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.cdn_base_url, path.trim_start_matches('/'))
    }
}
