use crate::constants::DEFAULT_API_BASE_URL;

/// Base URL of the REST backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Local development backend. Used whenever neither the build nor the
    /// host page supplied a URL.
    fn default() -> Self {
        Self::from_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    /// captured at build time.
    pub fn new() -> Result<Self, &'static str> {
        match option_env!("API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Ok(Self::from_url(url)),
            _ => Err("API_BASE_URL environment variable is not set"),
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a resource path such as `orders` or `orders/7`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Every place a base URL can come from. The host page's runtime value wins
/// over the build-time one, which wins over the local default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    pub runtime: Option<ApiConfig>,
    pub build: Option<ApiConfig>,
}

impl ConfigSources {
    pub fn resolve(&self) -> ApiConfig {
        self.runtime
            .as_ref()
            .or(self.build.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    pub fn has_runtime(&self) -> bool {
        self.runtime.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:3000");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = ApiConfig::from_url("https://api.example.com//");
        assert_eq!(cfg.base_url(), "https://api.example.com");
        assert_eq!(cfg.url("orders"), "https://api.example.com/orders");
        assert_eq!(cfg.url("/orders/7"), "https://api.example.com/orders/7");
    }

    #[test]
    fn runtime_url_beats_build_url_beats_default() {
        let mut sources = ConfigSources::default();
        assert_eq!(sources.resolve(), ApiConfig::default());
        assert!(!sources.has_runtime());

        sources.build = Some(ApiConfig::from_url("https://build.example.com"));
        assert_eq!(sources.resolve().base_url(), "https://build.example.com");

        sources.runtime = Some(ApiConfig::from_url("https://runtime.example.com/"));
        assert_eq!(sources.resolve().base_url(), "https://runtime.example.com");
        assert!(sources.has_runtime());

        // A build value recorded after the host page spoke does not win.
        sources.build = Some(ApiConfig::from_url("https://late-build.example.com"));
        assert_eq!(sources.resolve().base_url(), "https://runtime.example.com");
    }
}
