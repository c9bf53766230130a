/// Runtime configuration, read once at startup from the environment
/// (`.env` is loaded by the binary before this runs).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the headless content API, e.g. `http://localhost:8000/api/v1`.
    pub api_url: String,
    /// Public base URL of this site, used for absolute asset and metadata
    /// URLs. Unset means asset paths stay root-relative.
    pub app_url: Option<String>,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Whether to emit the analytics snippet in rendered pages.
    pub analytics: bool,
}

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_SITE_URL: &str = "https://kahragen.com";

impl AppConfig {
    pub fn from_env() -> Self {
        let api_url = std::env::var("KAHRAGEN_API_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let app_url = std::env::var("KAHRAGEN_APP_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let analytics = std::env::var("KAHRAGEN_ANALYTICS")
            .map(|s| matches!(s.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            api_url,
            app_url,
            bind_addr,
            analytics,
        }
    }

    /// Canonical site base URL for metadata; falls back to the production
    /// domain when no public URL is configured.
    pub fn canonical_base(&self) -> &str {
        self.app_url.as_deref().unwrap_or(DEFAULT_SITE_URL)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            app_url: None,
            bind_addr: "0.0.0.0:8080".to_string(),
            analytics: false,
        }
    }
}
