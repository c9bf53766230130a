use crate::api::ApiClient;
use crate::assets::AssetUrlResolver;
use crate::config::AppConfig;
use crate::services::meta::PageMeta;
use crate::web::shell::Shell;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub assets: AssetUrlResolver,
    /// Canonical site base URL for metadata and OG tags.
    pub base_url: String,
    pub analytics: bool,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api: ApiClient::new(&config.api_url),
            assets: AssetUrlResolver::new(config.app_url.clone()),
            base_url: config.canonical_base().to_string(),
            analytics: config.analytics,
        }
    }

    /// Metadata builder seeded with the shell's settings and this request's path.
    pub fn meta(&self, shell: &Shell, path: &str) -> PageMeta {
        PageMeta::new(
            &shell.settings,
            &self.assets,
            &self.base_url,
            path,
            self.analytics,
        )
    }
}
