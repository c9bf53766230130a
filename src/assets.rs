/// Turns backend-provided image paths into absolute URLs. The backend stores
/// uploads under its public `storage/` directory and may hand back any of
/// `storage/x`, `/storage/x`, a bare `x`, or an already absolute URL.
#[derive(Debug, Clone, Default)]
pub struct AssetUrlResolver {
    app_url: Option<String>,
}

impl AssetUrlResolver {
    pub fn new(app_url: Option<String>) -> Self {
        Self {
            app_url: app_url
                .map(|u| u.trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty()),
        }
    }

    /// Pure string transform; absolute inputs pass through untouched, so the
    /// result is stable under re-resolution.
    pub fn resolve(&self, path: Option<&str>) -> String {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            return String::new();
        };

        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let Some(app_url) = &self.app_url else {
            log::warn!("app URL is not set, returning relative image path: {}", path);
            return if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{}", path)
            };
        };

        let segment = if path.starts_with("storage/") {
            format!("/{}", path)
        } else if !path.starts_with('/') {
            format!("/storage/{}", path)
        } else {
            path.to_string()
        };

        format!("{}{}", app_url, segment)
    }
}
