use crate::assets::AssetUrlResolver;
use crate::models::{PageData, SiteSettings};

/// Fully-resolved `<head>` content for one rendered page. Site-wide fields
/// come from the settings record at construction; route handlers then apply
/// their page document and hardcoded copy through the setters, which keep
/// the precedence page fields > settings defaults > route literals.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Comma-joined; empty means no keywords tag.
    pub keywords: String,
    pub site_name: String,
    pub canonical_url: String,
    pub favicon_url: String,
    pub apple_icon_url: String,
    pub og_image_url: String,
    pub theme_color: String,
    /// Empty when no verification code is configured.
    pub google_verification: String,
    pub analytics: bool,
    /// Bare host for the analytics script's data-domain attribute.
    pub analytics_domain: String,

    settings_title: Option<String>,
    settings_description: Option<String>,
    settings_keywords: Option<String>,
}

impl PageMeta {
    pub fn new(
        settings: &SiteSettings,
        assets: &AssetUrlResolver,
        base_url: &str,
        path: &str,
        analytics: bool,
    ) -> Self {
        let site_name = settings.site_name().to_string();

        let favicon_url = match settings.favicon_url.as_deref() {
            Some(url) if !url.is_empty() => assets.resolve(Some(url)),
            _ => "/favicon.ico".to_string(),
        };
        let apple_icon_url = match settings.favicon_url.as_deref() {
            Some(url) if url.ends_with(".png") => assets.resolve(Some(url)),
            _ => "/apple-touch-icon.png".to_string(),
        };
        let og_image_url = match settings.default_og_image_url.as_deref() {
            Some(url) if !url.is_empty() => assets.resolve(Some(url)),
            _ => format!("{}/default-og-image.jpg", base_url),
        };

        let settings_title = non_empty(settings.default_meta_title.as_deref());
        let settings_description = non_empty(settings.default_meta_description.as_deref());
        let settings_keywords = settings
            .default_meta_keywords
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(|k| k.join(", "));

        Self {
            title: settings_title.clone().unwrap_or_else(|| site_name.clone()),
            description: settings_description.clone().unwrap_or_default(),
            keywords: settings_keywords.clone().unwrap_or_default(),
            site_name,
            canonical_url: format!("{}{}", base_url, path),
            favicon_url,
            apple_icon_url,
            og_image_url,
            theme_color: settings
                .theme_color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "#0A2540".to_string()),
            google_verification: settings
                .google_verification_code
                .clone()
                .unwrap_or_default(),
            analytics,
            analytics_domain: base_url
                .trim_start_matches("https://")
                .trim_start_matches("http://")
                .trim_end_matches('/')
                .to_string(),
            settings_title,
            settings_description,
            settings_keywords,
        }
    }

    /// `meta_title`, then the page title suffixed with the site name, then
    /// the settings default, then the route literal (used verbatim, it
    /// already carries its suffix).
    pub fn set_title(
        &mut self,
        meta_title: Option<&str>,
        page_title: Option<&str>,
        literal: &str,
    ) {
        self.title = non_empty(meta_title)
            .or_else(|| non_empty(page_title).map(|t| format!("{} | {}", t, self.site_name)))
            .or_else(|| self.settings_title.clone())
            .unwrap_or_else(|| literal.to_string());
    }

    pub fn set_description(&mut self, meta_description: Option<&str>, literal: &str) {
        self.description = non_empty(meta_description)
            .or_else(|| self.settings_description.clone())
            .unwrap_or_else(|| literal.to_string());
    }

    pub fn set_keywords(&mut self, meta_keywords: Option<&[String]>, literal: &[&str]) {
        self.keywords = meta_keywords
            .filter(|k| !k.is_empty())
            .map(|k| k.join(", "))
            .or_else(|| self.settings_keywords.clone())
            .unwrap_or_else(|| literal.join(", "));
    }

    /// Applies the usual whole-page chain in one go.
    pub fn apply_page(&mut self, page: Option<&PageData>, title: &str, description: &str) {
        self.set_title(
            page.and_then(|p| p.meta_title.as_deref()),
            page.map(|p| p.title.as_str()),
            title,
        );
        self.set_description(page.and_then(|p| p.meta_description.as_deref()), description);
        self.set_keywords(page.and_then(|p| p.meta_keywords.as_deref()), &[]);
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
