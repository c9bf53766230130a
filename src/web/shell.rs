use tokio::join;

use crate::api::{self, ApiClient};
use crate::assets::AssetUrlResolver;
use crate::common::ApiResult;
use crate::models::{
    active_sorted, default_header_links, default_legal_links, default_quick_links, NavLocation,
    NavigationItem, SiteSettings,
};
use crate::services::icons;

/// Site-wide chrome for one rendered page: the settings record plus the
/// three navigation slots, fetched together once per request and passed
/// explicitly into the base template. Header and footer never fetch on
/// their own.
pub struct Shell {
    pub settings: SiteSettings,
    /// False when the backend had no settings record (or the fetch failed)
    /// and `settings` holds the shipped fallback.
    pub settings_found: bool,
    pub header_links: Vec<NavigationItem>,
    pub quick_links: Vec<NavigationItem>,
    pub legal_links: Vec<NavigationItem>,
    /// Resolved logo URLs; empty string means render the site name instead.
    pub header_logo_url: String,
    pub footer_logo_url: String,
    pub social_links: Vec<SocialLink>,
    pub copyright: String,
}

pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Sprite symbol id in `static/icons.svg`.
    pub icon: &'static str,
}

impl Shell {
    pub fn site_name(&self) -> &str {
        self.settings.site_name()
    }

    /// `tel:` href form of the contact phone, whitespace stripped.
    pub fn phone_href(&self) -> String {
        self.settings
            .contact_phone
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .collect()
    }
}

/// Every branch degrades on its own: a failed fetch is logged and replaced
/// by the shipped defaults, so the shell always renders.
pub async fn load_shell(api: &ApiClient, assets: &AssetUrlResolver) -> Shell {
    let (settings, header, quick, legal) = join!(
        api::get_site_settings(api),
        api::get_navigation(api, NavLocation::Header),
        api::get_navigation(api, NavLocation::FooterQuickLinks),
        api::get_navigation(api, NavLocation::FooterLegalLinks),
    );

    let settings_found = matches!(settings, Ok(Some(_)));
    let settings = match settings {
        Ok(Some(s)) => s,
        Ok(None) => SiteSettings::fallback(),
        Err(e) => {
            log::error!("failed to fetch site settings: {}", e);
            SiteSettings::fallback()
        }
    };

    let header_links = nav_or_default(header, NavLocation::Header);
    let quick_links = nav_or_default(quick, NavLocation::FooterQuickLinks);
    let legal_links = nav_or_default(legal, NavLocation::FooterLegalLinks);

    let header_logo_url = logo_url(
        assets,
        settings.logo_header_path.as_deref(),
        settings.logo_header_url.as_deref(),
    );
    let footer_logo_url = logo_url(
        assets,
        settings.logo_footer_path.as_deref(),
        settings.logo_footer_url.as_deref(),
    );

    let social_links = settings
        .social_media_links
        .as_ref()
        .map(|links| {
            links
                .iter()
                .map(|(key, url)| SocialLink {
                    name: capitalize(key),
                    url: url.clone(),
                    icon: icons::social_icon(key),
                })
                .collect()
        })
        .unwrap_or_default();

    let copyright = settings.copyright_line();

    Shell {
        settings,
        settings_found,
        header_links,
        quick_links,
        legal_links,
        header_logo_url,
        footer_logo_url,
        social_links,
        copyright,
    }
}

fn nav_or_default(
    result: ApiResult<Vec<NavigationItem>>,
    location: NavLocation,
) -> Vec<NavigationItem> {
    let items = match result {
        Ok(items) => active_sorted(items),
        Err(e) => {
            log::error!("failed to fetch {} navigation: {}", location, e);
            Vec::new()
        }
    };
    if !items.is_empty() {
        return items;
    }
    log::warn!("no active {} navigation items, using defaults", location);
    match location {
        NavLocation::Header => default_header_links(),
        NavLocation::FooterQuickLinks => default_quick_links(),
        NavLocation::FooterLegalLinks => default_legal_links(),
    }
}

fn logo_url(assets: &AssetUrlResolver, path: Option<&str>, url: Option<&str>) -> String {
    match path {
        Some(p) if !p.is_empty() => assets.resolve(Some(p)),
        _ => assets.resolve(url),
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
