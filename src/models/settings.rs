use std::collections::BTreeMap;

use chrono::{Datelike, Utc};
use serde::Deserialize;

/// Singleton record owned by the backend. Every field is optional on the
/// wire; `fallback()` supplies the copy the site ships with when the fetch
/// fails or returns nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub id: i64,
    pub site_name: Option<String>,
    pub site_slogan: Option<String>,
    pub logo_header_path: Option<String>,
    pub logo_header_url: Option<String>,
    pub logo_footer_path: Option<String>,
    pub logo_footer_url: Option<String>,
    pub favicon_path: Option<String>,
    pub favicon_url: Option<String>,
    pub apple_touch_icon_path: Option<String>,
    pub default_meta_title: Option<String>,
    pub default_meta_description: Option<String>,
    pub default_meta_keywords: Option<Vec<String>>,
    pub default_og_image_path: Option<String>,
    pub default_og_image_url: Option<String>,
    pub google_verification_code: Option<String>,
    pub theme_color: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_address: Option<String>,
    pub footer_description: Option<String>,
    pub footer_copyright_text: Option<String>,
    pub social_media_links: Option<BTreeMap<String, String>>,
    pub office_hours_raw: Option<String>,
    pub map_iframe_url: Option<String>,
    pub map_title: Option<String>,
    pub contact_page_info_title: Option<String>,
    pub contact_page_form_title: Option<String>,
}

impl SiteSettings {
    /// Shipped defaults, used whenever the settings fetch fails or the
    /// backend has no record yet.
    pub fn fallback() -> Self {
        let mut socials = BTreeMap::new();
        socials.insert("linkedin".to_string(), "#".to_string());
        socials.insert("facebook".to_string(), "#".to_string());
        socials.insert("twitter".to_string(), "#".to_string());

        Self {
            site_name: Some("KahraGen Engineering".into()),
            footer_description: Some(
                "Powering Progress with Sustainable Engineering. We deliver innovative \
                 solutions across conventional power, renewable energy, and industrial \
                 automation sectors."
                    .into(),
            ),
            contact_address: Some("Jumeirah Lakes Towers, Dubai, UAE".into()),
            contact_phone: Some("+971 4 123 4567".into()),
            contact_email: Some("projects@kahragen.com".into()),
            social_media_links: Some(socials),
            ..Self::default()
        }
    }

    pub fn site_name(&self) -> &str {
        self.site_name.as_deref().unwrap_or("KahraGen Engineering")
    }

    /// Copyright string for the footer, defaulting to the current year.
    pub fn copyright_line(&self) -> String {
        match &self.footer_copyright_text {
            Some(text) if !text.is_empty() => text.clone(),
            _ => format!(
                "\u{a9} {} KahraGen Engineering Consultancy. All rights reserved.",
                Utc::now().year()
            ),
        }
    }

    /// Office hours as display lines: split on newlines, trimmed, blanks
    /// dropped.
    pub fn office_hours(&self) -> Vec<String> {
        display_lines(self.office_hours_raw.as_deref())
    }

    /// Postal address as display lines, split the same way.
    pub fn address_lines(&self) -> Vec<String> {
        display_lines(self.contact_address.as_deref())
    }
}

fn display_lines(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
