use serde::Deserialize;

/// Placement slots the backend files navigation items under.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NavLocation {
    Header,
    FooterQuickLinks,
    FooterLegalLinks,
}

impl NavLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::FooterQuickLinks => "footer_quick_links",
            Self::FooterLegalLinks => "footer_legal_links",
        }
    }
}

impl std::fmt::Display for NavLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavigationItem {
    pub id: i64,
    pub label: String,
    pub url: String,
    #[serde(default = "default_target")]
    pub target: String,
    pub location: String,
    #[serde(default)]
    pub order: i32,
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub is_active: bool,
}

fn default_target() -> String {
    "_self".to_string()
}

impl NavigationItem {
    fn link(id: i64, label: &str, url: &str, location: NavLocation, order: i32) -> Self {
        Self {
            id,
            label: label.to_string(),
            url: url.to_string(),
            target: default_target(),
            location: location.to_string(),
            order,
            parent_id: None,
            is_active: true,
        }
    }
}

/// Keeps active items only, in `order` order. Callers fall back to the
/// shipped defaults when this comes back empty.
pub fn active_sorted(mut items: Vec<NavigationItem>) -> Vec<NavigationItem> {
    items.retain(|i| i.is_active);
    items.sort_by_key(|i| i.order);
    items
}

pub fn default_header_links() -> Vec<NavigationItem> {
    vec![
        NavigationItem::link(1, "Home", "/", NavLocation::Header, 1),
        NavigationItem::link(2, "About Us", "/about", NavLocation::Header, 2),
        NavigationItem::link(3, "Sectors", "/sectors", NavLocation::Header, 3),
        NavigationItem::link(4, "Services", "/services", NavLocation::Header, 4),
        NavigationItem::link(5, "Experience", "/experience", NavLocation::Header, 5),
        NavigationItem::link(6, "Contact", "/contact", NavLocation::Header, 6),
    ]
}

pub fn default_quick_links() -> Vec<NavigationItem> {
    vec![
        NavigationItem::link(101, "About Us", "/about", NavLocation::FooterQuickLinks, 1),
        NavigationItem::link(102, "Services", "/services", NavLocation::FooterQuickLinks, 2),
        NavigationItem::link(103, "Sectors", "/sectors", NavLocation::FooterQuickLinks, 3),
        NavigationItem::link(104, "Experience", "/experience", NavLocation::FooterQuickLinks, 4),
        NavigationItem::link(105, "Careers", "/careers", NavLocation::FooterQuickLinks, 5),
        NavigationItem::link(106, "Contact", "/contact", NavLocation::FooterQuickLinks, 6),
    ]
}

pub fn default_legal_links() -> Vec<NavigationItem> {
    vec![
        NavigationItem::link(201, "Privacy Policy", "/privacy-policy", NavLocation::FooterLegalLinks, 1),
        NavigationItem::link(202, "Terms of Service", "/terms", NavLocation::FooterLegalLinks, 2),
    ]
}
