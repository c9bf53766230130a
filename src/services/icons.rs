//! Icon-name lookup for backend-authored content.
//!
//! Content records reference icons by name (`"Zap"`, `"Wind"`, ...). Those
//! names map onto a fixed sprite sheet shipped at `static/icons.svg`; the
//! functions here return sprite symbol ids, never trusting the backend with
//! an open-ended namespace. Unrecognized names fall back to a per-context
//! default symbol.

/// Recognized icon names and their sprite symbol ids.
const ICONS: &[(&str, &str)] = &[
    ("Award", "award"),
    ("BarChart", "bar-chart"),
    ("Briefcase", "briefcase"),
    ("Calendar", "calendar"),
    ("CheckCircle", "check-circle"),
    ("ClipboardCheck", "clipboard-check"),
    ("Cog", "cog"),
    ("Droplets", "droplets"),
    ("ExternalLink", "external-link"),
    ("Factory", "factory"),
    ("GitMerge", "git-merge"),
    ("Globe", "globe"),
    ("GraduationCap", "graduation-cap"),
    ("HardHat", "hard-hat"),
    ("HeartPulse", "heart-pulse"),
    ("HelpCircle", "help-circle"),
    ("Leaf", "leaf"),
    ("Lightbulb", "lightbulb"),
    ("Mail", "mail"),
    ("MapPin", "map-pin"),
    ("Phone", "phone"),
    ("Settings", "settings"),
    ("ShieldCheck", "shield-check"),
    ("Sun", "sun"),
    ("Users", "users"),
    ("Wind", "wind"),
    ("Zap", "zap"),
];

pub fn symbol(name: &str) -> Option<&'static str> {
    ICONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, id)| *id)
}

fn symbol_or(name: &str, default: &'static str) -> &'static str {
    match symbol(name) {
        Some(id) => id,
        None => {
            if !name.is_empty() {
                log::warn!("icon '{}' not recognized, falling back to {}", name, default);
            }
            default
        }
    }
}

pub fn sector_icon(name: &str) -> &'static str {
    symbol_or(name, "help-circle")
}

pub fn service_icon(name: &str) -> &'static str {
    symbol_or(name, "cog")
}

pub fn benefit_icon(name: &str) -> &'static str {
    symbol_or(name, "help-circle")
}

pub fn core_value_icon(name: &str) -> &'static str {
    symbol_or(name, "check-circle")
}

/// Social platforms get matched on the settings map key, case-insensitive.
pub fn social_icon(platform: &str) -> &'static str {
    match platform.to_lowercase().as_str() {
        "linkedin" => "linkedin",
        "facebook" => "facebook",
        "twitter" => "twitter",
        _ => "external-link",
    }
}
