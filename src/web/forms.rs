use serde::Deserialize;

use crate::models::{ContactSubmission, ProjectQuery};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Field errors in form order; an empty list means the form may be
    /// submitted. Runs entirely locally, before any network call.
    pub fn validate(&self) -> Vec<(&'static str, &'static str)> {
        let mut errors = Vec::new();
        if self.name.chars().count() < 2 {
            errors.push(("name", "Name must be at least 2 characters"));
        }
        if !validate_email(&self.email) {
            errors.push(("email", "Please enter a valid email address"));
        }
        if self.subject.chars().count() < 5 {
            errors.push(("subject", "Subject must be at least 5 characters"));
        }
        if self.message.chars().count() < 10 {
            errors.push(("message", "Message must be at least 10 characters"));
        }
        errors
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

/// Email validation
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || local.len() > 64 || domain.is_empty() {
        return false;
    }

    // Domain must have at least one dot
    if !domain.contains('.') {
        return false;
    }

    true
}

/// Project filter selections as they arrive on `/experience`. The URL is the
/// single source of truth: the form mirrors it, and the handler redirects
/// non-canonical queries to their canonical form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub region: Option<String>,
}

impl FilterQuery {
    /// Selected type, with the `all` sentinel and blanks treated as no
    /// selection.
    pub fn selected_type(&self) -> Option<String> {
        normalized(&self.project_type)
    }

    pub fn selected_region(&self) -> Option<String> {
        normalized(&self.region)
    }

    /// Canonical query string: sentinel and empty selections drop out, so
    /// `all` never appears in a final URL.
    pub fn canonical_query(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(t) = self.selected_type() {
            params.push(("type", t));
        }
        if let Some(r) = self.selected_region() {
            params.push(("region", r));
        }
        serde_urlencoded::to_string(params).unwrap_or_default()
    }

    pub fn to_project_query(&self) -> ProjectQuery {
        ProjectQuery {
            project_type: self.selected_type(),
            region: self.selected_region(),
            ..ProjectQuery::default()
        }
    }
}

/// True when the raw query names either filter key, even with an empty or
/// sentinel value.
pub fn has_filter_params(query: &str) -> bool {
    query.split('&').any(|pair| {
        let key = pair.split('=').next().unwrap_or("");
        key == "type" || key == "region"
    })
}

fn normalized(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "all")
        .map(str::to_string)
}
