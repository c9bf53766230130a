use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub location: String,
    pub region: Option<String>,
    #[serde(default)]
    pub capacity: String,
    #[serde(rename = "type", default)]
    pub project_type: String,
    #[serde(default)]
    pub date: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub details: Vec<Value>,
    #[serde(default)]
    pub published: bool,
}

/// Filters forwarded to `GET /projects`. `None` fields and the `all`
/// sentinel are left out of the query string entirely; `is_featured` goes
/// over the wire as `1`/`0`.
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    pub project_type: Option<String>,
    pub region: Option<String>,
    pub is_featured: Option<bool>,
    pub limit: Option<u32>,
}

impl ProjectQuery {
    pub fn featured(limit: u32) -> Self {
        Self {
            is_featured: Some(true),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(t) = self.project_type.as_deref() {
            if !t.is_empty() && t != "all" {
                params.push(("type", t.to_string()));
            }
        }
        if let Some(r) = self.region.as_deref() {
            if !r.is_empty() && r != "all" {
                params.push(("region", r.to_string()));
            }
        }
        if let Some(featured) = self.is_featured {
            params.push(("is_featured", if featured { "1" } else { "0" }.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}
