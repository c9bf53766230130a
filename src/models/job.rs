use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JobOpening {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    /// Rich-editor output, already HTML.
    #[serde(default)]
    pub description: String,
    pub responsibilities: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub posted_date: Option<String>,
    pub closing_date: Option<String>,
    pub application_url: Option<String>,
    pub application_instructions: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

/// Filters forwarded to `GET /job-openings`; `None` fields are omitted.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub department: Option<String>,
    pub location: Option<String>,
}

impl JobQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(d) = self.department.as_deref() {
            if !d.is_empty() {
                params.push(("department", d.to_string()));
            }
        }
        if let Some(l) = self.location.as_deref() {
            if !l.is_empty() {
                params.push(("location", l.to_string()));
            }
        }
        params
    }
}
