use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub id: i64,
    pub slug: String,
    pub title: String,
    /// Rich-editor output, may contain markup.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub published: bool,
}
