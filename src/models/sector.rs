use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Sector {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub published: bool,
}
