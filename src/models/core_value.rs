use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CoreValue {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub icon_name: Option<String>,
}
