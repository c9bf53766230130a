use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{find_block_data, BlockKind, ContentBlock};

#[derive(Debug, Clone, Deserialize)]
pub struct PageData {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<Vec<String>>,
    pub header_image_path: Option<String>,
    pub header_image_url: Option<String>,
    #[serde(default)]
    pub published: bool,
}

impl PageData {
    /// First block of the given kind, deserialized into its typed payload.
    /// A malformed payload is logged and counts as absent, so callers fall
    /// back to their defaults the same way they do for a missing block.
    pub fn block<T: DeserializeOwned>(&self, kind: BlockKind) -> Option<T> {
        let data = find_block_data(Some(&self.content), kind)?;
        match serde_json::from_value(data.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("malformed {} block on page '{}': {}", kind, self.slug, e);
                None
            }
        }
    }

    /// Same as `block` but falls back to the payload's `Default`.
    pub fn block_or_default<T: DeserializeOwned + Default>(&self, kind: BlockKind) -> T {
        self.block(kind).unwrap_or_default()
    }
}
