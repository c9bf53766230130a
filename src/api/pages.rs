use crate::api::{not_found_to_none, ApiClient};
use crate::common::ApiResult;
use crate::models::PageData;

pub async fn list_pages(api: &ApiClient) -> ApiResult<Vec<PageData>> {
    api.get("/pages").await
}

/// `None` when the backend has no page under this slug.
pub async fn get_page_by_slug(api: &ApiClient, slug: &str) -> ApiResult<Option<PageData>> {
    not_found_to_none(api.get(&format!("/pages/{}", slug)).await)
}
