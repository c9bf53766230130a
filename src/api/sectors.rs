use crate::api::{not_found_to_none, ApiClient};
use crate::common::ApiResult;
use crate::models::Sector;

pub async fn list_sectors(api: &ApiClient) -> ApiResult<Vec<Sector>> {
    api.get("/sectors").await
}

pub async fn get_sector_by_slug(api: &ApiClient, slug: &str) -> ApiResult<Option<Sector>> {
    not_found_to_none(api.get(&format!("/sectors/{}", slug)).await)
}
