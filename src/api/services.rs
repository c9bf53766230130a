use crate::api::{not_found_to_none, ApiClient};
use crate::common::ApiResult;
use crate::models::Service;

pub async fn list_services(api: &ApiClient) -> ApiResult<Vec<Service>> {
    api.get("/services").await
}

pub async fn get_service_by_slug(api: &ApiClient, slug: &str) -> ApiResult<Option<Service>> {
    not_found_to_none(api.get(&format!("/services/{}", slug)).await)
}
