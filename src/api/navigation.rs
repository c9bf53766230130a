use crate::api::ApiClient;
use crate::common::ApiResult;
use crate::models::{NavLocation, NavigationItem};

pub async fn get_navigation(
    api: &ApiClient,
    location: NavLocation,
) -> ApiResult<Vec<NavigationItem>> {
    api.get(&format!("/navigation/{}", location)).await
}
