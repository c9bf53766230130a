use crate::api::{not_found_to_none, ApiClient};
use crate::common::ApiResult;
use crate::models::SiteSettings;

/// The settings record is a singleton the backend may not have seeded yet:
/// both a 404 and an explicit `data: null` come back as `None`.
pub async fn get_site_settings(api: &ApiClient) -> ApiResult<Option<SiteSettings>> {
    let settings = not_found_to_none(api.get::<Option<SiteSettings>>("/site-settings").await)?;
    Ok(settings.flatten())
}
