use crate::api::ApiClient;
use crate::common::ApiResult;
use crate::models::CoreValue;

pub async fn list_core_values(api: &ApiClient) -> ApiResult<Vec<CoreValue>> {
    api.get("/core-values").await
}
