use crate::api::{not_found_to_none, ApiClient};
use crate::common::ApiResult;
use crate::models::{JobOpening, JobQuery};

pub async fn list_job_openings(api: &ApiClient, query: &JobQuery) -> ApiResult<Vec<JobOpening>> {
    api.get_with("/job-openings", &query.to_params()).await
}

pub async fn get_job_opening_by_slug(
    api: &ApiClient,
    slug: &str,
) -> ApiResult<Option<JobOpening>> {
    not_found_to_none(api.get(&format!("/job-openings/{}", slug)).await)
}
