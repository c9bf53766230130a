use crate::api::{not_found_to_none, ApiClient};
use crate::common::ApiResult;
use crate::models::{Project, ProjectQuery};

pub async fn list_projects(api: &ApiClient, query: &ProjectQuery) -> ApiResult<Vec<Project>> {
    api.get_with("/projects", &query.to_params()).await
}

pub async fn list_project_types(api: &ApiClient) -> ApiResult<Vec<String>> {
    api.get("/project-types").await
}

pub async fn list_project_regions(api: &ApiClient) -> ApiResult<Vec<String>> {
    api.get("/project-regions").await
}

pub async fn get_project_by_slug(api: &ApiClient, slug: &str) -> ApiResult<Option<Project>> {
    not_found_to_none(api.get(&format!("/projects/{}", slug)).await)
}
