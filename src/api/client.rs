use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{ApiError, ApiResult};

/// Envelope every backend response arrives in.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub message: Option<String>,
}

/// Thin client for the content backend. One shared connection pool, JSON in
/// and out, no retries and no caching: every call is a single fetch whose
/// failure the caller decides how to absorb.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and unwrap the `{ data }` envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get_with(path, &[]).await
    }

    /// GET with query parameters; empty lists add no query string.
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .header("Accept", "application/json")
            .query(params)
            .send()
            .await?;

        let envelope: Envelope<T> = check(response).await?.json().await?;
        Ok(envelope.data)
    }

    /// POST a JSON body. Returns the whole envelope so callers can surface
    /// the backend message.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(self.url(path))
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }
}

/// Maps a backend 404 to `None`, keeping every other failure as an error.
pub fn not_found_to_none<T>(result: ApiResult<T>) -> ApiResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

async fn check(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Backend {
        status: status.as_u16(),
        message: backend_message(&body, status),
    })
}

/// Digs the human-readable message out of an error body: a top-level
/// `message` when present, otherwise a Laravel `errors` map flattened into
/// one line, otherwise the generic `API error: <status>`.
fn backend_message(body: &str, status: StatusCode) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let Some(parsed) = parsed else {
        return format!("API error: {}", status.as_u16());
    };

    if let Some(errors) = parsed.get("errors").and_then(Value::as_object) {
        let messages: Vec<&str> = errors
            .values()
            .filter_map(Value::as_array)
            .flatten()
            .filter_map(Value::as_str)
            .collect();
        if !messages.is_empty() {
            return messages.join(" ");
        }
    }

    match parsed.get("message").and_then(Value::as_str) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("API error: {}", status.as_u16()),
    }
}
