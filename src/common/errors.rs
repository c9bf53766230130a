use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised by the content API client. Everything here is caught at the
/// aggregation boundary in `web::handlers` and converted to a benign default
/// before any template sees it.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response. `message` carries the backend-provided message
    /// (validation `errors` maps are flattened into one string) or the
    /// generic `API error: <status>` fallback.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// True when the backend answered 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        match self {
            ApiError::Backend { status, .. } => *status == 404,
            ApiError::Http(e) => e.status().is_some_and(|s| s.as_u16() == 404),
        }
    }
}
