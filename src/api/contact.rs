use serde_json::Value;

use crate::api::{ApiClient, Envelope};
use crate::common::ApiResult;
use crate::models::ContactSubmission;

/// Sends a contact submission. On success returns the backend's thank-you
/// message when it provides one (either inside `data` or alongside it).
pub async fn submit_contact_form(
    api: &ApiClient,
    submission: &ContactSubmission,
) -> ApiResult<Option<String>> {
    let ack: Envelope<Value> = api.post("/contact-submissions", submission).await?;
    let message = ack
        .data
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or(ack.message);
    Ok(message)
}
