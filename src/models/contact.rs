use serde::Serialize;

/// Body of `POST /contact-submissions`. Field constraints are enforced by
/// `web::forms` before this ever goes over the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
