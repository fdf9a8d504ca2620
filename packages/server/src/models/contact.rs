use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const MAX_MESSAGE_CHARS: usize = 10_000;

/// Request body for the contact form.
///
/// Missing fields deserialize as empty so they are reported by
/// [`validate_contact_request`] with a single message.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Collaboration")]
    pub subject: String,
    #[serde(default)]
    #[schema(example = "Loved the churn write-up.")]
    pub message: String,
}

/// Acknowledgement returned after a contact submission.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ContactResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Message sent successfully!")]
    pub message: String,
}

pub fn validate_contact_request(req: &ContactRequest) -> Result<(), AppError> {
    let fields = [&req.name, &req.email, &req.subject, &req.message];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(AppError::Validation("All fields are required".into()));
    }
    if req.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::Validation(format!(
            "Message must be at most {MAX_MESSAGE_CHARS} characters"
        )));
    }
    Ok(())
}
