use axum::Json;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::contact::*;

#[utoipa::path(
    post,
    path = "/contact",
    tag = "Contact",
    operation_id = "submitContact",
    summary = "Send a contact message",
    description = "Accepts a contact form submission. All four fields are required. The message is logged; nothing is stored.",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message accepted", body = ContactResponse),
        (status = 400, description = "Missing fields (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(payload))]
pub async fn submit_contact(
    AppJson(payload): AppJson<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    validate_contact_request(&payload)?;

    tracing::info!(
        name = %payload.name,
        email = %payload.email,
        subject = %payload.subject,
        message_chars = payload.message.chars().count(),
        "Contact form submission"
    );

    Ok(Json(ContactResponse {
        success: true,
        message: "Message sent successfully!".into(),
    }))
}
