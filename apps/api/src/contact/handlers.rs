use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::contact::validation::{validate_contact, ContactSubmission};
use crate::errors::AppError;
use crate::state::AppState;

/// Decodes a contact submission from JSON, urlencoded or multipart bodies.
/// The page posts `FormData`, so multipart is the common case.
#[async_trait]
impl<S> FromRequest<S> for ContactSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            let mut submission = ContactSubmission::default();
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?
            {
                let name = field.name().unwrap_or_default().to_string();
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                submission.set_field(&name, value);
            }
            Ok(submission)
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(submission) = Form::<ContactSubmission>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            Ok(submission)
        } else {
            let Json(submission) = Json::<ContactSubmission>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            Ok(submission)
        }
    }
}

/// POST /api/contact
pub async fn handle_create_contact(
    State(state): State<AppState>,
    submission: ContactSubmission,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let contact =
        validate_contact(submission).map_err(|e| AppError::Validation(e.message().to_string()))?;

    let row = state.contacts.insert(contact).await?;
    info!(contact_id = %row.id, "contact saved");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Contact saved successfully" })),
    ))
}
