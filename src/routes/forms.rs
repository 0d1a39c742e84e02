//! Public form intake
//!
//! Bodies are read as raw JSON so that a malformed body, a wrongly typed field
//! and a missing field all come back as the same 400 envelope.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use burmuda_shared::FieldErrors;
use burmuda_submission::{SubmitConsultationInput, SubmitContactInput};
use serde_json::{Value, json};

use crate::{error::ApiError, routes::AppState};

const CONTACT_MESSAGE: &str = "Thank you for your message! We'll get back to you within 24 hours.";
const CONSULTATION_MESSAGE: &str =
    "Consultation request received! We'll contact you within 24 hours to schedule your free session.";

/// POST /api/contact
pub async fn contact(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let input = SubmitContactInput::from_json(read_body(payload)?)?;
    let id = state.command.submit_contact(input).await?;

    Ok(Json(json!({
        "success": true,
        "message": CONTACT_MESSAGE,
        "submissionId": id,
    })))
}

/// POST /api/consultation
pub async fn consultation(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let input = SubmitConsultationInput::from_json(read_body(payload)?)?;
    let id = state.command.submit_consultation(input).await?;

    Ok(Json(json!({
        "success": true,
        "message": CONSULTATION_MESSAGE,
        "submissionId": id,
    })))
}

fn read_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let mut errors = FieldErrors::new();
            errors.set("body", "invalid_json", rejection.body_text());

            Err(errors.into())
        }
    }
}
