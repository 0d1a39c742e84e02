use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use burmuda_shared::FieldErrors;
use serde_json::json;
use thiserror::Error;

/// Errors returned by the JSON API, rendered as `{success: false, ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<burmuda_shared::Error> for ApiError {
    fn from(err: burmuda_shared::Error) -> Self {
        match err {
            burmuda_shared::Error::Validate(errors) => ApiError::Validation(errors),
            burmuda_shared::Error::NotFound(what) => ApiError::NotFound(what),
            burmuda_shared::Error::Unknown(e) => ApiError::Internal(e),
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                tracing::debug!(%errors, "Rejected form payload");

                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "message": "Please fill in all required fields correctly.",
                        "errors": errors,
                    })),
                )
                    .into_response()
            }
            ApiError::NotFound(what) => {
                tracing::debug!(resource = %what, "Not found");

                (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "success": false,
                        "message": not_found_message(&what),
                    })),
                )
                    .into_response()
            }
            ApiError::Internal(e) => {
                tracing::error!(error = ?e, "Internal server error");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Something went wrong. Please try again later.",
                    })),
                )
                    .into_response()
            }
        }
    }
}

/// "submission 01J..." becomes "Submission not found"; the identifier stays in
/// the logs.
fn not_found_message(what: &str) -> String {
    let resource = what.split_whitespace().next().unwrap_or("Resource");
    let mut chars = resource.chars();

    match chars.next() {
        Some(first) => format!("{}{} not found", first.to_uppercase(), chars.as_str()),
        None => "Resource not found".to_string(),
    }
}
