use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use burmuda_shared::FieldErrors;
use burmuda_submission::{FilterQuery, Kind, Status};
use serde_json::{Value, json};

use crate::{error::ApiError, routes::AppState};

/// One `type` or `status` parameter of the listing.
#[derive(Debug, PartialEq)]
enum Filter<T> {
    /// Absent or empty
    Any,
    Only(T),
    /// Unknown or repeated value
    Nothing,
}

impl<T: FromStr> Filter<T> {
    fn read(params: &[(String, String)], key: &str) -> Self {
        let mut values = params.iter().filter(|(k, _)| k == key).map(|(_, v)| v);

        match (values.next(), values.next()) {
            (None, _) => Filter::Any,
            (Some(value), None) if value.is_empty() => Filter::Any,
            (Some(value), None) => value.parse().map_or(Filter::Nothing, Filter::Only),
            (Some(_), Some(_)) => Filter::Nothing,
        }
    }

    /// `None` when nothing can match.
    fn into_query(self) -> Option<Option<T>> {
        match self {
            Filter::Any => Some(None),
            Filter::Only(value) => Some(Some(value)),
            Filter::Nothing => None,
        }
    }
}

/// GET /api/submissions - Newest first, optionally filtered by type and status
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        let mut errors = FieldErrors::new();
        errors.set("query", "invalid_query", rejection.body_text());
        ApiError::from(errors)
    })?;

    let kind = Filter::<Kind>::read(&params, "type").into_query();
    let status = Filter::<Status>::read(&params, "status").into_query();

    let submissions = match (kind, status) {
        (Some(kind), Some(status)) => state.query.filter(FilterQuery { kind, status }).await,
        _ => {
            tracing::debug!(?params, "Submission filter matches nothing");
            Vec::new()
        }
    };

    Ok(Json(json!({
        "success": true,
        "count": submissions.len(),
        "submissions": submissions,
    })))
}

/// GET /api/submissions/stats - Counters for the admin badges
pub async fn stats(State(state): State<AppState>) -> Json<Value> {
    let stat = state.query.find_stat().await;

    Json(json!({
        "success": true,
        "total": stat.total,
        "new": stat.new,
        "read": stat.read,
        "responded": stat.responded,
    }))
}

/// PUT /api/submissions/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let status = state.command.mark_read(&id).await?;
    tracing::info!(submission_id = %id, %status, "Submission marked as read");

    Ok(Json(json!({
        "success": true,
        "message": "Submission marked as read",
    })))
}

/// PUT /api/submissions/{id}/responded
pub async fn mark_responded(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.command.mark_responded(&id).await?;
    tracing::info!(submission_id = %id, "Submission marked as responded");

    Ok(Json(json!({
        "success": true,
        "message": "Submission marked as responded",
    })))
}
