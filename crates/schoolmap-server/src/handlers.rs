//! Request handlers.
//!
//! Handlers do three things in sequence: run the validation gate, call the
//! record store, and serialize the result. All distance logic lives in
//! `schoolmap_core::geo`; all status mapping lives here.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use schoolmap_core::{geo, validation, Error};

use crate::api::{AddSchoolResponse, ListSchoolsParams, ListSchoolsResponse, StatusResponse};
use crate::server::AppState;

/// Liveness probe.
pub async fn root() -> &'static str {
    "Server Up and Running!"
}

/// Health probe.
pub async fn health() -> &'static str {
    "OK"
}

/// Service status: uptime and school count.
pub async fn status(State(state): State<Arc<AppState>>) -> Response {
    match state.store.count().await {
        Ok(schools) => Json(StatusResponse {
            status: "running".to_string(),
            uptime_seconds: state.start_time.elapsed().as_secs(),
            schools,
        })
        .into_response(),
        Err(err) => store_failure(&err),
    }
}

/// Registers a school.
///
/// The body is taken as raw JSON so the validation gate controls every
/// rejection message; coordinates may be numbers or numeric strings. A body
/// that is not JSON at all is rejected here with the same
/// `{message, success: false}` shape as every other failure.
pub async fn add_school(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(reason = %rejection, "Malformed request body");
            return error_response(StatusCode::BAD_REQUEST, &rejection.body_text());
        }
    };

    let school = match validation::parse_add_school(&body) {
        Ok(school) => school,
        Err(err) => return rejection(&err),
    };

    match state.store.insert(school).await {
        Ok(id) => {
            tracing::debug!(id, "School added");
            Json(AddSchoolResponse::new(id)).into_response()
        }
        Err(err) => store_failure(&err),
    }
}

/// Lists all schools ordered by distance from the caller's coordinate.
pub async fn list_schools(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListSchoolsParams>,
) -> Response {
    let origin = match validation::parse_list_query(
        params.latitude.as_deref(),
        params.longitude.as_deref(),
    ) {
        Ok(origin) => origin,
        Err(err) => return rejection(&err),
    };

    match state.store.fetch_all().await {
        Ok(schools) => {
            let ranked = geo::rank_by_distance(origin, schools);
            tracing::debug!(
                latitude = origin.latitude,
                longitude = origin.longitude,
                count = ranked.len(),
                "Schools ranked"
            );
            Json(ListSchoolsResponse::new(ranked)).into_response()
        }
        Err(err) => store_failure(&err),
    }
}

/// Builds the canonical `{message, success: false}` error body.
fn error_response(status: StatusCode, message: &str) -> Response {
    let body = Json(serde_json::json!({
        "message": message,
        "success": false,
    }));
    (status, body).into_response()
}

fn rejection(err: &Error) -> Response {
    tracing::debug!(reason = %err, "Request rejected");
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

fn store_failure(err: &Error) -> Response {
    tracing::error!(error = %err, "Store operation failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
}
