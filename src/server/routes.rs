//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::coord::parse_origin;
use crate::error::Error;
use crate::server::state::AppState;
use crate::suggest::{suggest, SuggestionsResponse};

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/suggestions", get(suggestions_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "MISSING_QUERY" | "MALFORMED_COORDINATE" | "INVALID_QUERY_STRING" => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError {
            error: rejection.body_text(),
            code: "INVALID_QUERY_STRING".to_string(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::MissingQuery => "MISSING_QUERY",
            Error::MalformedCoordinate(_) => "MALFORMED_COORDINATE",
            Error::DataSourceUnavailable(_) => "DATA_SOURCE_UNAVAILABLE",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Banner endpoint
///
/// GET /
async fn index_handler() -> String {
    format!("city-suggest v{}", env!("CARGO_PKG_VERSION"))
}

/// Health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of cities in the gazetteer
    pub cities: usize,
}

/// Health endpoint
///
/// GET /health
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cities: state.gazetteer.len(),
    })
}

/// Suggestion query parameters
#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    /// Name prefix
    pub q: Option<String>,
    /// Origin latitude
    pub latitude: Option<String>,
    /// Origin longitude
    pub longitude: Option<String>,
}

/// City suggestions endpoint
///
/// GET /suggestions?q=<prefix>[&latitude=<lat>&longitude=<lng>]
async fn suggestions_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SuggestionsQuery>, QueryRejection>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let Query(params) = params?;

    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or(Error::MissingQuery)?;

    let origin = parse_origin(params.latitude.as_deref(), params.longitude.as_deref())?;

    let suggestions = suggest(&state.gazetteer, &query, origin, &state.options);

    Ok(Json(suggestions.into()))
}
