//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::planner::find_cheapest_route_by_id;

use super::dto::*;
use super::state::AppState;

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/locations", get(search_locations))
        .route("/api/route", get(find_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search locations by title prefix.
async fn search_locations(
    State(state): State<AppState>,
    query: Result<Query<LocationSearchRequest>, QueryRejection>,
) -> Result<Json<LocationSearchResponse>, AppError> {
    let Query(req) = query?;
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
    let network = state.network.snapshot().await;

    let exclude = req
        .exclude
        .as_deref()
        .and_then(|title| network.find_by_title(title))
        .and_then(|id| network.location(id));

    let locations = network
        .search(&req.q, exclude)
        .into_iter()
        .take(limit)
        .map(LocationResult::from)
        .collect();

    Ok(Json(LocationSearchResponse { locations }))
}

/// Find the cheapest route between two locations, by title.
async fn find_route(
    State(state): State<AppState>,
    query: Result<Query<RouteRequest>, QueryRejection>,
) -> Result<Json<RouteResponse>, AppError> {
    let Query(req) = query?;
    if req.from.is_empty() || req.to.is_empty() {
        return Err(AppError::BadRequest {
            message: "both 'from' and 'to' are required".to_string(),
        });
    }

    let network = state.network.snapshot().await;

    let start = network
        .find_by_title(&req.from)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown location: {}", req.from),
        })?;
    let destination = network
        .find_by_title(&req.to)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown location: {}", req.to),
        })?;

    let route = find_cheapest_route_by_id(start, destination, &network).ok_or_else(|| {
        AppError::NotFound {
            message: format!("no route from {} to {}", req.from, req.to),
        }
    })?;

    Ok(Json(RouteResponse::from(&route)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
