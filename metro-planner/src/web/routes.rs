//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::Distance;
use crate::fare::FareClass;
use crate::network::NetworkError;
use crate::planner::Planner;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations/transfers", get(transfer_stations))
        .route("/stations/nearby", get(nearby_stations))
        .route("/stations/exists/:name", get(station_exists))
        .route("/paths", get(all_paths))
        .route("/route", get(route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List stations served by more than one line.
async fn transfer_stations(State(state): State<AppState>) -> Json<TransferStationsResponse> {
    Json(TransferStationsResponse::from_network(&state.network))
}

/// Check whether a station exists.
async fn station_exists(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<StationExistsResponse> {
    let exists = state.network.station_exists(&name);
    Json(StationExistsResponse { name, exists })
}

/// Run a planner query on the blocking pool.
///
/// Path enumeration can take arbitrarily long on a dense network, so
/// queries never run on the async workers.
async fn run_query<T, F>(state: &AppState, query: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(Planner<'_>) -> Result<T, NetworkError> + Send + 'static,
{
    let network = Arc::clone(&state.network);
    let config = Arc::clone(&state.config);

    let result = tokio::task::spawn_blocking(move || query(Planner::new(&network, &config)))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("query task failed: {e}"),
        })?;
    Ok(result?)
}

/// Stations within a radius of a start station.
async fn nearby_stations(
    State(state): State<AppState>,
    Query(req): Query<NearbyRequest>,
) -> Result<Json<NearbyResponse>, AppError> {
    let max = Distance::from_km(req.max_km).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let response = run_query(&state, move |planner| {
        let found = planner.nearby_stations(&req.station, max)?;
        Ok(NearbyResponse::new(&req.station, req.max_km, &found))
    })
    .await?;
    Ok(Json(response))
}

/// Every simple path between two stations.
async fn all_paths(
    State(state): State<AppState>,
    Query(req): Query<PathsRequest>,
) -> Result<Json<PathsResponse>, AppError> {
    let response = run_query(&state, move |planner| {
        let set = planner.all_paths(&req.from, &req.to)?;
        Ok(PathsResponse::from_path_set(&set))
    })
    .await?;
    Ok(Json(response))
}

/// Shortest route with itinerary and fares.
async fn route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let class = req
        .fare_class
        .as_deref()
        .map(FareClass::parse)
        .unwrap_or_default();

    let result = run_query(&state, move |planner| {
        planner.shortest_path(&req.from, &req.to)
    })
    .await?;
    Ok(Json(RouteResponse::from_result(&result, class)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Malformed query parameters (400)
    BadRequest { message: String },

    /// A station name the network doesn't know (404)
    NotFound { message: String },

    /// The query itself failed to run (500)
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => {
                error!(error = %message, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        if !status.is_server_error() {
            warn!(status = %status, error = %message, "Request failed");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
