use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── GET /api/geocode ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GeocodeQuery {
    pub name: Option<String>,
    pub remote: Option<bool>,
}

#[derive(Serialize)]
pub struct GeocodeResponse {
    pub name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub source: String,
}

pub async fn geocode(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResponse>, ApiError> {
    let start = Instant::now();

    let name = params.name.as_deref().unwrap_or("").trim().to_string();
    if name.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Missing 'name' parameter"));
    }
    let allow_remote = params.remote.unwrap_or(true);

    // The pipeline claims a rate-gate slot (and may sleep) before any remote
    // call, so run it off the async workers.
    let resolution = {
        let state = state.clone();
        let name = name.clone();
        tokio::task::spawn_blocking(move || {
            let geocoder = state.geocoder.lock().unwrap();
            let mut gate = state.gate.lock().unwrap();
            geocoder.resolve(&name, allow_remote, &mut *gate)
        })
        .await
        .map_err(|e| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Geocoding task failed: {}", e),
            )
        })?
    };

    eprintln!(
        "GET /api/geocode?name={} -> {} ({:.1}ms)",
        name,
        resolution.source,
        start.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(Json(GeocodeResponse {
        name,
        lat: resolution.coordinate.map(|c| c.lat),
        lon: resolution.coordinate.map(|c| c.lon),
        source: resolution.source.to_string(),
    }))
}

// ─── GET /api/places ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct PlaceInfo {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

pub async fn places(State(state): State<Arc<AppState>>) -> Json<Vec<PlaceInfo>> {
    let geocoder = state.geocoder.lock().unwrap();
    let list = geocoder
        .gazetteer()
        .sorted_entries()
        .into_iter()
        .map(|(name, coord)| PlaceInfo {
            name: name.to_string(),
            lat: coord.lat,
            lon: coord.lon,
        })
        .collect();
    Json(list)
}
