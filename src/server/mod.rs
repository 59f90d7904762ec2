//! HTTP surface for interactive geocoding.
//!
//! Serves the same pipeline the batch loop uses, for map frontends and
//! ad-hoc lookups. Remote-tier calls share one rate gate across requests.

mod handlers;
mod state;

use axum::routing::get;
use axum::Router;
use state::AppState;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

use crate::geocode::{Geocoder, IntervalGate};

pub fn build_router() -> Router {
    let state = Arc::new(AppState {
        geocoder: Mutex::new(Geocoder::cordoba()),
        gate: Mutex::new(IntervalGate::nominatim()),
    });

    Router::new()
        .route("/api/geocode", get(handlers::geocode))
        .route("/api/places", get(handlers::places))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16) {
    let app = build_router();
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  Geocoder server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    });
}
