mod data;
mod health;

pub use data::{get_clients, get_vehicles};
pub use health::health_check;

use crate::AppState;
use axum::{Router, http::HeaderValue, routing::get};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// CORS for a fixed allow-list. Origins outside the list get no
/// `Access-Control-Allow-Origin` header.
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/routes/clients", get(get_clients))
        .route("/routes/vehicles", get(get_vehicles))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
