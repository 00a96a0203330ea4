use crate::{AppState, api, health};

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors_enabled = state.cors_enabled;

    let router = Router::new()
        // Identity relay; non-POST methods are answered by the handler
        .route("/api/identity", any(api::identity::identity_handler))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state);

    if cors_enabled {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}
