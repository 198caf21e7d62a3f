use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Ingestion endpoint
        .route("/ingest/quote", post(handlers::ingest_quote))
        // Query endpoint
        .route(
            "/market_data/last_price/:symbol",
            get(handlers::get_last_price),
        )
        // Health endpoint
        .route("/health", get(handlers::health_check))
        // Add state and CORS
        .with_state(state)
        .layer(cors)
}
