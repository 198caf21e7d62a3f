use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::state::AppState;
use crate::api::types::{HealthResponse, IngestResponse, LastPriceResponse};
use crate::domain::Quote;
use crate::error::QuotesinkError;

/// POST /ingest/quote -- cache the price, then persist the record
pub async fn ingest_quote(
    State(state): State<AppState>,
    Json(quote): Json<Quote>,
) -> std::result::Result<(StatusCode, Json<IngestResponse>), (StatusCode, String)> {
    let result = state.ingest.ingest(quote).await.map_err(error_response)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(IngestResponse {
            status: "accepted".to_string(),
            symbol: result.symbol,
        }),
    ))
}

/// GET /market_data/last_price/{symbol} -- cache-only lookup
pub async fn get_last_price(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> std::result::Result<Json<LastPriceResponse>, (StatusCode, String)> {
    let price = state
        .query
        .last_price(&symbol)
        .await
        .map_err(error_response)?;

    Ok(Json(LastPriceResponse { symbol, price }))
}

/// GET /health -- live per-store probes, always 200
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.health.check().await.into())
}

/// Single place where core errors become HTTP statuses.
fn error_response(err: QuotesinkError) -> (StatusCode, String) {
    let status = match &err {
        QuotesinkError::Validation(_) | QuotesinkError::Json(_) => StatusCode::UNPROCESSABLE_ENTITY,
        QuotesinkError::NotFound { .. } => StatusCode::NOT_FOUND,
        QuotesinkError::CacheWrite(_)
        | QuotesinkError::CacheRead(_)
        | QuotesinkError::CacheUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}
