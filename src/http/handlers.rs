//! Zone API handlers.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::http::response::{
    ApiError, BatchRequest, BatchResponse, ClassifyResponse, HealthStatus, ZoneView,
};
use crate::http::server::AppState;
use crate::observability::metrics;

/// `GET /zones/{postcode}`
///
/// The literal postcode `classify` is unreachable here: `/zones/classify` is
/// the POST batch route, so a GET to it gets `405 Method Not Allowed`.
pub async fn classify_one(
    State(state): State<AppState>,
    Path(postcode): Path<String>,
) -> Json<ClassifyResponse> {
    let start = Instant::now();
    let result = state.classifier.explain(&postcode);
    metrics::record_classification(&result, start);

    tracing::debug!(
        postcode = %postcode,
        zone = %result.zone,
        matched = result.matched.is_some(),
        "Postcode classified"
    );

    Json(ClassifyResponse::new(postcode, result))
}

/// `POST /zones/classify`
pub async fn classify_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    let size = request.postcodes.len();
    if size > state.max_batch_size {
        tracing::warn!(size, max = state.max_batch_size, "Batch rejected");
        return Err(ApiError::BatchTooLarge {
            size,
            max: state.max_batch_size,
        });
    }
    metrics::record_batch(size);

    let results = request
        .postcodes
        .into_iter()
        .map(|postcode| {
            let start = Instant::now();
            let result = state.classifier.explain(&postcode);
            metrics::record_classification(&result, start);
            ClassifyResponse::new(postcode, result)
        })
        .collect();

    Ok(Json(BatchResponse { results }))
}

/// `GET /zones`
pub async fn list_zones(State(state): State<AppState>) -> Json<Vec<ZoneView>> {
    Json(
        state
            .classifier
            .table()
            .entries()
            .iter()
            .map(ZoneView::from)
            .collect(),
    )
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let table = state.classifier.table();
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        zones: table.len(),
        patterns: table.pattern_count(),
    })
}
