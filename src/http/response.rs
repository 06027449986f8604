//! Request and response bodies for the zone API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::zones::{Classification, ZoneEntry, ZoneId};

/// One classified postcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Postcode as submitted.
    pub postcode: String,
    pub normalized: String,
    pub zone: ZoneId,
    /// Declared pattern that decided the zone; absent for the default zone.
    pub matched_pattern: Option<String>,
    /// Region label of the matching entry.
    pub region: Option<String>,
}

impl ClassifyResponse {
    pub fn new(postcode: impl Into<String>, result: Classification) -> Self {
        let (matched_pattern, region) = match result.matched {
            Some(m) => (Some(m.pattern), Some(m.label)),
            None => (None, None),
        };
        Self {
            postcode: postcode.into(),
            normalized: result.normalized,
            zone: result.zone,
            matched_pattern,
            region,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub postcodes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    /// Results in request order.
    pub results: Vec<ClassifyResponse>,
}

/// A table entry as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneView {
    pub zone: ZoneId,
    pub label: String,
    pub patterns: Vec<String>,
}

impl From<&ZoneEntry> for ZoneView {
    fn from(entry: &ZoneEntry) -> Self {
        Self {
            zone: entry.zone,
            label: entry.label.clone(),
            patterns: entry
                .patterns
                .iter()
                .map(|p| p.declared().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub zones: usize,
    pub patterns: usize,
}

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("batch of {size} postcodes exceeds the limit of {max}")]
    BatchTooLarge { size: usize, max: usize },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BatchTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
