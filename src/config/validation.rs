//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Validate zone tables (positive ids, no patterns on the default zone,
//!   no patterns that match everything)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: config → Result<(), Vec<ValidationError>>
//! - Overlapping patterns are legal (first match wins); the loader only warns

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{ServiceConfig, ZoneTableFile};
use crate::zones::{normalize, ZoneId};

/// A single semantic problem in a config or zone table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("zone #{index}: id must be a positive integer")]
    ZeroZoneId { index: usize },

    #[error("zone #{index}: the default zone {default} cannot declare patterns")]
    DefaultZoneHasPatterns { index: usize, default: ZoneId },

    #[error("zone #{index}: pattern '{pattern}' is empty after normalization")]
    EmptyPattern { index: usize, pattern: String },
}

/// Validate a service configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(
        &mut errors,
        "listener.bind_address",
        &config.listener.bind_address,
    );
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }
    if config.listener.max_batch_size == 0 {
        errors.push(ValidationError::Zero {
            field: "listener.max_batch_size",
        });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero {
            field: "timeouts.request_secs",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a zone table file before it is turned into a `ZoneTable`.
pub fn validate_zone_table(file: &ZoneTableFile) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, spec) in file.zones.iter().enumerate() {
        let Some(zone) = ZoneId::new(spec.id) else {
            errors.push(ValidationError::ZeroZoneId { index });
            continue;
        };

        if zone.is_default() && !spec.patterns.is_empty() {
            errors.push(ValidationError::DefaultZoneHasPatterns {
                index,
                default: ZoneId::DEFAULT,
            });
        }

        for pattern in &spec.patterns {
            if normalize(pattern).is_empty() {
                errors.push(ValidationError::EmptyPattern {
                    index,
                    pattern: pattern.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
