//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the zone service and
//! the on-disk format of an externalized zone table.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the zone service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address, batch limits).
    pub listener: ListenerConfig,

    /// Where the zone table comes from.
    pub table: TableConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum number of postcodes accepted in one batch request.
    pub max_batch_size: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_batch_size: 1_000,
        }
    }
}

/// Zone table source.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TableConfig {
    /// Path to a TOML zone table. `None` uses the built-in CityLink table.
    pub path: Option<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 10 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// On-disk zone table: `[[zone]]` blocks in match-priority order.
///
/// ```toml
/// [[zone]]
/// id = 4
/// label = "Northern Ireland"
/// patterns = ["BT"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZoneTableFile {
    #[serde(default, rename = "zone")]
    pub zones: Vec<ZoneSpec>,
}

/// One `[[zone]]` block.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneSpec {
    /// Zone identifier. Validated as positive.
    pub id: u32,

    #[serde(default)]
    pub label: String,

    /// Prefix patterns; empty for a territory without postcodes.
    #[serde(default)]
    pub patterns: Vec<String>,
}
