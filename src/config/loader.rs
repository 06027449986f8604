//! Configuration and zone table loading from disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::{ServiceConfig, ZoneTableFile};
use crate::config::validation::{validate_config, validate_zone_table, ValidationError};
use crate::zones::{ZoneEntry, ZoneId, ZoneTable};

/// Error type for configuration and zone table loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate a zone table from a TOML file.
pub fn load_zone_table(path: &Path) -> Result<ZoneTable, ConfigError> {
    let content = fs::read_to_string(path)?;
    let table = parse_zone_table(&content)?;
    tracing::info!(
        path = %path.display(),
        zones = table.len(),
        patterns = table.pattern_count(),
        "Zone table loaded"
    );
    Ok(table)
}

/// Parse and validate a zone table from TOML text.
pub fn parse_zone_table(content: &str) -> Result<ZoneTable, ConfigError> {
    let file: ZoneTableFile = toml::from_str(content)?;
    validate_zone_table(&file).map_err(ConfigError::Validation)?;

    let entries = file
        .zones
        .into_iter()
        .filter_map(|spec| {
            ZoneId::new(spec.id).map(|zone| ZoneEntry::new(zone, spec.label, spec.patterns))
        })
        .collect();
    let table = ZoneTable::new(entries);

    for (earlier, later) in table.shadowed_patterns() {
        tracing::warn!(
            earlier = earlier.declared(),
            later = later.declared(),
            "Pattern is shadowed by an earlier pattern and can never match first"
        );
    }

    Ok(table)
}

/// Resolve the zone table named by the config, falling back to the built-in table.
pub fn resolve_zone_table(config: &ServiceConfig) -> Result<Arc<ZoneTable>, ConfigError> {
    match &config.table.path {
        Some(path) => load_zone_table(Path::new(path)).map(Arc::new),
        None => {
            let table = ZoneTable::citylink();
            tracing::info!(
                zones = table.len(),
                patterns = table.pattern_count(),
                "Using built-in CityLink zone table"
            );
            Ok(table)
        }
    }
}
