//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! service config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!
//! zone table file (TOML, optional)
//!     → loader.rs (parse [[zone]] blocks in order)
//!     → validation.rs (positive ids, no default-zone patterns)
//!     → ZoneTable (immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_zone_table, resolve_zone_table, ConfigError};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig, TableConfig, TimeoutConfig,
    ZoneSpec, ZoneTableFile,
};
pub use validation::ValidationError;
