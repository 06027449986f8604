//! Delivery zone classification.
//!
//! # Data Flow
//! ```text
//! raw postcode ("EC1A 1AA")
//!     → normalize.rs (strip spaces, ASCII lowercase → "ec1a1aa")
//!     → classifier.rs (walk table in declaration order)
//!     → table.rs (entry patterns, pre-normalized)
//!     → first matching entry's ZoneId, or ZoneId::DEFAULT
//!
//! Table construction (once per process):
//!     builtin.rs constants, or a TOML file via config::loader
//!     → ZoneTable (immutable)
//!     → shared via Arc to every classifier
//! ```
//!
//! # Design Decisions
//! - Declaration order is match priority; overlapping prefixes resolve to
//!   whichever appears first
//! - No regex, no wildcards: plain positional prefix comparison

mod builtin;
pub mod classifier;
pub mod normalize;
pub mod table;

pub use classifier::{Classification, MatchedPattern, ZoneClassifier};
pub use normalize::normalize;
pub use table::{InvalidZoneId, PrefixPattern, ZoneEntry, ZoneId, ZoneTable};
