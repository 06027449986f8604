//! CityLink delivery zone classification.
//!
//! Maps a UK (or adjacent-territory) postcode to a carrier delivery zone using
//! an ordered table of postcode prefixes. The first matching prefix in table
//! order decides the zone; anything unmatched is zone 1.
//!
//! ```
//! use citylink_zones::ZoneClassifier;
//!
//! let classifier = ZoneClassifier::citylink();
//! assert_eq!(classifier.classify("BT1 1AA").get(), 4);
//! assert_eq!(classifier.classify("M1 1AA").get(), 1);
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod zones;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use zones::{normalize, ZoneClassifier, ZoneId, ZoneTable};
