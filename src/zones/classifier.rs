//! Postcode to zone classification.
//!
//! # Responsibilities
//! - Normalize the query postcode
//! - Walk the table in declaration order, patterns in declaration order
//! - Return the zone of the first matching pattern, else the default zone
//!
//! # Design Decisions
//! - First match wins, not longest match
//! - Infallible: any string yields a zone
//! - No side effects; safe to share across threads

use std::sync::Arc;

use serde::Serialize;

use crate::zones::normalize::normalize;
use crate::zones::table::{ZoneId, ZoneTable};

/// Classifies postcodes against an injected, immutable zone table.
#[derive(Debug, Clone)]
pub struct ZoneClassifier {
    table: Arc<ZoneTable>,
}

/// The pattern that decided a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedPattern {
    pub pattern: String,
    pub label: String,
}

/// An explained lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub zone: ZoneId,
    pub normalized: String,
    pub matched: Option<MatchedPattern>,
}

impl ZoneClassifier {
    pub fn new(table: Arc<ZoneTable>) -> Self {
        Self { table }
    }

    /// Classifier over the built-in CityLink table.
    pub fn citylink() -> Self {
        Self::new(ZoneTable::citylink())
    }

    pub fn table(&self) -> &ZoneTable {
        &self.table
    }

    /// Zone for a raw postcode in any casing or spacing.
    pub fn classify(&self, raw_postcode: &str) -> ZoneId {
        let normalized = normalize(raw_postcode);
        self.table
            .entries()
            .iter()
            .find(|entry| entry.find_match(&normalized).is_some())
            .map(|entry| entry.zone)
            .unwrap_or(ZoneId::DEFAULT)
    }

    /// Same walk as [`classify`](Self::classify), also reporting what matched.
    pub fn explain(&self, raw_postcode: &str) -> Classification {
        let normalized = normalize(raw_postcode);
        let hit = self.table.entries().iter().find_map(|entry| {
            entry.find_match(&normalized).map(|pattern| {
                (
                    entry.zone,
                    MatchedPattern {
                        pattern: pattern.declared().to_string(),
                        label: entry.label.clone(),
                    },
                )
            })
        });

        match hit {
            Some((zone, matched)) => Classification {
                zone,
                normalized,
                matched: Some(matched),
            },
            None => Classification {
                zone: ZoneId::DEFAULT,
                normalized,
                matched: None,
            },
        }
    }

    /// Classify a batch, preserving input order.
    pub fn classify_many<I, S>(&self, postcodes: I) -> Vec<ZoneId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        postcodes
            .into_iter()
            .map(|p| self.classify(p.as_ref()))
            .collect()
    }
}

impl Default for ZoneClassifier {
    fn default() -> Self {
        Self::citylink()
    }
}
