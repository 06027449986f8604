//! Zone table types.
//!
//! # Design Decisions
//! - Entries are kept in a `Vec`: declaration order is match priority
//! - Patterns are normalized once, at construction
//! - Immutable after construction; shared via `Arc`

use std::fmt;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::zones::builtin::CITYLINK_ZONES;
use crate::zones::normalize::normalize;

/// Carrier delivery zone identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ZoneId(u32);

impl ZoneId {
    /// Rest of the serviced territory. Returned when no pattern matches.
    pub const DEFAULT: ZoneId = ZoneId(1);

    /// Returns `None` for zero.
    pub const fn new(id: u32) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Self(id))
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

impl TryFrom<u32> for ZoneId {
    type Error = InvalidZoneId;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::new(id).ok_or(InvalidZoneId)
    }
}

impl From<ZoneId> for u32 {
    fn from(id: ZoneId) -> Self {
        id.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zone identifiers must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("zone id must be a positive integer")]
pub struct InvalidZoneId;

/// A postcode prefix, kept in both declared and normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixPattern {
    declared: String,
    normalized: String,
}

impl PrefixPattern {
    pub fn new(declared: impl Into<String>) -> Self {
        let declared = declared.into();
        let normalized = normalize(&declared);
        Self {
            declared,
            normalized,
        }
    }

    /// The pattern as written in the table, e.g. `"EC1A 1"`.
    pub fn declared(&self) -> &str {
        &self.declared
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Positional prefix comparison against an already-normalized postcode.
    /// A postcode shorter than the pattern never matches.
    pub fn matches(&self, normalized_postcode: &str) -> bool {
        normalized_postcode.starts_with(&self.normalized)
    }
}

/// One zone and the prefixes that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneEntry {
    pub zone: ZoneId,
    pub label: String,
    pub patterns: Vec<PrefixPattern>,
}

impl ZoneEntry {
    pub fn new<I, S>(zone: ZoneId, label: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            zone,
            label: label.into(),
            patterns: patterns.into_iter().map(PrefixPattern::new).collect(),
        }
    }

    /// First pattern (in declaration order) matching the normalized postcode.
    pub fn find_match(&self, normalized_postcode: &str) -> Option<&PrefixPattern> {
        self.patterns.iter().find(|p| p.matches(normalized_postcode))
    }
}

/// Ordered zone-to-prefix mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneTable {
    entries: Vec<ZoneEntry>,
}

static CITYLINK: LazyLock<Arc<ZoneTable>> = LazyLock::new(|| {
    let entries = CITYLINK_ZONES
        .iter()
        .filter_map(|&(id, label, patterns)| {
            ZoneId::new(id).map(|zone| ZoneEntry::new(zone, label, patterns.iter().copied()))
        })
        .collect();
    Arc::new(ZoneTable::new(entries))
});

impl ZoneTable {
    pub fn new(entries: Vec<ZoneEntry>) -> Self {
        Self { entries }
    }

    /// The built-in CityLink table, built once per process.
    pub fn citylink() -> Arc<ZoneTable> {
        Arc::clone(&CITYLINK)
    }

    /// Entries in declaration (match-priority) order.
    pub fn entries(&self) -> &[ZoneEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pattern_count(&self) -> usize {
        self.entries.iter().map(|e| e.patterns.len()).sum()
    }

    /// Every zone a lookup can return: the default plus each zone that
    /// declares at least one pattern. Sorted, without duplicates.
    pub fn reachable_zones(&self) -> Vec<ZoneId> {
        let mut zones: Vec<ZoneId> = std::iter::once(ZoneId::DEFAULT)
            .chain(
                self.entries
                    .iter()
                    .filter(|e| !e.patterns.is_empty())
                    .map(|e| e.zone),
            )
            .collect();
        zones.sort_unstable();
        zones.dedup();
        zones
    }

    /// Pairs of patterns where an earlier one shadows (is a prefix of) a
    /// later one, so the later pattern can never be the first match.
    pub fn shadowed_patterns(&self) -> Vec<(&PrefixPattern, &PrefixPattern)> {
        let all: Vec<&PrefixPattern> = self.entries.iter().flat_map(|e| &e.patterns).collect();
        let mut shadowed = Vec::new();
        for (i, later) in all.iter().enumerate() {
            if let Some(earlier) = all[..i].iter().find(|p| p.matches(later.normalized())) {
                shadowed.push((*earlier, *later));
            }
        }
        shadowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: u32) -> ZoneId {
        ZoneId::new(id).unwrap()
    }

    #[test]
    fn test_zone_id_rejects_zero() {
        assert!(ZoneId::new(0).is_none());
        assert_eq!(ZoneId::try_from(0), Err(InvalidZoneId));
        assert_eq!(ZoneId::new(7).map(ZoneId::get), Some(7));
        assert!(ZoneId::DEFAULT.is_default());
    }

    #[test]
    fn test_zone_id_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&zone(4)).unwrap(), "4");
        assert_eq!(serde_json::from_str::<ZoneId>("6").unwrap(), zone(6));
        assert!(serde_json::from_str::<ZoneId>("0").is_err());
    }

    #[test]
    fn test_pattern_normalized_at_construction() {
        let pattern = PrefixPattern::new("EC1A 1");
        assert_eq!(pattern.declared(), "EC1A 1");
        assert_eq!(pattern.normalized(), "ec1a1");
        assert!(pattern.matches("ec1a1aa"));
        assert!(!pattern.matches("ec1a"));
        assert!(!pattern.matches(""));
    }

    #[test]
    fn test_builtin_table_order_and_sizes() {
        let table = ZoneTable::citylink();
        let zones: Vec<u32> = table.entries().iter().map(|e| e.zone.get()).collect();
        assert_eq!(zones, vec![2, 3, 4, 5, 6, 7]);
        assert!(table.entries()[3].patterns.is_empty());
        assert_eq!(table.entries()[2].patterns[0].declared(), "BT");
    }

    #[test]
    fn test_builtin_table_is_shared() {
        assert!(Arc::ptr_eq(&ZoneTable::citylink(), &ZoneTable::citylink()));
    }

    #[test]
    fn test_reachable_zones_skip_empty_entries() {
        let reachable = ZoneTable::citylink().reachable_zones();
        assert_eq!(
            reachable,
            vec![zone(1), zone(2), zone(3), zone(4), zone(6), zone(7)]
        );
    }

    #[test]
    fn test_shadowed_patterns() {
        let table = ZoneTable::new(vec![
            ZoneEntry::new(zone(4), "broad", ["SW1"]),
            ZoneEntry::new(zone(7), "narrow", ["SW1A 1", "W1"]),
        ]);
        let shadowed = table.shadowed_patterns();
        assert_eq!(shadowed.len(), 1);
        assert_eq!(shadowed[0].0.declared(), "SW1");
        assert_eq!(shadowed[0].1.declared(), "SW1A 1");
    }
}
