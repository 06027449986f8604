//! Classification behaviour against the built-in CityLink table.

use std::sync::Arc;
use std::thread;

use citylink_zones::zones::{normalize, ZoneClassifier, ZoneEntry, ZoneId, ZoneTable};

fn zone(id: u32) -> ZoneId {
    ZoneId::new(id).unwrap()
}

#[test]
fn test_documented_examples() {
    let classifier = ZoneClassifier::citylink();
    assert_eq!(classifier.classify("BT1 1AA"), zone(4));
    assert_eq!(classifier.classify("bt11aa"), zone(4));
    assert_eq!(classifier.classify("IV10 8AB"), zone(2));
    assert_eq!(classifier.classify("EC1A 1AA"), zone(7));
    assert_eq!(classifier.classify("M1 1AA"), ZoneId::DEFAULT);
    assert_eq!(classifier.classify(""), ZoneId::DEFAULT);
}

#[test]
fn test_every_declared_pattern_selects_a_reachable_zone() {
    let classifier = ZoneClassifier::citylink();
    let table = classifier.table();
    for entry in table.entries() {
        for pattern in &entry.patterns {
            let postcode = format!("{} 1AA", pattern.declared());
            let result = classifier.explain(&postcode);
            assert_ne!(result.zone, ZoneId::DEFAULT, "{}", postcode);
            // Shadowed patterns resolve to the earlier, shorter prefix.
            let matched = result.matched.expect("pattern matched nothing");
            assert!(normalize(&postcode).starts_with(&normalize(&matched.pattern)));
        }
    }
}

#[test]
fn test_no_postcode_territory_is_unreachable() {
    let classifier = ZoneClassifier::citylink();
    let republic = classifier
        .table()
        .entries()
        .iter()
        .find(|e| e.zone == zone(5))
        .expect("zone 5 declared");
    assert!(republic.patterns.is_empty());
    for postcode in ["D02 X285", "T12 AB34", "", "5", "ireland"] {
        assert_ne!(classifier.classify(postcode), zone(5));
    }
}

#[test]
fn test_overlapping_pair_resolves_by_declaration_order() {
    let forward = ZoneClassifier::new(Arc::new(ZoneTable::new(vec![
        ZoneEntry::new(zone(6), "Wide", ["SW1"]),
        ZoneEntry::new(zone(7), "Narrow", ["SW1A 1"]),
    ])));
    let reversed = ZoneClassifier::new(Arc::new(ZoneTable::new(vec![
        ZoneEntry::new(zone(7), "Narrow", ["SW1A 1"]),
        ZoneEntry::new(zone(6), "Wide", ["SW1"]),
    ])));

    assert_eq!(forward.classify("SW1A 1AA"), zone(6));
    assert_eq!(reversed.classify("SW1A 1AA"), zone(7));
    assert_eq!(reversed.classify("SW1P 3BU"), zone(6));
}

#[test]
fn test_concurrent_readers_share_one_table() {
    let classifier = ZoneClassifier::citylink();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let classifier = classifier.clone();
            thread::spawn(move || {
                (0..500)
                    .map(|_| classifier.classify("ZE1 0AA"))
                    .all(|z| z == zone(3))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
