//! Metrics collection and exposition.
//!
//! # Metrics
//! - `citylink_classifications_total` (counter): lookups by zone and outcome
//! - `citylink_classification_duration_seconds` (histogram): lookup latency
//! - `citylink_batch_size` (histogram): postcodes per batch request
//!
//! # Design Decisions
//! - The classifier stays pure; the HTTP layer records metrics
//! - Recording without an installed exporter is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::zones::Classification;

/// Start the Prometheus scrape endpoint. Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one classification.
pub fn record_classification(result: &Classification, start: Instant) {
    let outcome = if result.matched.is_some() {
        "matched"
    } else {
        "default"
    };
    metrics::counter!(
        "citylink_classifications_total",
        "zone" => result.zone.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("citylink_classification_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}

pub fn record_batch(size: usize) {
    metrics::histogram!("citylink_batch_size").record(size as f64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::ZoneClassifier;

    #[test]
    fn test_records_zone_and_outcome() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let classifier = ZoneClassifier::citylink();

        metrics::with_local_recorder(&recorder, || {
            record_classification(&classifier.explain("BT1 1AA"), Instant::now());
            record_classification(&classifier.explain("M1 1AA"), Instant::now());
            record_batch(2);
        });

        let rendered = handle.render();
        let counter = |zone: &str, outcome: &str| {
            rendered.lines().any(|line| {
                line.starts_with("citylink_classifications_total{")
                    && line.contains(zone)
                    && line.contains(outcome)
                    && line.ends_with(" 1")
            })
        };
        assert!(counter(r#"zone="4""#, r#"outcome="matched""#), "{}", rendered);
        assert!(counter(r#"zone="1""#, r#"outcome="default""#), "{}", rendered);
        assert!(rendered.contains("citylink_classification_duration_seconds"));
        assert!(rendered.contains("citylink_batch_size"));
    }
}
