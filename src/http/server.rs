//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve on a listener until shutdown is signalled

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::request::{make_span, UuidRequestId};
use crate::zones::ZoneClassifier;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: ZoneClassifier,
    pub max_batch_size: usize,
}

/// HTTP server for the zone API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server over the given classifier.
    pub fn new(config: ServiceConfig, classifier: ZoneClassifier) -> Self {
        let state = AppState {
            classifier,
            max_batch_size: config.listener.max_batch_size,
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/zones", get(handlers::list_zones))
            .route("/zones/classify", post(handlers::classify_batch))
            .route("/zones/{postcode}", get(handlers::classify_one))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The configured router, for embedding in another service.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::{BatchResponse, ClassifyResponse, ZoneView};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn server() -> HttpServer {
        let mut config = ServiceConfig::default();
        config.listener.max_batch_size = 3;
        HttpServer::new(config, ZoneClassifier::citylink())
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_classify_one() {
        let response = server()
            .router()
            .oneshot(
                Request::get("/zones/BT1%201AA")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));

        let body: ClassifyResponse = body_json(response).await;
        assert_eq!(body.postcode, "BT1 1AA");
        assert_eq!(body.normalized, "bt11aa");
        assert_eq!(body.zone.get(), 4);
        assert_eq!(body.matched_pattern.as_deref(), Some("BT"));
        assert_eq!(body.region.as_deref(), Some("Northern Ireland"));
    }

    #[tokio::test]
    async fn test_client_request_id_is_echoed() {
        let response = server()
            .router()
            .oneshot(
                Request::get("/zones/M11AA")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["x-request-id"], "abc-123");

        let body: ClassifyResponse = body_json(response).await;
        assert_eq!(body.zone.get(), 1);
        assert!(body.matched_pattern.is_none());
    }

    #[tokio::test]
    async fn test_batch_limit() {
        let response = server()
            .router()
            .oneshot(
                Request::post("/zones/classify")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"postcodes":["a","b","c","d"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_batch_preserves_order() {
        let response = server()
            .router()
            .oneshot(
                Request::post("/zones/classify")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"postcodes":["EC1A 1AA","","IM1 1AA"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: BatchResponse = body_json(response).await;
        let zones: Vec<u32> = body.results.iter().map(|r| r.zone.get()).collect();
        assert_eq!(zones, vec![7, 1, 6]);
    }

    #[tokio::test]
    async fn test_get_on_batch_route_is_not_a_lookup() {
        let response = server()
            .router()
            .oneshot(Request::get("/zones/classify").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_list_zones() {
        let response = server()
            .router()
            .oneshot(Request::get("/zones").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let zones: Vec<ZoneView> = body_json(response).await;
        assert_eq!(zones.len(), 6);
        assert_eq!(zones[0].label, "Scottish Highlands");
        assert!(zones[3].patterns.is_empty());
    }
}
