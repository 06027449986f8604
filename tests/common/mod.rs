//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use citylink_zones::config::ServiceConfig;
use citylink_zones::zones::{ZoneClassifier, ZoneTable};
use citylink_zones::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A zone-server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server over the given table. The listener is bound before this
/// returns, so requests can be sent immediately.
pub async fn start_server(config: ServiceConfig, table: Arc<ZoneTable>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, ZoneClassifier::new(table));
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
