//! Shared helpers for the Mitra conformance test suite.
//!
//! Provides [`spawn_server`], which binds a `TcpListener` on an ephemeral
//! port and serves an in-process stub server on it, and [`client_for`],
//! which builds an [`ApiClient`] pointed at that server.

use mitra_client::{ApiClient, ClientConfig};
use mitra_server::{build_router, ServerConfig};

/// Message the conformance server answers `GET /api/ping` with.
pub const PING_MESSAGE: &str = "conformance ping";

/// Start an ephemeral in-process server and return its origin, e.g.
/// `http://127.0.0.1:51234`.
///
/// The server runs in a background `tokio` task bound to an OS-assigned
/// port on `127.0.0.1`.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound or the server fails to start.
pub async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");

    let config = ServerConfig {
        bind_addr: addr,
        ping_message: PING_MESSAGE.into(),
    };
    let router = build_router(config);

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("conformance server error");
    });

    format!("http://{addr}")
}

/// A client for the server at `origin`.
///
/// # Panics
///
/// Panics if `origin` is not a valid http URL.
pub fn client_for(origin: &str) -> ApiClient {
    ApiClient::new(&ClientConfig::new(origin)).expect("build API client")
}
