//! tests/mod.rs
//! A shared test helper to spawn the NetDaemon router on an ephemeral port.

use netdaemon::config::environment::EnvironmentVariables;
use netdaemon::core::server::{create_app, serve};

use tokio::net::TcpListener as TokioTcpListener;
use axum::Router;

/// Spawns the app on a random unused port and returns its base URL.
#[allow(dead_code)]
pub fn spawn_app() -> String {
    // * Same router the binary builds, with default configuration.
    let app: Router = create_app(&EnvironmentVariables::default());

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
