// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};
use tracing::{error, info};

use crate::api::ping::ping_routes;
use crate::config::environment::EnvironmentVariables;
use crate::utils::error_handler::handle_global_error;

/// Exact line written to stdout on every start.
pub const STARTUP_MESSAGE: &str = "NetDaemon starting...";

/// Creates the application router with the default middleware stack
pub fn create_app(env: &EnvironmentVariables) -> Router {
    with_default_layers(
        Router::new().merge(ping_routes()),
        Duration::from_secs(env.default_timeout_seconds),
    )
}

/// Request logging, panic recovery and a request timeout around `router`.
pub fn with_default_layers(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::new())
            .layer(HandleErrorLayer::new(handle_global_error))
            .layer(TimeoutLayer::new(timeout))
    )
}

pub fn announce_startup() {
    println!("{STARTUP_MESSAGE}");
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = env.bind_address();
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Serves `app` on `listener` until a shutdown signal arrives
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    info!(address = %listener.local_addr()?, "NetDaemon listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Builds the router, announces startup and serves only when enabled
pub async fn run(env: &EnvironmentVariables) -> Result<()> {
    let app: Router = create_app(env);

    announce_startup();

    if !env.serve {
        info!("Serving disabled (set SERVE=true to listen on {})", env.bind_address());
        return Ok(());
    }

    let listener: TcpListener = setup_listener(env).await?;
    serve(listener, app).await
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install TERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}
