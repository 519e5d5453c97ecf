// Start of file: /src/core/logging.rs

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "netdaemon=info,tower_http=debug";

// Initialize the tracing subscriber. Logs go to stderr so stdout only carries
// the startup announcement.
pub fn init_tracing() {
    let env_filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

// End of file: /src/core/logging.rs
