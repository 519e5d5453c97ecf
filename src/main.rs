// Start of file: src/main.rs

use netdaemon::config::environment::EnvironmentVariables;
use netdaemon::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    logging::init_tracing();

    let env: &'static EnvironmentVariables = EnvironmentVariables::instance()?;

    server::run(env).await
}

// End of file: src/main.rs
