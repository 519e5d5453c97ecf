// Library root for the NetDaemon liveness service

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::core::server::{create_app, run, STARTUP_MESSAGE};
