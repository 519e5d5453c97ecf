// Start of file: /src/core/mod.rs

/*
* Process-level plumbing: logging setup and the server bootstrap.
*/

pub mod logging;
pub mod server;

// End of file: /src/core/mod.rs
