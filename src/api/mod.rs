// Start of file: /src/api/mod.rs

pub mod ping;

// End of file: /src/api/mod.rs
