pub mod handler;
pub mod routes;

pub use routes::ping_routes;
