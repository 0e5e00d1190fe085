//! HTTP request handlers.

pub mod anime_handler;
pub mod health_handler;

pub use anime_handler::anime_routes;
pub use health_handler::health_routes;
