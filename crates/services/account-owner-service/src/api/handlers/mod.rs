//! HTTP request handlers.

pub mod account_handler;
pub mod diagnostics_handler;
pub mod health_handler;
pub mod owner_handler;

pub use account_handler::account_routes;
pub use diagnostics_handler::diagnostics_routes;
pub use health_handler::health_routes;
pub use owner_handler::owner_routes;
