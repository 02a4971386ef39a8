pub mod error;
pub mod handlers;
pub mod observability;
pub mod routes;
pub mod server;
pub mod types;
