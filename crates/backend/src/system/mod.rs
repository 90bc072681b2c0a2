pub mod auth;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod tracing;
