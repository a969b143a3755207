//! HTTP server module for the health and greeting endpoints.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
