//! HTTP adapter for the dashboard.

mod handlers;
mod routes;

pub use routes::dashboard_routes;
