//! HTTP adapter for bulk client export.

mod dto;
mod handlers;
mod routes;

pub use dto::ExportRequest;
pub use routes::export_routes;
