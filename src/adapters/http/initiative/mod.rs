//! HTTP adapter for initiative endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateInitiativeRequest, ListInitiativesParams, UpdateInitiativeRequest};
pub use routes::initiative_routes;
