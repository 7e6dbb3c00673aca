//! HTTP adapter for client endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateClientRequest, ListClientsParams, UpdateClientRequest};
pub use routes::client_routes;
