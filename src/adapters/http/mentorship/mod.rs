//! HTTP adapter for mentorship endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateMentorshipRequest, ListMentorshipsParams, UpdateMentorshipRequest};
pub use routes::mentorship_routes;
