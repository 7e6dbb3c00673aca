//! HTTP adapter for client-portal endpoints: services, their records, and
//! podcast episodes.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddChatMessageRequest, AddDocumentRequest, AddMeetingRequest, AddPodcastRequest,
    AddScopeItemRequest, AddTimelineEventRequest, CreateServiceRequest, ListServicesParams,
    UpdateServiceRequest,
};
pub use routes::portal_routes;
