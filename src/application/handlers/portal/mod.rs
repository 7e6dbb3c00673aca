//! Client-portal command and query handlers.

mod add_chat_message;
mod add_document;
mod add_meeting;
mod add_podcast;
mod add_scope_item;
mod add_timeline_event;
mod append;
mod create_service;
mod delete_service;
mod get_podcast;
mod get_service;
mod list_podcasts;
mod list_services;
mod update_service;

pub use add_chat_message::{AddChatMessageCommand, AddChatMessageHandler};
pub use add_document::{AddDocumentCommand, AddDocumentHandler};
pub use add_meeting::{AddMeetingCommand, AddMeetingHandler};
pub use add_podcast::{AddPodcastCommand, AddPodcastHandler};
pub use add_scope_item::{AddScopeItemCommand, AddScopeItemHandler};
pub use add_timeline_event::{AddTimelineEventCommand, AddTimelineEventHandler};
pub use create_service::{CreateServiceCommand, CreateServiceHandler};
pub use delete_service::{DeleteServiceCommand, DeleteServiceHandler};
pub use get_podcast::{GetPodcastHandler, GetPodcastQuery};
pub use get_service::{GetServiceHandler, GetServiceQuery};
pub use list_podcasts::ListPodcastsHandler;
pub use list_services::{ListServicesHandler, ListServicesQuery};
pub use update_service::{UpdateServiceCommand, UpdateServiceHandler};
