//! Client portal domain module.
//!
//! A [`ClientService`] is the client-facing record of one contracted
//! engagement. It owns its meetings, documents, chat history, scope and
//! timeline; none of those have an identity of their own. Podcast episodes
//! are published to the same portal.

mod podcast;
mod records;
mod service;
mod status;

pub use podcast::{NewEpisode, PodcastEpisode};
pub use records::{ChatMessage, Document, Meeting, ScopeItem, TimelineEvent};
pub use service::{ClientService, NewClientService};
pub use status::ServiceStatus;
