//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, error types, the repository
//! port and the input policy that form the vocabulary of the practice
//! management domain.

mod client_status;
mod engagement_status;
mod errors;
mod ids;
mod initiative_status;
mod input_policy;
mod priority;
mod repository;
mod status_label;
mod timestamp;

pub use client_status::ClientStatus;
pub use engagement_status::EngagementStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClientId, EpisodeId, InitiativeId, MentorshipId, RawId, SequentialId, ServiceId};
pub use initiative_status::InitiativeStatus;
pub use input_policy::InputPolicy;
pub use priority::{Priority, PriorityInput};
pub use repository::{AggregateRoot, EntityBuilder, Repository};
pub use status_label::StatusLabel;
pub use timestamp::Timestamp;
