//! Mentorship command and query handlers.

mod client_lifecycle;
mod create_mentorship;
mod delete_mentorship;
mod get_mentorship;
mod list_mentorships;
mod update_mentorship;

pub use client_lifecycle::ClientLifecycle;
pub use create_mentorship::{CreateMentorshipCommand, CreateMentorshipHandler};
pub use delete_mentorship::{DeleteMentorshipCommand, DeleteMentorshipHandler};
pub use get_mentorship::{GetMentorshipHandler, GetMentorshipQuery};
pub use list_mentorships::{ListMentorshipsHandler, ListMentorshipsQuery};
pub use update_mentorship::{UpdateMentorshipCommand, UpdateMentorshipHandler};
