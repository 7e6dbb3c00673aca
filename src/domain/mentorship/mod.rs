//! Mentorship domain module.
//!
//! A mentorship is a paid engagement with one client. Its lifecycle drives
//! the client's status: the first mentorship activates a prospect and a
//! completed mentorship completes the client.

mod aggregate;
mod view;

pub use aggregate::{Mentorship, NewMentorship};
pub use view::{MentorshipView, UNKNOWN_CLIENT_NAME};
