//! Initiative domain module.
//!
//! Initiatives are content and marketing tasks (podcast episodes to record,
//! talks to prepare, networking events) ranked by priority.

mod aggregate;
mod category;

pub use aggregate::{Initiative, NewInitiative};
pub use category::InitiativeCategory;
