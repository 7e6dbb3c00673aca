//! Client domain module.
//!
//! Clients are the people the practice sells to. Their status moves from
//! prospect to active to completed, either by explicit update or as a side
//! effect of the mentorship lifecycle.

mod aggregate;

pub use aggregate::{Client, NewClient};
