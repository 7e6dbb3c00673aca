//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations, one
//! file per operation. Every command handler holds the shared
//! `CommandGate` for the duration of its write.

pub mod client;
pub mod dashboard;
pub mod initiative;
pub mod mentorship;
pub mod portal;
