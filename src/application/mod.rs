//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers serialize through the [`CommandGate`]; query handlers
//! read without it.

pub mod gate;
pub mod handlers;
pub mod seed;

pub use gate::{CommandGate, CommandGuard};
pub use seed::{SampleDataSeeder, SeedReport};
