//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `client` - Clients and their prospect/active/completed lifecycle
//! - `initiative` - Prioritized content and marketing tasks
//! - `mentorship` - Paid engagements and the client-name read model
//! - `portal` - Client-portal services, their records, and podcast episodes

pub mod client;
pub mod foundation;
pub mod initiative;
pub mod mentorship;
pub mod portal;
