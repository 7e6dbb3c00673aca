//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `memory` - in-memory repositories with per-type id allocation
//! - `export` - CSV and JSON client export
//! - `http` - axum REST API

pub mod export;
pub mod http;
pub mod memory;

pub use export::TabularClientExporter;
pub use memory::InMemoryRepository;
