//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! Each extends the generic `Repository<T, ID>` with the filtered queries
//! its listing needs:
//!
//! - `ClientRepository` - clients by status
//! - `InitiativeRepository` - initiatives by category and status
//! - `MentorshipRepository` - mentorships by client and status
//! - `ClientServiceRepository` - portal services by client
//! - `PodcastRepository` - podcast episodes
//!
//! ## Export Ports
//!
//! - `ClientExporter` - renders the client list as CSV or JSON

mod client_exporter;
mod client_repository;
mod initiative_repository;
mod mentorship_repository;
mod portal_repository;

pub use client_exporter::{ClientExporter, ExportError, ExportFormat, ExportedFile};
pub use client_repository::ClientRepository;
pub use initiative_repository::{InitiativeFilter, InitiativeRepository};
pub use mentorship_repository::{MentorshipFilter, MentorshipRepository};
pub use portal_repository::{ClientServiceRepository, PodcastRepository};
