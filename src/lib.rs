//! Ana Conecta - business management backend for a solo consulting practice.
//!
//! Tracks clients, mentorship engagements, initiatives and the client
//! portal (services with their meetings, documents, chat, scope and
//! timeline, plus podcast episodes). Storage is in memory.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
