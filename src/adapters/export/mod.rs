//! Export adapters.

mod client_exporter;

pub use client_exporter::TabularClientExporter;
