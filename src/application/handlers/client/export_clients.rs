//! ExportClientsHandler - Query handler for the client spreadsheet export.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{ClientExporter, ClientRepository, ExportFormat, ExportedFile};

/// Query for a client export in the named format (`csv` or `json`).
#[derive(Debug, Clone)]
pub struct ExportClientsQuery {
    pub format: String,
}

/// Handler that renders every client through the export port.
pub struct ExportClientsHandler {
    clients: Arc<dyn ClientRepository>,
    exporter: Arc<dyn ClientExporter>,
}

impl ExportClientsHandler {
    pub fn new(clients: Arc<dyn ClientRepository>, exporter: Arc<dyn ClientExporter>) -> Self {
        Self { clients, exporter }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` for a format other than csv/json
    /// - `ExportFailed` if rendering fails
    pub async fn handle(&self, query: ExportClientsQuery) -> Result<ExportedFile, DomainError> {
        let format: ExportFormat = query.format.parse()?;
        let clients = self.clients.find_all().await?;
        let file = self.exporter.export(&clients, format, &Timestamp::now())?;

        tracing::info!(count = clients.len(), filename = %file.filename, "Clients exported");
        Ok(file)
    }
}
