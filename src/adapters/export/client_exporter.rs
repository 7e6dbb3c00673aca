//! CSV and JSON rendering of the client list.

use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::foundation::{StatusLabel, Timestamp};
use crate::ports::{ClientExporter, ExportError, ExportFormat, ExportedFile};

const HEADERS: [&str; 6] = ["Nome", "Email", "Telefone", "Status", "Notas", "Data_Criacao"];

/// One exported line. Field names are the spreadsheet column titles.
#[derive(Debug, Serialize)]
struct ClientRow<'a> {
    #[serde(rename = "Nome")]
    name: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Telefone")]
    phone: &'a str,
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "Notas")]
    notes: &'a str,
    #[serde(rename = "Data_Criacao")]
    created: String,
}

impl<'a> From<&'a Client> for ClientRow<'a> {
    fn from(client: &'a Client) -> Self {
        Self {
            name: client.name(),
            email: client.email(),
            phone: client.phone(),
            status: client.status().as_str(),
            notes: client.notes(),
            created: client.created_at().format("%d/%m/%Y"),
        }
    }
}

/// Renders clients with the `csv` crate or `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularClientExporter;

impl TabularClientExporter {
    pub fn new() -> Self {
        Self
    }

    fn render_csv(rows: &[ClientRow<'_>]) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADERS).map_err(render_failed)?;
        for row in rows {
            writer
                .write_record([
                    row.name,
                    row.email,
                    row.phone,
                    row.status,
                    row.notes,
                    row.created.as_str(),
                ])
                .map_err(render_failed)?;
        }
        writer
            .into_inner()
            .map_err(|e| ExportError::RenderFailed(e.to_string()))
    }

    fn render_json(rows: &[ClientRow<'_>]) -> Result<Vec<u8>, ExportError> {
        serde_json::to_vec_pretty(rows).map_err(render_failed)
    }
}

fn render_failed(err: impl std::fmt::Display) -> ExportError {
    ExportError::RenderFailed(err.to_string())
}

impl ClientExporter for TabularClientExporter {
    fn export(
        &self,
        clients: &[Client],
        format: ExportFormat,
        exported_at: &Timestamp,
    ) -> Result<ExportedFile, ExportError> {
        let rows: Vec<ClientRow<'_>> = clients.iter().map(ClientRow::from).collect();
        let content = match format {
            ExportFormat::Csv => Self::render_csv(&rows)?,
            ExportFormat::Json => Self::render_json(&rows)?,
        };
        tracing::debug!(rows = rows.len(), %format, "Rendered client export");
        Ok(ExportedFile::new(content, format, exported_at))
    }
}
