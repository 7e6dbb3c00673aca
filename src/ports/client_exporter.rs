//! Client Exporter Port - Bulk export of the client list.
//!
//! The HTTP layer asks for a format by name; adapters render the rows.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::client::Client;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

/// Port for rendering the client list as a downloadable file.
///
/// # Contract
///
/// Implementations must:
/// - emit one row per client, in the order given
/// - emit the header (CSV) or an empty array (JSON) for an empty list
/// - name the file `clientes_YYYYMMDD.<ext>` after `exported_at`
pub trait ClientExporter: Send + Sync {
    fn export(
        &self,
        clients: &[Client],
        format: ExportFormat,
        exported_at: &Timestamp,
    ) -> Result<ExportedFile, ExportError>;
}

/// Export formats offered for the client list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported file with content and download metadata.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub content: Vec<u8>,
    pub content_type: String,
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedFile {
    pub fn new(content: Vec<u8>, format: ExportFormat, exported_at: &Timestamp) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!(
                "clientes_{}.{}",
                exported_at.format("%Y%m%d"),
                format.extension()
            ),
            format,
        }
    }
}

/// Errors that can occur during export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to render export: {0}")]
    RenderFailed(String),
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        match &err {
            ExportError::UnsupportedFormat(format) => {
                DomainError::validation("format", err.to_string())
                    .with_detail("value", format.clone())
            }
            ExportError::RenderFailed(_) => DomainError::new(ErrorCode::ExportFailed, err.to_string()),
        }
    }
}
