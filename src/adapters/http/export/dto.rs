//! HTTP DTOs for export endpoints.

use serde::Deserialize;

use crate::application::handlers::client::ExportClientsQuery;

/// Request body for a client export. The format defaults to CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl From<ExportRequest> for ExportClientsQuery {
    fn from(req: ExportRequest) -> Self {
        Self { format: req.format }
    }
}

fn default_format() -> String {
    "csv".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_defaults_to_csv() {
        let req: ExportRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.format, "csv");
    }
}
