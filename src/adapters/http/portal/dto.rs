//! HTTP DTOs for client-portal endpoints.

use serde::Deserialize;

use crate::adapters::http::params::blank_as_none;
use crate::application::handlers::portal::{
    AddChatMessageCommand, AddDocumentCommand, AddMeetingCommand, AddPodcastCommand,
    AddScopeItemCommand, AddTimelineEventCommand, CreateServiceCommand, ListServicesQuery,
    UpdateServiceCommand,
};
use crate::domain::foundation::{RawId, ServiceId};

// ════════════════════════════════════════════════════════════════════════════
// Services
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateServiceRequest {
    pub title: Option<String>,
    pub client_id: Option<RawId>,
    pub status: Option<String>,
    pub description: Option<String>,
}

impl From<CreateServiceRequest> for CreateServiceCommand {
    fn from(req: CreateServiceRequest) -> Self {
        Self {
            title: req.title.unwrap_or_default(),
            client_id: req.client_id,
            status: req.status,
            description: req.description.unwrap_or_default(),
        }
    }
}

/// Partial update. `price` only applies together with `installments`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateServiceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub price: Option<String>,
    pub installments: Option<u32>,
}

impl UpdateServiceRequest {
    pub fn into_command(self, service_id: ServiceId) -> UpdateServiceCommand {
        UpdateServiceCommand {
            title: self.title,
            description: self.description,
            status: self.status,
            price: self.price,
            installments: self.installments,
            ..UpdateServiceCommand::new(service_id)
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListServicesParams {
    pub client_id: Option<String>,
}

impl From<ListServicesParams> for ListServicesQuery {
    fn from(params: ListServicesParams) -> Self {
        Self {
            client_id: blank_as_none(params.client_id).map(RawId::Text),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Service records
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddChatMessageRequest {
    pub sender: Option<String>,
    pub message: Option<String>,
}

impl AddChatMessageRequest {
    pub fn into_command(self, service_id: ServiceId) -> AddChatMessageCommand {
        AddChatMessageCommand {
            service_id,
            sender: self.sender.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddMeetingRequest {
    pub date: Option<String>,
    pub topic: Option<String>,
    pub notes: Option<String>,
}

impl AddMeetingRequest {
    pub fn into_command(self, service_id: ServiceId) -> AddMeetingCommand {
        AddMeetingCommand {
            service_id,
            date: self.date.unwrap_or_default(),
            topic: self.topic.unwrap_or_default(),
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddDocumentRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub file_path: Option<String>,
}

impl AddDocumentRequest {
    pub fn into_command(self, service_id: ServiceId) -> AddDocumentCommand {
        AddDocumentCommand {
            service_id,
            kind: self.kind.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            file_path: self.file_path,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddScopeItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl AddScopeItemRequest {
    pub fn into_command(self, service_id: ServiceId) -> AddScopeItemCommand {
        AddScopeItemCommand {
            service_id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }
}

/// `date` is ISO-8601; omitted means now.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddTimelineEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

impl AddTimelineEventRequest {
    pub fn into_command(self, service_id: ServiceId) -> AddTimelineEventCommand {
        AddTimelineEventCommand {
            service_id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            date: blank_as_none(self.date),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Podcasts
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddPodcastRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub youtube_link: Option<String>,
    pub summary: Option<String>,
}

impl From<AddPodcastRequest> for AddPodcastCommand {
    fn from(req: AddPodcastRequest) -> Self {
        Self {
            title: req.title.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
            date: req.date.unwrap_or_default(),
            youtube_link: req.youtube_link.unwrap_or_default(),
            summary: req.summary.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_request_reads_type_field() {
        let req: AddDocumentRequest =
            serde_json::from_value(json!({"type": "contract", "name": "c.pdf"})).unwrap();
        let cmd = req.into_command(ServiceId::new(1));
        assert_eq!(cmd.kind, "contract");
        assert_eq!(cmd.name, "c.pdf");
        assert!(cmd.file_path.is_none());
    }

    #[test]
    fn update_request_passes_price_and_installments_through() {
        let req: UpdateServiceRequest =
            serde_json::from_value(json!({"price": "R$ 900,00", "installments": 2})).unwrap();
        let cmd = req.into_command(ServiceId::new(5));
        assert_eq!(cmd.service_id, ServiceId::new(5));
        assert_eq!(cmd.price.as_deref(), Some("R$ 900,00"));
        assert_eq!(cmd.installments, Some(2));
        assert!(cmd.status.is_none());
    }

    #[test]
    fn timeline_request_treats_blank_date_as_absent() {
        let req: AddTimelineEventRequest =
            serde_json::from_value(json!({"title": "t", "description": "d", "date": ""}))
                .unwrap();
        assert!(req.into_command(ServiceId::new(1)).date.is_none());
    }

    #[test]
    fn list_params_wrap_client_id_as_raw_text() {
        let query: ListServicesQuery = ListServicesParams {
            client_id: Some("9".to_string()),
        }
        .into();
        assert_eq!(query.client_id, Some(RawId::Text("9".to_string())));
    }
}
