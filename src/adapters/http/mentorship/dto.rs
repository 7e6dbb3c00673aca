//! HTTP DTOs for mentorship endpoints.

use serde::Deserialize;
use serde_json::Value;

use crate::adapters::http::params::blank_as_none;
use crate::application::handlers::mentorship::{
    CreateMentorshipCommand, ListMentorshipsQuery, UpdateMentorshipCommand,
};
use crate::domain::foundation::{MentorshipId, RawId};

/// Request to open a mentorship. `client_id` may be a number or a string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateMentorshipRequest {
    pub client_id: Option<RawId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl From<CreateMentorshipRequest> for CreateMentorshipCommand {
    fn from(req: CreateMentorshipRequest) -> Self {
        Self {
            client_id: req.client_id,
            title: req.title.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
            status: req.status,
        }
    }
}

/// Partial update. `meetings` and `documents` replace the stored lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateMentorshipRequest {
    pub client_id: Option<RawId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub meetings: Option<Vec<Value>>,
    pub documents: Option<Vec<Value>>,
}

impl UpdateMentorshipRequest {
    pub fn into_command(self, mentorship_id: MentorshipId) -> UpdateMentorshipCommand {
        UpdateMentorshipCommand {
            client_id: self.client_id,
            title: self.title,
            description: self.description,
            status: self.status,
            meetings: self.meetings,
            documents: self.documents,
            ..UpdateMentorshipCommand::new(mentorship_id)
        }
    }
}

/// Query parameters for listing mentorships.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMentorshipsParams {
    pub client_id: Option<String>,
    pub status: Option<String>,
}

impl From<ListMentorshipsParams> for ListMentorshipsQuery {
    fn from(params: ListMentorshipsParams) -> Self {
        Self {
            client_id: blank_as_none(params.client_id).map(RawId::Text),
            status: blank_as_none(params.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_id_accepts_numbers_and_strings() {
        let req: CreateMentorshipRequest =
            serde_json::from_value(json!({"client_id": 3, "title": "t"})).unwrap();
        assert_eq!(req.client_id, Some(RawId::Number(3)));

        let req: CreateMentorshipRequest =
            serde_json::from_value(json!({"client_id": "3"})).unwrap();
        assert_eq!(req.client_id, Some(RawId::Text("3".to_string())));
    }

    #[test]
    fn list_params_drop_blank_filters() {
        let query: ListMentorshipsQuery = ListMentorshipsParams {
            client_id: Some(String::new()),
            status: Some("completed".to_string()),
        }
        .into();
        assert!(query.client_id.is_none());
        assert_eq!(query.status.as_deref(), Some("completed"));
    }

    #[test]
    fn update_request_carries_replacement_lists() {
        let req: UpdateMentorshipRequest =
            serde_json::from_value(json!({"meetings": [{"date": "2025-05-10"}]})).unwrap();
        let cmd = req.into_command(MentorshipId::new(2));
        assert_eq!(cmd.meetings.map(|m| m.len()), Some(1));
        assert!(cmd.documents.is_none());
    }
}
