//! Mentorship aggregate entity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{
    AggregateRoot, ClientId, EngagementStatus, MentorshipId, Timestamp, ValidationError,
};

/// Validated input for a new mentorship.
///
/// The client reference is only checked for shape here; existence is checked
/// by the handler against the client repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMentorship {
    client_id: ClientId,
    title: String,
    description: String,
    status: EngagementStatus,
}

impl NewMentorship {
    /// Validates the required text fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if title or description is blank
    pub fn new(
        client_id: ClientId,
        title: impl Into<String>,
        description: impl Into<String>,
        status: EngagementStatus,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }

        Ok(Self {
            client_id,
            title,
            description,
            status,
        })
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }
}

/// Mentorship aggregate.
///
/// Meetings and documents are free-form records at this layer and are
/// replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentorship {
    id: MentorshipId,
    client_id: ClientId,
    title: String,
    description: String,
    status: EngagementStatus,
    meetings: Vec<Value>,
    documents: Vec<Value>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Mentorship {
    pub fn new(id: MentorshipId, input: NewMentorship) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            client_id: input.client_id,
            title: input.title,
            description: input.description,
            status: input.status,
            meetings: Vec::new(),
            documents: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> MentorshipId {
        self.id
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> EngagementStatus {
        self.status
    }

    pub fn meetings(&self) -> &[Value] {
        &self.meetings
    }

    pub fn documents(&self) -> &[Value] {
        &self.documents
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Points the mentorship at another client.
    pub fn reassign(&mut self, client_id: ClientId) {
        self.client_id = client_id;
        self.touch();
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.touch();
    }

    pub fn set_status(&mut self, status: EngagementStatus) {
        self.status = status;
        self.touch();
    }

    pub fn replace_meetings(&mut self, meetings: Vec<Value>) {
        self.meetings = meetings;
        self.touch();
    }

    pub fn replace_documents(&mut self, documents: Vec<Value>) {
        self.documents = documents;
        self.touch();
    }

    pub fn is_completed(&self) -> bool {
        self.status == EngagementStatus::Completed
    }

    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl AggregateRoot for Mentorship {
    type Id = MentorshipId;

    fn id(&self) -> MentorshipId {
        self.id
    }
}
