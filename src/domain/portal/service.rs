//! ClientService aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AggregateRoot, ClientId, ServiceId, Timestamp, ValidationError};

use super::{ChatMessage, Document, Meeting, ScopeItem, ServiceStatus, TimelineEvent};

/// Validated input for a new service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClientService {
    title: String,
    client_id: ClientId,
    status: ServiceStatus,
    description: String,
}

impl NewClientService {
    /// # Errors
    ///
    /// - `EmptyField` if title is blank
    pub fn new(
        title: impl Into<String>,
        client_id: ClientId,
        status: ServiceStatus,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            title,
            client_id,
            status,
            description: description.into(),
        })
    }
}

/// A contracted engagement as the client sees it in the portal.
///
/// # Invariants
///
/// - every owned collection is append-only and keeps insertion order
/// - every status change appends exactly one timeline event
/// - `installments` defaults to 1, `price` to an empty string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientService {
    id: ServiceId,
    title: String,
    client_id: ClientId,
    description: String,
    status: ServiceStatus,
    meetings: Vec<Meeting>,
    documents: Vec<Document>,
    chat_history: Vec<ChatMessage>,
    scope: Vec<ScopeItem>,
    timeline: Vec<TimelineEvent>,
    price: String,
    installments: u32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ClientService {
    pub fn new(id: ServiceId, input: NewClientService) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            title: input.title,
            client_id: input.client_id,
            description: input.description,
            status: input.status,
            meetings: Vec::new(),
            documents: Vec::new(),
            chat_history: Vec::new(),
            scope: Vec::new(),
            timeline: Vec::new(),
            price: String::new(),
            installments: 1,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> ServiceId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> &ServiceStatus {
        &self.status
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn chat_history(&self) -> &[ChatMessage] {
        &self.chat_history
    }

    pub fn scope(&self) -> &[ScopeItem] {
        &self.scope
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn installments(&self) -> u32 {
        self.installments
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.touch();
    }

    pub fn add_meeting(&mut self, meeting: Meeting) {
        self.meetings.push(meeting);
        self.touch();
    }

    pub fn add_document(&mut self, document: Document) {
        self.documents.push(document);
        self.touch();
    }

    pub fn add_chat_message(&mut self, message: ChatMessage) {
        self.chat_history.push(message);
        self.touch();
    }

    pub fn add_scope_item(&mut self, item: ScopeItem) {
        self.scope.push(item);
        self.touch();
    }

    pub fn add_timeline_event(&mut self, event: TimelineEvent) {
        self.timeline.push(event);
        self.touch();
    }

    pub fn set_price(&mut self, price: String, installments: u32) {
        self.price = price;
        self.installments = installments;
        self.touch();
    }

    /// Moves the service to `status` and records the change on the timeline.
    ///
    /// Always appends, even when the status does not change.
    pub fn update_status(&mut self, status: ServiceStatus) {
        let event = TimelineEvent {
            title: format!("Status: {}", status),
            description: status.timeline_description(),
            date: Timestamp::now(),
        };
        self.status = status;
        self.add_timeline_event(event);
    }

    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl AggregateRoot for ClientService {
    type Id = ServiceId;

    fn id(&self) -> ServiceId {
        self.id
    }
}
