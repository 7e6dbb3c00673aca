//! Client aggregate entity.

use crate::domain::foundation::{
    AggregateRoot, ClientId, ClientStatus, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Validated input for a new client.
///
/// Holding a `NewClient` proves name, email and phone are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    name: String,
    email: String,
    phone: String,
    status: ClientStatus,
    notes: String,
}

impl NewClient {
    /// Validates the contact fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name, email or phone is blank
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        status: ClientStatus,
        notes: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        let phone = phone.into();

        for (field, value) in [("name", &name), ("email", &email), ("phone", &phone)] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }

        Ok(Self {
            name,
            email,
            phone,
            status,
            notes: notes.into(),
        })
    }
}

/// Client aggregate.
///
/// # Invariants
///
/// - `id` is unique and never reassigned
/// - `name`, `email`, `phone` are non-empty at creation
/// - `updated_at` is refreshed by every mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    name: String,
    email: String,
    phone: String,
    status: ClientStatus,
    notes: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Client {
    /// Creates a client from validated input.
    pub fn new(id: ClientId, input: NewClient) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            status: input.status,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn status(&self) -> ClientStatus {
        self.status
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.touch();
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.touch();
    }

    pub fn set_phone(&mut self, phone: String) {
        self.phone = phone;
        self.touch();
    }

    pub fn set_status(&mut self, status: ClientStatus) {
        self.status = status;
        self.touch();
    }

    pub fn set_notes(&mut self, notes: String) {
        self.notes = notes;
        self.touch();
    }

    /// Promotes a prospect to active when their first engagement starts.
    ///
    /// Returns true if the status changed.
    pub fn activate_if_prospect(&mut self) -> bool {
        if self.status == ClientStatus::Prospect {
            self.set_status(ClientStatus::Active);
            true
        } else {
            false
        }
    }

    /// Marks the client as completed after an engagement finishes.
    pub fn mark_completed(&mut self) {
        self.set_status(ClientStatus::Completed);
    }

    /// Refreshes `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl AggregateRoot for Client {
    type Id = ClientId;

    fn id(&self) -> ClientId {
        self.id
    }
}
