//! Initiative aggregate entity.

use crate::domain::foundation::{
    AggregateRoot, InitiativeId, InitiativeStatus, Priority, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

use super::InitiativeCategory;

/// Validated input for a new initiative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInitiative {
    title: String,
    description: String,
    category: InitiativeCategory,
    status: InitiativeStatus,
    priority: Priority,
}

impl NewInitiative {
    /// Validates the required text fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if title or description is blank
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: InitiativeCategory,
        status: InitiativeStatus,
        priority: Priority,
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
            title,
            description,
            category,
            status,
            priority,
        })
    }
}

/// Initiative aggregate - a content or marketing task.
///
/// # Invariants
///
/// - `priority` is always within 1..=5
/// - `category` is one of the closed list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initiative {
    id: InitiativeId,
    title: String,
    description: String,
    category: InitiativeCategory,
    status: InitiativeStatus,
    priority: Priority,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Initiative {
    /// Creates an initiative from validated input.
    pub fn new(id: InitiativeId, input: NewInitiative) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            title: input.title,
            description: input.description,
            category: input.category,
            status: input.status,
            priority: input.priority,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> InitiativeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> InitiativeCategory {
        self.category
    }

    pub fn status(&self) -> InitiativeStatus {
        self.status
    }

    pub fn priority(&self) -> Priority {
        self.priority
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

    pub fn set_category(&mut self, category: InitiativeCategory) {
        self.category = category;
        self.touch();
    }

    pub fn set_status(&mut self, status: InitiativeStatus) {
        self.status = status;
        self.touch();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
        self.touch();
    }

    /// Refreshes `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl AggregateRoot for Initiative {
    type Id = InitiativeId;

    fn id(&self) -> InitiativeId {
        self.id
    }
}
