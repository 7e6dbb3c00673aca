//! Value objects owned by a client-portal service.
//!
//! Each constructor validates its required text fields; the parent service
//! appends the result to the matching collection in insertion order.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

fn required(field: &str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(value)
    }
}

/// A scheduled session. `date` is kept as the caller wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub date: String,
    pub topic: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl Meeting {
    pub fn new(
        date: impl Into<String>,
        topic: impl Into<String>,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            date: required("date", date.into())?,
            topic: required("topic", topic.into())?,
            notes,
            created_at: Timestamp::now(),
        })
    }
}

/// A file shared with the client (proposal, contract, receipt, content).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub file_path: Option<String>,
    pub created_at: Timestamp,
}

impl Document {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        file_path: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            kind: required("type", kind.into())?,
            name: required("name", name.into())?,
            file_path,
            created_at: Timestamp::now(),
        })
    }
}

/// One line of the portal chat. `sender` is `client` or `mentor` by
/// convention but not restricted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub message: String,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    /// # Errors
    ///
    /// - `EmptyField` if sender or message is blank
    pub fn new(
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sender: required("sender", sender.into())?,
            message: required("message", message.into())?,
            timestamp: Timestamp::now(),
        })
    }
}

/// A deliverable agreed with the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeItem {
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
}

impl ScopeItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", title.into())?,
            description: required("description", description.into())?,
            created_at: Timestamp::now(),
        })
    }
}

/// A dated milestone. Defaults to now when no date is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub title: String,
    pub description: String,
    pub date: Timestamp,
}

impl TimelineEvent {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: Option<Timestamp>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", title.into())?,
            description: required("description", description.into())?,
            date: date.unwrap_or_else(Timestamp::now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_message_requires_sender_and_message() {
        assert_eq!(
            ChatMessage::new("", "hi"),
            Err(ValidationError::empty_field("sender"))
        );
        assert_eq!(
            ChatMessage::new("client", "  "),
            Err(ValidationError::empty_field("message"))
        );
        assert!(ChatMessage::new("mentor", "Olá!").is_ok());
    }

    #[test]
    fn document_serializes_kind_as_type() {
        let doc = Document::new("contract", "Contrato.pdf", None).unwrap();
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["type"], "contract");
        assert!(json["file_path"].is_null());
    }

    #[test]
    fn timeline_event_keeps_given_date() {
        let date = Timestamp::parse_iso("2025-05-05T10:00:00").unwrap();
        let event = TimelineEvent::new("Kickoff", "First call", Some(date)).unwrap();
        assert_eq!(event.date, date);
    }

    #[test]
    fn meeting_requires_date_and_topic() {
        assert_eq!(
            Meeting::new("", "Intro", None),
            Err(ValidationError::empty_field("date"))
        );
        assert_eq!(
            Meeting::new("2025-05-10", "", None),
            Err(ValidationError::empty_field("topic"))
        );
    }
}
