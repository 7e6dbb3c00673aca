//! InitiativeStatus enum for content and marketing tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StatusLabel;

/// Progress of an initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InitiativeStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl InitiativeStatus {
    /// Returns true once no further work is expected.
    pub fn is_closed(&self) -> bool {
        matches!(self, InitiativeStatus::Completed | InitiativeStatus::Cancelled)
    }
}

impl StatusLabel for InitiativeStatus {
    const FIELD: &'static str = "status";

    fn as_str(&self) -> &'static str {
        match self {
            InitiativeStatus::Pending => "pending",
            InitiativeStatus::InProgress => "in_progress",
            InitiativeStatus::Completed => "completed",
            InitiativeStatus::Cancelled => "cancelled",
        }
    }

    fn parse(label: &str) -> Option<Self> {
        match label {
            "pending" => Some(InitiativeStatus::Pending),
            "in_progress" => Some(InitiativeStatus::InProgress),
            "completed" => Some(InitiativeStatus::Completed),
            "cancelled" => Some(InitiativeStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for InitiativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        assert_eq!(InitiativeStatus::default(), InitiativeStatus::Pending);
    }

    #[test]
    fn closed_statuses() {
        assert!(InitiativeStatus::Completed.is_closed());
        assert!(InitiativeStatus::Cancelled.is_closed());
        assert!(!InitiativeStatus::InProgress.is_closed());
    }

    #[test]
    fn in_progress_uses_snake_case() {
        assert_eq!(
            InitiativeStatus::parse("in_progress"),
            Some(InitiativeStatus::InProgress)
        );
        assert_eq!(
            serde_json::to_string(&InitiativeStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }
}
