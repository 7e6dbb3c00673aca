//! ClientStatus enum for tracking where a client is in the sales funnel.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StatusLabel;

/// Lifecycle status of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    #[default]
    Prospect,
    Active,
    Completed,
}

impl StatusLabel for ClientStatus {
    const FIELD: &'static str = "status";

    fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Prospect => "prospect",
            ClientStatus::Active => "active",
            ClientStatus::Completed => "completed",
        }
    }

    fn parse(label: &str) -> Option<Self> {
        match label {
            "prospect" => Some(ClientStatus::Prospect),
            "active" => Some(ClientStatus::Active),
            "completed" => Some(ClientStatus::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_prospect() {
        assert_eq!(ClientStatus::default(), ClientStatus::Prospect);
    }

    #[test]
    fn parse_round_trips_every_label() {
        for status in [
            ClientStatus::Prospect,
            ClientStatus::Active,
            ClientStatus::Completed,
        ] {
            assert_eq!(ClientStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ClientStatus::parse("Prospect"), None);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&ClientStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
