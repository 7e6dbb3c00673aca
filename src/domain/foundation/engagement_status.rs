//! EngagementStatus enum shared by mentorships and client-portal services.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StatusLabel;

/// Sales and delivery stage of a paid engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EngagementStatus {
    #[default]
    InitialContact,
    ProposalSent,
    ContractSigned,
    InProgress,
    Completed,
}

impl EngagementStatus {
    /// Every stage, in funnel order.
    pub const ALL: [EngagementStatus; 5] = [
        EngagementStatus::InitialContact,
        EngagementStatus::ProposalSent,
        EngagementStatus::ContractSigned,
        EngagementStatus::InProgress,
        EngagementStatus::Completed,
    ];
}

impl StatusLabel for EngagementStatus {
    const FIELD: &'static str = "status";

    fn as_str(&self) -> &'static str {
        match self {
            EngagementStatus::InitialContact => "initial_contact",
            EngagementStatus::ProposalSent => "proposal_sent",
            EngagementStatus::ContractSigned => "contract_signed",
            EngagementStatus::InProgress => "in_progress",
            EngagementStatus::Completed => "completed",
        }
    }

    fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }
}

impl fmt::Display for EngagementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_initial_contact() {
        assert_eq!(EngagementStatus::default(), EngagementStatus::InitialContact);
    }

    #[test]
    fn parse_matches_serde_labels() {
        for status in EngagementStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(EngagementStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(EngagementStatus::parse("on_hold"), None);
    }
}
