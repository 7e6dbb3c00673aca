//! Status of a client-portal service.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{EngagementStatus, InputPolicy, StatusLabel, ValidationError};

/// Engagement stage of a service.
///
/// Services accept any status string; labels outside the engagement funnel
/// are kept verbatim as [`ServiceStatus::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceStatus {
    Known(EngagementStatus),
    Unrecognized(String),
}

impl ServiceStatus {
    pub fn parse(label: &str) -> Self {
        match EngagementStatus::parse(label) {
            Some(status) => ServiceStatus::Known(status),
            None => ServiceStatus::Unrecognized(label.to_string()),
        }
    }

    /// Parses a caller-supplied label under `policy`.
    ///
    /// Lenient keeps unknown labels verbatim; strict rejects them.
    pub fn accept(label: &str, policy: InputPolicy) -> Result<Self, ValidationError> {
        match (Self::parse(label), policy) {
            (ServiceStatus::Unrecognized(_), InputPolicy::Strict) => Err(
                ValidationError::unknown_value(EngagementStatus::FIELD, label),
            ),
            (status, _) => Ok(status),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ServiceStatus::Known(status) => status.as_str(),
            ServiceStatus::Unrecognized(label) => label,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, ServiceStatus::Known(_))
    }

    /// Timeline text recorded when a service enters this status.
    pub fn timeline_description(&self) -> String {
        match self {
            ServiceStatus::Known(EngagementStatus::InitialContact) => {
                "Contato inicial realizado".to_string()
            }
            ServiceStatus::Known(EngagementStatus::ProposalSent) => {
                "Proposta enviada ao cliente".to_string()
            }
            ServiceStatus::Known(EngagementStatus::ContractSigned) => {
                "Contrato assinado".to_string()
            }
            ServiceStatus::Known(EngagementStatus::InProgress) => {
                "Serviço em andamento".to_string()
            }
            ServiceStatus::Known(EngagementStatus::Completed) => "Serviço concluído".to_string(),
            ServiceStatus::Unrecognized(label) => format!("Status atualizado para {}", label),
        }
    }
}

impl Default for ServiceStatus {
    fn default() -> Self {
        ServiceStatus::Known(EngagementStatus::default())
    }
}

impl From<EngagementStatus> for ServiceStatus {
    fn from(status: EngagementStatus) -> Self {
        ServiceStatus::Known(status)
    }
}

impl From<String> for ServiceStatus {
    fn from(label: String) -> Self {
        ServiceStatus::parse(&label)
    }
}

impl From<ServiceStatus> for String {
    fn from(status: ServiceStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_labels() {
        assert_eq!(
            ServiceStatus::parse("proposal_sent"),
            ServiceStatus::Known(EngagementStatus::ProposalSent)
        );
    }

    #[test]
    fn keeps_unknown_labels_verbatim() {
        let status = ServiceStatus::parse("on_hold");
        assert!(!status.is_recognized());
        assert_eq!(status.as_str(), "on_hold");
        assert_eq!(status.timeline_description(), "Status atualizado para on_hold");
    }

    #[test]
    fn strict_policy_rejects_unknown_labels() {
        assert!(ServiceStatus::accept("paused", InputPolicy::Lenient).is_ok());
        assert!(matches!(
            ServiceStatus::accept("paused", InputPolicy::Strict),
            Err(ValidationError::UnknownValue { .. })
        ));
        assert!(ServiceStatus::accept("completed", InputPolicy::Strict).is_ok());
    }

    #[test]
    fn descriptions_follow_the_fixed_table() {
        let table = [
            ("initial_contact", "Contato inicial realizado"),
            ("proposal_sent", "Proposta enviada ao cliente"),
            ("contract_signed", "Contrato assinado"),
            ("in_progress", "Serviço em andamento"),
            ("completed", "Serviço concluído"),
        ];
        for (label, text) in table {
            assert_eq!(ServiceStatus::parse(label).timeline_description(), text);
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ServiceStatus::parse("paused")).unwrap();
        assert_eq!(json, "\"paused\"");
        let parsed: ServiceStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, ServiceStatus::Known(EngagementStatus::Completed));
    }
}
