//! Closed list of initiative categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Kind of work an initiative belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitiativeCategory {
    #[serde(rename = "Mentoria Individual")]
    IndividualMentoring,
    #[serde(rename = "Mentoria em Grupo")]
    GroupMentoring,
    #[serde(rename = "Podcast")]
    Podcast,
    #[serde(rename = "Palestras")]
    Talks,
    #[serde(rename = "Conteúdo Digital")]
    DigitalContent,
    #[serde(rename = "Networking")]
    Networking,
    #[serde(rename = "Outros")]
    Other,
}

impl InitiativeCategory {
    /// Every category, in display order.
    pub const ALL: [InitiativeCategory; 7] = [
        InitiativeCategory::IndividualMentoring,
        InitiativeCategory::GroupMentoring,
        InitiativeCategory::Podcast,
        InitiativeCategory::Talks,
        InitiativeCategory::DigitalContent,
        InitiativeCategory::Networking,
        InitiativeCategory::Other,
    ];

    /// Returns the display label, which is also the wire format.
    pub fn label(&self) -> &'static str {
        match self {
            InitiativeCategory::IndividualMentoring => "Mentoria Individual",
            InitiativeCategory::GroupMentoring => "Mentoria em Grupo",
            InitiativeCategory::Podcast => "Podcast",
            InitiativeCategory::Talks => "Palestras",
            InitiativeCategory::DigitalContent => "Conteúdo Digital",
            InitiativeCategory::Networking => "Networking",
            InitiativeCategory::Other => "Outros",
        }
    }

    /// Returns all labels, in display order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(InitiativeCategory::label).collect()
    }

    /// Parses a label.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a blank label
    /// - `UnknownValue` for anything outside the list
    pub fn parse(label: &str) -> Result<Self, ValidationError> {
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| ValidationError::unknown_value("category", label))
    }
}

impl fmt::Display for InitiativeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
