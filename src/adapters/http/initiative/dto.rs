//! HTTP DTOs for initiative endpoints.

use serde::Deserialize;

use crate::application::handlers::initiative::{
    CreateInitiativeCommand, UpdateInitiativeCommand,
};
use crate::domain::foundation::{InitiativeId, PriorityInput};

/// Request to create an initiative. `priority` may be a number or a string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateInitiativeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<PriorityInput>,
}

impl From<CreateInitiativeRequest> for CreateInitiativeCommand {
    fn from(req: CreateInitiativeRequest) -> Self {
        Self {
            title: req.title.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
            category: req.category.unwrap_or_default(),
            status: req.status,
            priority: req.priority,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateInitiativeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<PriorityInput>,
}

impl UpdateInitiativeRequest {
    pub fn into_command(self, initiative_id: InitiativeId) -> UpdateInitiativeCommand {
        UpdateInitiativeCommand {
            title: self.title,
            description: self.description,
            category: self.category,
            status: self.status,
            priority: self.priority,
            ..UpdateInitiativeCommand::new(initiative_id)
        }
    }
}

/// Query parameters for listing initiatives. Both filters combine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListInitiativesParams {
    pub category: Option<String>,
    pub status: Option<String>,
}
