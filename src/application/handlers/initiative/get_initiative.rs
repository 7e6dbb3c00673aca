//! GetInitiativeHandler - Query handler for a single initiative.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, InitiativeId};
use crate::domain::initiative::Initiative;
use crate::ports::InitiativeRepository;

/// Query for one initiative by id.
#[derive(Debug, Clone)]
pub struct GetInitiativeQuery {
    pub initiative_id: InitiativeId,
}

pub struct GetInitiativeHandler {
    initiatives: Arc<dyn InitiativeRepository>,
}

impl GetInitiativeHandler {
    pub fn new(initiatives: Arc<dyn InitiativeRepository>) -> Self {
        Self { initiatives }
    }

    pub async fn handle(&self, query: GetInitiativeQuery) -> Result<Option<Initiative>, DomainError> {
        self.initiatives.find_by_id(query.initiative_id).await
    }
}
