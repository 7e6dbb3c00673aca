//! Initiative repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, InitiativeId, InitiativeStatus, Repository};
use crate::domain::initiative::{Initiative, InitiativeCategory};

/// Filter for initiative listings. Present fields are AND-combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitiativeFilter {
    pub category: Option<InitiativeCategory>,
    pub status: Option<InitiativeStatus>,
}

impl InitiativeFilter {
    pub fn matches(&self, initiative: &Initiative) -> bool {
        self.category.map_or(true, |c| initiative.category() == c)
            && self.status.map_or(true, |s| initiative.status() == s)
    }
}

/// Repository port for Initiative aggregates.
#[async_trait]
pub trait InitiativeRepository: Repository<Initiative, InitiativeId> {
    /// Returns initiatives matching the filter, unordered.
    async fn find_matching(&self, filter: InitiativeFilter)
        -> Result<Vec<Initiative>, DomainError>;
}
