//! ListInitiativesHandler - Query handler for the prioritized initiative list.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, InitiativeStatus, StatusLabel};
use crate::domain::initiative::{Initiative, InitiativeCategory};
use crate::ports::{InitiativeFilter, InitiativeRepository};

/// Query for initiatives. Present filters are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct ListInitiativesQuery {
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Handler for listing initiatives, most urgent first.
///
/// Equal priorities keep creation order. A filter value outside the known
/// categories or statuses matches nothing.
pub struct ListInitiativesHandler {
    initiatives: Arc<dyn InitiativeRepository>,
}

impl ListInitiativesHandler {
    pub fn new(initiatives: Arc<dyn InitiativeRepository>) -> Self {
        Self { initiatives }
    }

    pub async fn handle(&self, query: ListInitiativesQuery) -> Result<Vec<Initiative>, DomainError> {
        let mut filter = InitiativeFilter::default();
        if let Some(label) = query.category.as_deref() {
            match InitiativeCategory::parse(label) {
                Ok(category) => filter.category = Some(category),
                Err(_) => return Ok(Vec::new()),
            }
        }
        if let Some(label) = query.status.as_deref() {
            match InitiativeStatus::parse(label) {
                Some(status) => filter.status = Some(status),
                None => return Ok(Vec::new()),
            }
        }

        let mut initiatives = self.initiatives.find_matching(filter).await?;
        initiatives.sort_by_key(|i| (i.priority(), i.id()));
        Ok(initiatives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRepository;
    use crate::domain::foundation::{Priority, Repository};
    use crate::domain::initiative::NewInitiative;

    async fn repo_with(items: &[(InitiativeCategory, i64)]) -> Arc<InMemoryRepository<Initiative>> {
        let repo = Arc::new(InMemoryRepository::<Initiative>::new());
        for (category, priority) in items {
            let input = NewInitiative::new(
                format!("p{}", priority),
                "d",
                *category,
                InitiativeStatus::Pending,
                Priority::new(*priority).unwrap(),
            )
            .unwrap();
            repo.insert_with(Box::new(move |id| Initiative::new(id, input)))
                .await
                .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn sorts_ascending_by_priority() {
        let repo = repo_with(&[
            (InitiativeCategory::Podcast, 5),
            (InitiativeCategory::Podcast, 1),
            (InitiativeCategory::Podcast, 3),
        ])
        .await;
        let result = ListInitiativesHandler::new(repo)
            .handle(ListInitiativesQuery {
                category: Some("Podcast".to_string()),
                status: None,
            })
            .await
            .unwrap();

        let priorities: Vec<u8> = result.iter().map(|i| i.priority().value()).collect();
        assert_eq!(priorities, vec![1, 3, 5]);
    }

    #[tokio::test]
    async fn category_filter_excludes_other_categories() {
        let repo = repo_with(&[
            (InitiativeCategory::Podcast, 2),
            (InitiativeCategory::Networking, 1),
        ])
        .await;
        let result = ListInitiativesHandler::new(repo)
            .handle(ListInitiativesQuery {
                category: Some("Podcast".to_string()),
                status: None,
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category(), InitiativeCategory::Podcast);
    }

    #[tokio::test]
    async fn ties_keep_creation_order() {
        let repo = repo_with(&[
            (InitiativeCategory::Talks, 2),
            (InitiativeCategory::Podcast, 2),
        ])
        .await;
        let result = ListInitiativesHandler::new(repo)
            .handle(ListInitiativesQuery::default())
            .await
            .unwrap();

        assert_eq!(result[0].category(), InitiativeCategory::Talks);
    }

    #[tokio::test]
    async fn unknown_status_filter_matches_nothing() {
        let repo = repo_with(&[(InitiativeCategory::Talks, 2)]).await;
        let result = ListInitiativesHandler::new(repo)
            .handle(ListInitiativesQuery {
                category: None,
                status: Some("blocked".to_string()),
            })
            .await
            .unwrap();
        assert!(result.is_empty());
    }
}
