//! ListPodcastsHandler - Query handler for podcast episodes, newest first.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::portal::PodcastEpisode;
use crate::ports::PodcastRepository;

/// Handler listing episodes by descending date string.
///
/// Dates are compared as text, which orders ISO dates correctly.
pub struct ListPodcastsHandler {
    podcasts: Arc<dyn PodcastRepository>,
}

impl ListPodcastsHandler {
    pub fn new(podcasts: Arc<dyn PodcastRepository>) -> Self {
        Self { podcasts }
    }

    pub async fn handle(&self) -> Result<Vec<PodcastEpisode>, DomainError> {
        let mut episodes = self.podcasts.find_all().await?;
        episodes.sort_by(|a, b| b.date().cmp(a.date()));
        Ok(episodes)
    }
}
