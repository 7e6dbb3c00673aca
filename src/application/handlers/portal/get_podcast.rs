//! GetPodcastHandler - Query handler for one podcast episode.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EpisodeId};
use crate::domain::portal::PodcastEpisode;
use crate::ports::PodcastRepository;

#[derive(Debug, Clone)]
pub struct GetPodcastQuery {
    pub episode_id: EpisodeId,
}

pub struct GetPodcastHandler {
    podcasts: Arc<dyn PodcastRepository>,
}

impl GetPodcastHandler {
    pub fn new(podcasts: Arc<dyn PodcastRepository>) -> Self {
        Self { podcasts }
    }

    pub async fn handle(&self, query: GetPodcastQuery) -> Result<Option<PodcastEpisode>, DomainError> {
        self.podcasts.find_by_id(query.episode_id).await
    }
}
