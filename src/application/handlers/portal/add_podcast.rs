//! AddPodcastHandler - Command handler for publishing podcast episodes.

use std::sync::Arc;

use crate::application::CommandGate;
use crate::domain::foundation::DomainError;
use crate::domain::portal::{NewEpisode, PodcastEpisode};
use crate::ports::PodcastRepository;

/// Command to publish an episode.
#[derive(Debug, Clone, Default)]
pub struct AddPodcastCommand {
    pub title: String,
    pub description: String,
    pub date: String,
    pub youtube_link: String,
    pub summary: String,
}

pub struct AddPodcastHandler {
    podcasts: Arc<dyn PodcastRepository>,
    gate: CommandGate,
}

impl AddPodcastHandler {
    pub fn new(podcasts: Arc<dyn PodcastRepository>, gate: CommandGate) -> Self {
        Self { podcasts, gate }
    }

    pub async fn handle(&self, cmd: AddPodcastCommand) -> Result<PodcastEpisode, DomainError> {
        let input = NewEpisode::new(
            cmd.title,
            cmd.description,
            cmd.date,
            cmd.youtube_link,
            cmd.summary,
        )?;

        let _guard = self.gate.enter().await;
        let episode = self
            .podcasts
            .insert_with(Box::new(move |id| PodcastEpisode::new(id, input)))
            .await?;

        tracing::info!(episode_id = %episode.id(), "Podcast episode added");
        Ok(episode)
    }
}
