//! Podcast episodes published to the client portal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AggregateRoot, EpisodeId, Timestamp, ValidationError};

/// Validated input for a new episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEpisode {
    title: String,
    description: String,
    date: String,
    link: String,
    summary: String,
}

impl NewEpisode {
    /// # Errors
    ///
    /// - `EmptyField` if title, date or link is blank
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        link: impl Into<String>,
        summary: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let date = date.into();
        let link = link.into();

        for (field, value) in [("title", &title), ("date", &date), ("youtube_link", &link)] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }

        Ok(Self {
            title,
            description: description.into(),
            date,
            link,
            summary: summary.into(),
        })
    }
}

/// A published episode. `date` is an ISO date string and sorts lexically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastEpisode {
    id: EpisodeId,
    title: String,
    description: String,
    date: String,
    #[serde(rename = "youtube_link")]
    link: String,
    summary: String,
    created_at: Timestamp,
}

impl PodcastEpisode {
    pub fn new(id: EpisodeId, input: NewEpisode) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            date: input.date,
            link: input.link,
            summary: input.summary,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> EpisodeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

impl AggregateRoot for PodcastEpisode {
    type Id = EpisodeId;

    fn id(&self) -> EpisodeId {
        self.id
    }
}
