//! Read model that joins a mentorship with its client's name.

use serde::Serialize;

use crate::domain::client::Client;

use super::Mentorship;

/// Name reported when a mentorship points at a deleted client.
pub const UNKNOWN_CLIENT_NAME: &str = "Unknown Client";

/// A mentorship enriched with `client_name`, resolved at read time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorshipView {
    #[serde(flatten)]
    pub mentorship: Mentorship,
    pub client_name: String,
}

impl MentorshipView {
    /// Joins a mentorship with the client it references, if still present.
    pub fn resolve(mentorship: Mentorship, client: Option<&Client>) -> Self {
        let client_name = client
            .map(|c| c.name().to_string())
            .unwrap_or_else(|| UNKNOWN_CLIENT_NAME.to_string());
        Self {
            mentorship,
            client_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::NewClient;
    use crate::domain::foundation::{ClientId, ClientStatus, EngagementStatus, MentorshipId};
    use crate::domain::mentorship::NewMentorship;

    fn mentorship() -> Mentorship {
        let input =
            NewMentorship::new(ClientId::new(1), "Career", "Coaching", EngagementStatus::default())
                .unwrap();
        Mentorship::new(MentorshipId::new(1), input)
    }

    #[test]
    fn uses_client_name_when_present() {
        let client = Client::new(
            ClientId::new(1),
            NewClient::new("Joana", "j@x.com", "1", ClientStatus::Active, "").unwrap(),
        );
        let view = MentorshipView::resolve(mentorship(), Some(&client));
        assert_eq!(view.client_name, "Joana");
    }

    #[test]
    fn falls_back_to_sentinel_and_flattens() {
        let view = MentorshipView::resolve(mentorship(), None);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["client_name"], UNKNOWN_CLIENT_NAME);
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Career");
    }
}
