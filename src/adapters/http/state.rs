//! Shared application state for every router.

use std::sync::Arc;

use crate::adapters::export::TabularClientExporter;
use crate::adapters::memory::InMemoryRepository;
use crate::application::handlers::client::{
    CreateClientHandler, DeleteClientHandler, ExportClientsHandler, GetClientHandler,
    ListClientsHandler, UpdateClientHandler,
};
use crate::application::handlers::dashboard::GetDashboardStatsHandler;
use crate::application::handlers::initiative::{
    CreateInitiativeHandler, DeleteInitiativeHandler, GetInitiativeHandler,
    ListInitiativesHandler, UpdateInitiativeHandler,
};
use crate::application::handlers::mentorship::{
    CreateMentorshipHandler, DeleteMentorshipHandler, GetMentorshipHandler,
    ListMentorshipsHandler, UpdateMentorshipHandler,
};
use crate::application::handlers::portal::{
    AddChatMessageHandler, AddDocumentHandler, AddMeetingHandler, AddPodcastHandler,
    AddScopeItemHandler, AddTimelineEventHandler, CreateServiceHandler, DeleteServiceHandler,
    GetPodcastHandler, GetServiceHandler, ListPodcastsHandler, ListServicesHandler,
    UpdateServiceHandler,
};
use crate::application::{CommandGate, SampleDataSeeder};
use crate::domain::client::Client;
use crate::domain::foundation::{DomainError, InputPolicy};
use crate::domain::initiative::Initiative;
use crate::domain::mentorship::Mentorship;
use crate::domain::portal::{ClientService, PodcastEpisode};
use crate::ports::{
    ClientExporter, ClientRepository, ClientServiceRepository, InitiativeRepository,
    MentorshipRepository, PodcastRepository,
};

use super::error::ApiError;

/// Shared application state containing every port and the write gate.
///
/// Handlers are cheap to build, so each request builds the one it needs.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientRepository>,
    pub initiatives: Arc<dyn InitiativeRepository>,
    pub mentorships: Arc<dyn MentorshipRepository>,
    pub services: Arc<dyn ClientServiceRepository>,
    pub podcasts: Arc<dyn PodcastRepository>,
    pub exporter: Arc<dyn ClientExporter>,
    pub gate: CommandGate,
    pub policy: InputPolicy,
    pub verbose_errors: bool,
}

impl AppState {
    /// State backed by fresh in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            clients: Arc::new(InMemoryRepository::<Client>::new()),
            initiatives: Arc::new(InMemoryRepository::<Initiative>::new()),
            mentorships: Arc::new(InMemoryRepository::<Mentorship>::new()),
            services: Arc::new(InMemoryRepository::<ClientService>::new()),
            podcasts: Arc::new(InMemoryRepository::<PodcastEpisode>::new()),
            exporter: Arc::new(TabularClientExporter::new()),
            gate: CommandGate::new(),
            policy: InputPolicy::default(),
            verbose_errors: false,
        }
    }

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    /// Maps a handler failure to a response, honoring `verbose_errors`.
    pub fn reject(&self, error: DomainError) -> ApiError {
        ApiError::from_domain(error, self.verbose_errors)
    }

    pub fn seeder(&self) -> SampleDataSeeder {
        SampleDataSeeder::new(self.podcasts.clone(), self.services.clone(), self.gate.clone())
    }

    // Clients

    pub fn list_clients_handler(&self) -> ListClientsHandler {
        ListClientsHandler::new(self.clients.clone())
    }

    pub fn get_client_handler(&self) -> GetClientHandler {
        GetClientHandler::new(self.clients.clone())
    }

    pub fn create_client_handler(&self) -> CreateClientHandler {
        CreateClientHandler::new(self.clients.clone(), self.gate.clone(), self.policy)
    }

    pub fn update_client_handler(&self) -> UpdateClientHandler {
        UpdateClientHandler::new(self.clients.clone(), self.gate.clone(), self.policy)
    }

    pub fn delete_client_handler(&self) -> DeleteClientHandler {
        DeleteClientHandler::new(self.clients.clone(), self.gate.clone())
    }

    pub fn export_clients_handler(&self) -> ExportClientsHandler {
        ExportClientsHandler::new(self.clients.clone(), self.exporter.clone())
    }

    // Initiatives

    pub fn list_initiatives_handler(&self) -> ListInitiativesHandler {
        ListInitiativesHandler::new(self.initiatives.clone())
    }

    pub fn get_initiative_handler(&self) -> GetInitiativeHandler {
        GetInitiativeHandler::new(self.initiatives.clone())
    }

    pub fn create_initiative_handler(&self) -> CreateInitiativeHandler {
        CreateInitiativeHandler::new(self.initiatives.clone(), self.gate.clone(), self.policy)
    }

    pub fn update_initiative_handler(&self) -> UpdateInitiativeHandler {
        UpdateInitiativeHandler::new(self.initiatives.clone(), self.gate.clone(), self.policy)
    }

    pub fn delete_initiative_handler(&self) -> DeleteInitiativeHandler {
        DeleteInitiativeHandler::new(self.initiatives.clone(), self.gate.clone())
    }

    // Mentorships

    pub fn list_mentorships_handler(&self) -> ListMentorshipsHandler {
        ListMentorshipsHandler::new(self.mentorships.clone(), self.clients.clone())
    }

    pub fn get_mentorship_handler(&self) -> GetMentorshipHandler {
        GetMentorshipHandler::new(self.mentorships.clone(), self.clients.clone())
    }

    pub fn create_mentorship_handler(&self) -> CreateMentorshipHandler {
        CreateMentorshipHandler::new(
            self.mentorships.clone(),
            self.clients.clone(),
            self.gate.clone(),
            self.policy,
        )
    }

    pub fn update_mentorship_handler(&self) -> UpdateMentorshipHandler {
        UpdateMentorshipHandler::new(
            self.mentorships.clone(),
            self.clients.clone(),
            self.gate.clone(),
            self.policy,
        )
    }

    pub fn delete_mentorship_handler(&self) -> DeleteMentorshipHandler {
        DeleteMentorshipHandler::new(self.mentorships.clone(), self.gate.clone())
    }

    // Client portal

    pub fn list_services_handler(&self) -> ListServicesHandler {
        ListServicesHandler::new(self.services.clone())
    }

    pub fn get_service_handler(&self) -> GetServiceHandler {
        GetServiceHandler::new(self.services.clone())
    }

    pub fn create_service_handler(&self) -> CreateServiceHandler {
        CreateServiceHandler::new(self.services.clone(), self.gate.clone(), self.policy)
    }

    pub fn update_service_handler(&self) -> UpdateServiceHandler {
        UpdateServiceHandler::new(self.services.clone(), self.gate.clone(), self.policy)
    }

    pub fn delete_service_handler(&self) -> DeleteServiceHandler {
        DeleteServiceHandler::new(self.services.clone(), self.gate.clone())
    }

    pub fn add_chat_message_handler(&self) -> AddChatMessageHandler {
        AddChatMessageHandler::new(self.services.clone(), self.gate.clone())
    }

    pub fn add_meeting_handler(&self) -> AddMeetingHandler {
        AddMeetingHandler::new(self.services.clone(), self.gate.clone())
    }

    pub fn add_document_handler(&self) -> AddDocumentHandler {
        AddDocumentHandler::new(self.services.clone(), self.gate.clone())
    }

    pub fn add_scope_item_handler(&self) -> AddScopeItemHandler {
        AddScopeItemHandler::new(self.services.clone(), self.gate.clone())
    }

    pub fn add_timeline_event_handler(&self) -> AddTimelineEventHandler {
        AddTimelineEventHandler::new(self.services.clone(), self.gate.clone(), self.policy)
    }

    pub fn list_podcasts_handler(&self) -> ListPodcastsHandler {
        ListPodcastsHandler::new(self.podcasts.clone())
    }

    pub fn get_podcast_handler(&self) -> GetPodcastHandler {
        GetPodcastHandler::new(self.podcasts.clone())
    }

    pub fn add_podcast_handler(&self) -> AddPodcastHandler {
        AddPodcastHandler::new(self.podcasts.clone(), self.gate.clone())
    }

    // Dashboard

    pub fn dashboard_stats_handler(&self) -> GetDashboardStatsHandler {
        GetDashboardStatsHandler::new(
            self.clients.clone(),
            self.mentorships.clone(),
            self.initiatives.clone(),
        )
    }
}
