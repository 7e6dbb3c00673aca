//! Business rules exercised through the public handler API.
//!
//! Each test builds its own in-memory repositories so nothing is shared
//! between cases.

use std::sync::Arc;

use proptest::prelude::*;

use ana_conecta::adapters::memory::InMemoryRepository;
use ana_conecta::application::handlers::client::{
    CreateClientCommand, CreateClientHandler, DeleteClientCommand, DeleteClientHandler,
    GetClientHandler, GetClientQuery, UpdateClientCommand, UpdateClientHandler,
};
use ana_conecta::application::handlers::initiative::{
    CreateInitiativeCommand, CreateInitiativeHandler, GetInitiativeHandler, GetInitiativeQuery,
    ListInitiativesHandler, ListInitiativesQuery, UpdateInitiativeCommand,
    UpdateInitiativeHandler,
};
use ana_conecta::application::handlers::mentorship::{
    CreateMentorshipCommand, CreateMentorshipHandler, GetMentorshipHandler, GetMentorshipQuery,
    UpdateMentorshipCommand, UpdateMentorshipHandler,
};
use ana_conecta::application::handlers::portal::{
    CreateServiceCommand, CreateServiceHandler, UpdateServiceCommand, UpdateServiceHandler,
};
use ana_conecta::application::CommandGate;
use ana_conecta::domain::client::Client;
use ana_conecta::domain::foundation::{
    ClientId, ClientStatus, ErrorCode, InputPolicy, PriorityInput, Repository, SequentialId,
};
use ana_conecta::domain::initiative::Initiative;
use ana_conecta::domain::mentorship::{Mentorship, UNKNOWN_CLIENT_NAME};
use ana_conecta::domain::portal::ClientService;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Practice {
    clients: Arc<InMemoryRepository<Client>>,
    initiatives: Arc<InMemoryRepository<Initiative>>,
    mentorships: Arc<InMemoryRepository<Mentorship>>,
    services: Arc<InMemoryRepository<ClientService>>,
    gate: CommandGate,
    policy: InputPolicy,
}

impl Practice {
    fn new() -> Self {
        Self {
            clients: Arc::new(InMemoryRepository::new()),
            initiatives: Arc::new(InMemoryRepository::new()),
            mentorships: Arc::new(InMemoryRepository::new()),
            services: Arc::new(InMemoryRepository::new()),
            gate: CommandGate::new(),
            policy: InputPolicy::Lenient,
        }
    }

    async fn client(&self, name: &str) -> Client {
        CreateClientHandler::new(self.clients.clone(), self.gate.clone(), self.policy)
            .handle(CreateClientCommand {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: "+55 11 99999-0000".to_string(),
                ..Default::default()
            })
            .await
            .unwrap()
    }

    async fn initiative(&self, title: &str, category: &str, priority: i64) -> Initiative {
        CreateInitiativeHandler::new(self.initiatives.clone(), self.gate.clone(), self.policy)
            .handle(CreateInitiativeCommand {
                title: title.to_string(),
                description: "desc".to_string(),
                category: category.to_string(),
                status: None,
                priority: Some(PriorityInput::Number(priority)),
            })
            .await
            .unwrap()
    }

    fn create_mentorship(&self) -> CreateMentorshipHandler {
        CreateMentorshipHandler::new(
            self.mentorships.clone(),
            self.clients.clone(),
            self.gate.clone(),
            self.policy,
        )
    }

    fn update_mentorship(&self) -> UpdateMentorshipHandler {
        UpdateMentorshipHandler::new(
            self.mentorships.clone(),
            self.clients.clone(),
            self.gate.clone(),
            self.policy,
        )
    }

    async fn client_status(&self, id: ClientId) -> ClientStatus {
        GetClientHandler::new(self.clients.clone())
            .handle(GetClientQuery { client_id: id })
            .await
            .unwrap()
            .unwrap()
            .status()
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

// =============================================================================
// Identity
// =============================================================================

#[tokio::test]
async fn ids_are_never_reused_after_deletion() {
    let practice = Practice::new();
    let first = practice.client("Ana").await;
    let second = practice.client("Bia").await;

    let deleted = DeleteClientHandler::new(practice.clients.clone(), practice.gate.clone())
        .handle(DeleteClientCommand {
            client_id: second.id(),
        })
        .await
        .unwrap();
    assert!(deleted);

    let third = practice.client("Caio").await;
    assert_eq!(first.id().value(), 1);
    assert_eq!(third.id().value(), 3);
}

proptest! {
    #[test]
    fn consecutive_creations_get_consecutive_ids(
        creations in 1usize..12,
        deletions in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let rt = runtime();
        let ids = rt.block_on(async {
            let practice = Practice::new();
            let delete = DeleteClientHandler::new(practice.clients.clone(), practice.gate.clone());
            let mut ids = Vec::new();
            for i in 0..creations {
                let client = practice.client(&format!("C{}", i)).await;
                if deletions[i] {
                    delete
                        .handle(DeleteClientCommand { client_id: client.id() })
                        .await
                        .unwrap();
                }
                ids.push(client.id().value());
            }
            ids
        });

        let expected: Vec<u64> = (1..=creations as u64).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn out_of_range_priority_on_create_becomes_three(priority in prop_oneof![i64::MIN..1, 6..i64::MAX]) {
        let rt = runtime();
        let stored = rt.block_on(async {
            let practice = Practice::new();
            practice.initiative("t", "Podcast", priority).await.priority().value()
        });
        prop_assert_eq!(stored, 3);
    }

    #[test]
    fn in_range_priority_on_create_is_kept(priority in 1i64..=5) {
        let rt = runtime();
        let stored = rt.block_on(async {
            let practice = Practice::new();
            practice.initiative("t", "Podcast", priority).await.priority().value()
        });
        prop_assert_eq!(stored as i64, priority);
    }

    #[test]
    fn out_of_range_priority_on_update_is_ignored(priority in prop_oneof![i64::MIN..1, 6..i64::MAX]) {
        let rt = runtime();
        let stored = rt.block_on(async {
            let practice = Practice::new();
            let initiative = practice.initiative("t", "Networking", 2).await;
            let mut cmd = UpdateInitiativeCommand::new(initiative.id());
            cmd.priority = Some(PriorityInput::Number(priority));
            UpdateInitiativeHandler::new(
                practice.initiatives.clone(),
                practice.gate.clone(),
                practice.policy,
            )
            .handle(cmd)
            .await
            .unwrap()
            .unwrap()
            .priority()
            .value()
        });
        prop_assert_eq!(stored, 2);
    }
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn client_with_empty_name_is_rejected() {
    let practice = Practice::new();

    let err = CreateClientHandler::new(practice.clients.clone(), practice.gate.clone(), practice.policy)
        .handle(CreateClientCommand {
            name: "".to_string(),
            email: "a@b.c".to_string(),
            phone: "1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::EmptyField);
    assert!(practice.clients.is_empty().await);
}

#[tokio::test]
async fn mentorship_for_missing_client_is_rejected() {
    let practice = Practice::new();

    let err = practice
        .create_mentorship()
        .handle(CreateMentorshipCommand {
            client_id: Some(42u64.into()),
            title: "Liderança".to_string(),
            description: "Programa".to_string(),
            status: None,
        })
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(practice.mentorships.is_empty().await);
}

// =============================================================================
// Cross-aggregate side effects
// =============================================================================

#[tokio::test]
async fn mentorship_lifecycle_drives_client_status() {
    let practice = Practice::new();
    let client = practice.client("Ana").await;
    assert_eq!(client.status(), ClientStatus::Prospect);

    let view = practice
        .create_mentorship()
        .handle(CreateMentorshipCommand {
            client_id: Some(client.id().value().into()),
            title: "Liderança".to_string(),
            description: "Programa".to_string(),
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(practice.client_status(client.id()).await, ClientStatus::Active);

    let mut cmd = UpdateMentorshipCommand::new(view.mentorship.id());
    cmd.status = Some("completed".to_string());
    practice.update_mentorship().handle(cmd).await.unwrap();

    assert_eq!(
        practice.client_status(client.id()).await,
        ClientStatus::Completed
    );
}

#[tokio::test]
async fn deleted_client_reads_as_unknown_on_its_mentorships() {
    let practice = Practice::new();
    let client = practice.client("Ana").await;
    let view = practice
        .create_mentorship()
        .handle(CreateMentorshipCommand {
            client_id: Some(client.id().value().into()),
            title: "t".to_string(),
            description: "d".to_string(),
            status: None,
        })
        .await
        .unwrap();

    let delete = DeleteClientHandler::new(practice.clients.clone(), practice.gate.clone());
    assert!(delete
        .handle(DeleteClientCommand { client_id: client.id() })
        .await
        .unwrap());
    assert!(!delete
        .handle(DeleteClientCommand { client_id: client.id() })
        .await
        .unwrap());

    let fetched = GetMentorshipHandler::new(practice.mentorships.clone(), practice.clients.clone())
        .handle(GetMentorshipQuery {
            mentorship_id: view.mentorship.id(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.client_name, UNKNOWN_CLIENT_NAME);
}

// =============================================================================
// Filtering, sorting and partial updates
// =============================================================================

#[tokio::test]
async fn podcast_initiatives_come_back_by_priority() {
    let practice = Practice::new();
    practice.initiative("low", "Podcast", 5).await;
    practice.initiative("other", "Networking", 1).await;
    practice.initiative("high", "Podcast", 1).await;
    practice.initiative("mid", "Podcast", 3).await;

    let listed = ListInitiativesHandler::new(practice.initiatives.clone())
        .handle(ListInitiativesQuery {
            category: Some("Podcast".to_string()),
            status: None,
        })
        .await
        .unwrap();

    let priorities: Vec<u8> = listed.iter().map(|i| i.priority().value()).collect();
    assert_eq!(priorities, vec![1, 3, 5]);
    assert!(listed.iter().all(|i| i.category().label() == "Podcast"));
}

#[tokio::test]
async fn update_changes_only_the_supplied_fields() {
    let practice = Practice::new();
    let client = practice.client("Ana").await;

    let mut cmd = UpdateClientCommand::new(client.id());
    cmd.notes = Some("Indicada pela Bia".to_string());
    UpdateClientHandler::new(practice.clients.clone(), practice.gate.clone(), practice.policy)
        .handle(cmd)
        .await
        .unwrap()
        .unwrap();

    let fetched = practice.clients.find_by_id(client.id()).await.unwrap().unwrap();
    assert_eq!(fetched.notes(), "Indicada pela Bia");
    assert_eq!(fetched.name(), client.name());
    assert_eq!(fetched.email(), client.email());
    assert_eq!(fetched.status(), client.status());
    assert!(fetched.updated_at() >= client.updated_at());
}

#[tokio::test]
async fn initiative_get_reflects_update() {
    let practice = Practice::new();
    let initiative = practice.initiative("Episódio 4", "Podcast", 2).await;

    let mut cmd = UpdateInitiativeCommand::new(initiative.id());
    cmd.status = Some("in_progress".to_string());
    UpdateInitiativeHandler::new(practice.initiatives.clone(), practice.gate.clone(), practice.policy)
        .handle(cmd)
        .await
        .unwrap();

    let fetched = GetInitiativeHandler::new(practice.initiatives.clone())
        .handle(GetInitiativeQuery {
            initiative_id: initiative.id(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.status().to_string(), "in_progress");
    assert_eq!(fetched.title(), "Episódio 4");
    assert_eq!(fetched.priority().value(), 2);
}

// =============================================================================
// Client-portal timeline
// =============================================================================

#[tokio::test]
async fn every_status_update_appends_one_timeline_event() {
    let practice = Practice::new();
    let service = CreateServiceHandler::new(practice.services.clone(), practice.gate.clone(), practice.policy)
        .handle(CreateServiceCommand {
            title: "Mentoria".to_string(),
            client_id: Some(1u64.into()),
            ..Default::default()
        })
        .await
        .unwrap();
    let update = UpdateServiceHandler::new(practice.services.clone(), practice.gate.clone(), practice.policy);

    for (label, description) in [
        ("proposal_sent", "Proposta enviada ao cliente"),
        ("proposal_sent", "Proposta enviada ao cliente"),
        ("on_hold", "Status atualizado para on_hold"),
    ] {
        let mut cmd = UpdateServiceCommand::new(service.id());
        cmd.status = Some(label.to_string());
        let updated = update.handle(cmd).await.unwrap().unwrap();
        let last = updated.timeline().last().unwrap();
        assert_eq!(last.description, description);
    }

    let stored = practice.services.find_by_id(service.id()).await.unwrap().unwrap();
    assert_eq!(stored.timeline().len(), 3);
    assert_eq!(stored.status().as_str(), "on_hold");
}
