//! HTTP wiring tests driven through `tower::ServiceExt::oneshot`.
//!
//! These tests verify:
//! 1. Routes reach the right handlers with the right status codes
//! 2. Validation failures map to 400 and missing ids to 404
//! 3. Response bodies carry the documented JSON shapes

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ana_conecta::adapters::http::{app, AppState};
use ana_conecta::config::ServerConfig;
use ana_conecta::domain::foundation::InputPolicy;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app(state: &AppState) -> Router {
    app(state.clone(), &ServerConfig::default())
}

async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = test_app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn send_raw(state: &AppState, method: &str, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = test_app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn create_client(state: &AppState, name: &str) -> Value {
    let (status, body) = send(
        state,
        "POST",
        "/api/clients",
        Some(json!({"name": name, "email": "ana@example.com", "phone": "11 99999-0000"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

// =============================================================================
// Clients
// =============================================================================

#[tokio::test]
async fn client_crud_round_trip() {
    let state = AppState::in_memory();

    let created = create_client(&state, "Ana").await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "prospect");
    assert_eq!(created["notes"], "");

    let (status, updated) = send(
        &state,
        "PUT",
        "/api/clients/1",
        Some(json!({"status": "active", "notes": "VIP"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "active");
    assert_eq!(updated["name"], "Ana");

    let (status, listed) = send(&state, "GET", "/api/clients?status=active", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, body) = send(&state, "DELETE", "/api/clients/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, _) = send(&state, "DELETE", "/api/clients/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn client_without_name_is_bad_request() {
    let state = AppState::in_memory();

    let (status, body) = send(
        &state,
        "POST",
        "/api/clients",
        Some(json!({"email": "a@b.c", "phone": "1"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMPTY_FIELD");
}

#[tokio::test]
async fn unknown_and_malformed_ids_are_not_found() {
    let state = AppState::in_memory();

    let (status, body) = send(&state, "GET", "/api/clients/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = send(&state, "GET", "/api/clients/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Initiatives
// =============================================================================

#[tokio::test]
async fn initiatives_list_by_priority_and_coerce_bad_priority() {
    let state = AppState::in_memory();
    for (title, priority) in [("a", json!(5)), ("b", json!(1)), ("c", json!("99"))] {
        let (status, _) = send(
            &state,
            "POST",
            "/api/initiatives",
            Some(json!({
                "title": title,
                "description": "d",
                "category": "Podcast",
                "priority": priority
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, listed) = send(&state, "GET", "/api/initiatives?category=Podcast", None).await;
    let priorities: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["priority"].as_i64().unwrap())
        .collect();
    assert_eq!(priorities, vec![1, 3, 5]);
}

#[tokio::test]
async fn unknown_category_is_bad_request() {
    let state = AppState::in_memory();

    let (status, _) = send(
        &state,
        "POST",
        "/api/initiatives",
        Some(json!({"title": "t", "description": "d", "category": "Marketing"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn categories_are_listed_in_order() {
    let state = AppState::in_memory();

    let (status, body) = send(&state, "GET", "/api/initiative-categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 7);
    assert_eq!(body[0], "Mentoria Individual");
    assert_eq!(body[6], "Outros");
}

#[tokio::test]
async fn strict_policy_rejects_bad_priority() {
    let state = AppState::in_memory().with_policy(InputPolicy::Strict);

    let (status, _) = send(
        &state,
        "POST",
        "/api/initiatives",
        Some(json!({"title": "t", "description": "d", "category": "Podcast", "priority": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_priority_values_fall_back_to_default() {
    let state = AppState::in_memory();

    for priority in [json!(true), json!([1]), json!({"v": 1})] {
        let (status, created) = send(
            &state,
            "POST",
            "/api/initiatives",
            Some(json!({
                "title": "t",
                "description": "d",
                "category": "Podcast",
                "priority": priority
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{priority}");
        assert_eq!(created["priority"], 3);
    }

    let (status, updated) = send(
        &state,
        "PUT",
        "/api/initiatives/1",
        Some(json!({"priority": false, "title": "renamed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["priority"], 3);
    assert_eq!(updated["title"], "renamed");
}

#[tokio::test]
async fn strict_policy_rejects_non_numeric_priority() {
    let state = AppState::in_memory().with_policy(InputPolicy::Strict);

    let (status, body) = send(
        &state,
        "POST",
        "/api/initiatives",
        Some(json!({"title": "t", "description": "d", "category": "Podcast", "priority": true})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
}

// =============================================================================
// Request bodies
// =============================================================================

#[tokio::test]
async fn malformed_json_is_bad_request_with_error_body() {
    let state = AppState::in_memory();

    let (status, body) = send_raw(&state, "POST", "/api/clients", "{\"name\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn mistyped_fields_are_bad_requests() {
    let state = AppState::in_memory();
    create_client(&state, "Ana").await;

    let (status, body) = send(
        &state,
        "POST",
        "/api/mentorships",
        Some(json!({"client_id": 1.0, "title": "t", "description": "d"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (status, _) = send(
        &state,
        "POST",
        "/api/client-portal/services",
        Some(json!({"title": "Mentoria", "client_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &state,
        "PUT",
        "/api/client-portal/services/1",
        Some(json!({"price": "R$ 900,00", "installments": "3"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

// =============================================================================
// Mentorships
// =============================================================================

#[tokio::test]
async fn mentorship_promotes_client_and_reports_client_name() {
    let state = AppState::in_memory();
    create_client(&state, "Ana").await;

    let (status, created) = send(
        &state,
        "POST",
        "/api/mentorships",
        Some(json!({"client_id": "1", "title": "Liderança", "description": "Programa"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["client_name"], "Ana");
    assert_eq!(created["status"], "initial_contact");

    let (_, client) = send(&state, "GET", "/api/clients/1", None).await;
    assert_eq!(client["status"], "active");

    let (status, _) = send(
        &state,
        "PUT",
        "/api/mentorships/1",
        Some(json!({"status": "completed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, client) = send(&state, "GET", "/api/clients/1", None).await;
    assert_eq!(client["status"], "completed");
}

#[tokio::test]
async fn mentorship_for_missing_client_is_bad_request() {
    let state = AppState::in_memory();

    let (status, _) = send(
        &state,
        "POST",
        "/api/mentorships",
        Some(json!({"client_id": 7, "title": "t", "description": "d"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &state,
        "POST",
        "/api/mentorships",
        Some(json!({"client_id": "seven", "title": "t", "description": "d"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_client_filter_is_bad_request() {
    let state = AppState::in_memory();

    let (status, _) = send(&state, "GET", "/api/mentorships?client_id=abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Client portal
// =============================================================================

#[tokio::test]
async fn service_records_and_status_timeline() {
    let state = AppState::in_memory();

    let (status, service) = send(
        &state,
        "POST",
        "/api/client-portal/services",
        Some(json!({"title": "Mentoria", "client_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(service["installments"], 1);
    assert_eq!(service["price"], "");

    let (status, message) = send(
        &state,
        "POST",
        "/api/client-portal/services/1/chat",
        Some(json!({"sender": "client", "message": "Olá"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(message["sender"], "client");

    let (status, document) = send(
        &state,
        "POST",
        "/api/client-portal/services/1/documents",
        Some(json!({"type": "contract", "name": "Contrato.pdf"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(document["type"], "contract");

    let (status, _) = send(
        &state,
        "POST",
        "/api/client-portal/services/1/chat",
        Some(json!({"sender": "client", "message": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = send(
        &state,
        "PUT",
        "/api/client-portal/services/1",
        Some(json!({"status": "contract_signed", "price": "R$ 900,00", "installments": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], "R$ 900,00");
    let timeline = updated["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0]["description"], "Contrato assinado");
    assert_eq!(updated["chat_history"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn appending_to_missing_service_is_not_found() {
    let state = AppState::in_memory();

    let (status, _) = send(
        &state,
        "POST",
        "/api/client-portal/services/5/meetings",
        Some(json!({"date": "2025-05-10", "topic": "Kickoff"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seeded_podcasts_list_newest_first() {
    let state = AppState::in_memory();
    state.seeder().seed().await.unwrap();

    let (status, body) = send(&state, "GET", "/api/client-portal/podcasts", None).await;
    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-04-15", "2025-03-28", "2025-03-10"]);

    let (status, services) = send(&state, "GET", "/api/client-portal/services?client_id=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(services[0]["title"], "Mentoria em Liderança");
}

// =============================================================================
// Export and dashboard
// =============================================================================

#[tokio::test]
async fn export_defaults_to_csv_attachment() {
    let state = AppState::in_memory();
    create_client(&state, "Ana").await;

    let request = Request::post("/api/export/clients").body(Body::empty()).unwrap();
    let response = test_app(&state).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"clientes_"));
    assert!(disposition.ends_with(".csv\""));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("Nome,Email,Telefone,Status,Notas,Data_Criacao"));
    assert!(text.contains("Ana,ana@example.com"));
}

#[tokio::test]
async fn export_rejects_unknown_format() {
    let state = AppState::in_memory();

    let (status, _) = send(
        &state,
        "POST",
        "/api/export/clients",
        Some(json!({"format": "xlsx"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_counts_clients_and_work() {
    let state = AppState::in_memory();
    create_client(&state, "Ana").await;
    create_client(&state, "Bia").await;
    send(
        &state,
        "POST",
        "/api/mentorships",
        Some(json!({"client_id": 1, "title": "t", "description": "d", "status": "in_progress"})),
    )
    .await;
    send(
        &state,
        "POST",
        "/api/initiatives",
        Some(json!({"title": "t", "description": "d", "category": "Outros"})),
    )
    .await;

    let (status, stats) = send(&state, "GET", "/api/dashboard", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_clients"], 2);
    assert_eq!(stats["prospect_clients"], 1);
    assert_eq!(stats["active_clients"], 1);
    assert_eq!(stats["active_mentorships"], 1);
    assert_eq!(stats["pending_initiatives"], 1);
}
