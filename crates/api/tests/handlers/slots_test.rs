use std::sync::Arc;

use axum::http::StatusCode;
use eagerbirds_core::{
    models::slot::{
        DeleteSlotResponse, DisplayCategory, SlotListResponse, SlotResponse, SlotStatus, SlotType,
    },
    store::{MemorySlotStore, SlotStore},
};
use eagerbirds_db::mock::repositories::MockSlotRepo;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{OTHER_TEACHER_TOKEN, TEACHER_TOKEN, ADMIN_TOKEN, TestContext, bearer};

fn store() -> Arc<MemorySlotStore> {
    Arc::new(MemorySlotStore::new())
}

#[test_log::test(tokio::test)]
async fn test_signed_out_listing_is_empty() {
    let ctx = TestContext::new();
    let server = ctx.server(store());

    let response = server.get("/api/slots").await;

    response.assert_status_ok();
    let body: SlotListResponse = response.json();
    assert!(!body.signed_in);
    assert_eq!(body.role, None);
    assert!(body.slots.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_unknown_token_is_treated_as_signed_out() {
    let ctx = TestContext::new();
    let server = ctx.server(store());
    let (name, value) = bearer("expired-token");

    let response = server.get("/api/slots").add_header(name, value).await;

    response.assert_status_ok();
    assert!(!response.json::<SlotListResponse>().signed_in);
}

#[test_log::test(tokio::test)]
async fn test_teacher_creates_and_lists_own_slots() {
    let ctx = TestContext::new();
    let server = ctx.server(store());
    let (name, value) = bearer(TEACHER_TOKEN);

    let created = server
        .post("/api/slots")
        .add_header(name.clone(), value.clone())
        .json(&json!({
            "start": "2025-01-01T10:00:00Z",
            "end": "2025-01-01T11:00:00Z",
            "notes": "Trial lesson"
        }))
        .await;

    created.assert_status_ok();
    let slot: SlotResponse = created.json();
    assert_eq!(slot.teacher_id, ctx.teacher.id);
    assert_eq!(slot.status, SlotStatus::Free);
    assert_eq!(slot.slot_type, SlotType::Demo);
    assert_eq!(slot.title, "DEMO (free)");
    assert_eq!(slot.category, DisplayCategory::Available);

    let listed = server.get("/api/slots").add_header(name, value).await;
    listed.assert_status_ok();
    let body: SlotListResponse = listed.json();
    assert!(body.signed_in);
    assert_eq!(body.slots, vec![slot]);
}

#[test_log::test(tokio::test)]
async fn test_scenario_visibility_across_roles() {
    let ctx = TestContext::new();
    let server = ctx.server(store());
    let (name, value) = bearer(TEACHER_TOKEN);

    let created: SlotResponse = server
        .post("/api/slots")
        .add_header(name, value)
        .json(&json!({
            "start": "2025-01-01T10:00:00Z",
            "end": "2025-01-01T11:00:00Z"
        }))
        .await
        .json();

    let (name, value) = bearer(OTHER_TEACHER_TOKEN);
    let other: SlotListResponse = server.get("/api/slots").add_header(name, value).await.json();
    assert!(other.slots.iter().all(|slot| slot.id != created.id));

    let (name, value) = bearer(ADMIN_TOKEN);
    let admin: SlotListResponse = server.get("/api/slots").add_header(name, value).await.json();
    let seen = admin
        .slots
        .iter()
        .find(|slot| slot.id == created.id)
        .expect("admin should see every slot");
    assert_eq!(seen.category, DisplayCategory::AdminView);
}

#[rstest]
#[case(json!({ "start": "2025-01-01T11:00:00Z", "end": "2025-01-01T10:00:00Z" }))]
#[case(json!({ "start": "2025-01-01T10:00:00Z", "end": "2025-01-01T10:00:00Z" }))]
#[case(json!({ "start": "2025-01-01T10:00:00Z" }))]
#[case(json!({}))]
#[tokio::test]
async fn test_invalid_candidates_are_rejected(#[case] payload: Value) {
    let ctx = TestContext::new();
    let slots = store();
    let server = ctx.server(slots.clone());
    let (name, value) = bearer(TEACHER_TOKEN);

    let response = server
        .post("/api/slots")
        .add_header(name, value)
        .json(&payload)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
    assert!(slots.is_empty().await);
}

#[test_log::test(tokio::test)]
async fn test_admin_cannot_create_slots() {
    let ctx = TestContext::new();
    let slots = store();
    let server = ctx.server(slots.clone());
    let (name, value) = bearer(ADMIN_TOKEN);

    let response = server
        .post("/api/slots")
        .add_header(name, value)
        .json(&json!({
            "start": "2025-01-01T10:00:00Z",
            "end": "2025-01-01T11:00:00Z"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(slots.is_empty().await);
}

#[test_log::test(tokio::test)]
async fn test_create_requires_sign_in() {
    let ctx = TestContext::new();
    let server = ctx.server(store());

    let response = server
        .post("/api/slots")
        .json(&json!({
            "start": "2025-01-01T10:00:00Z",
            "end": "2025-01-01T11:00:00Z"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[test_log::test(tokio::test)]
async fn test_quick_slot_is_one_hour_demo() {
    let ctx = TestContext::new();
    let server = ctx.server(store());
    let (name, value) = bearer(TEACHER_TOKEN);

    let response = server
        .post("/api/slots/quick")
        .add_header(name, value)
        .json(&json!({ "start": "2025-03-04T09:00:00Z" }))
        .await;

    response.assert_status_ok();
    let slot: SlotResponse = response.json();
    assert_eq!(slot.start_utc.to_rfc3339(), "2025-03-04T09:00:00+00:00");
    assert_eq!(slot.end_utc.to_rfc3339(), "2025-03-04T10:00:00+00:00");
    assert_eq!(slot.slot_type, SlotType::Demo);
    assert_eq!(slot.notes.as_deref(), Some("Added via calendar"));
}

#[test_log::test(tokio::test)]
async fn test_delete_checks_ownership() {
    let ctx = TestContext::new();
    let slots = store();
    let server = ctx.server(slots.clone());
    let (owner_header, owner_value) = bearer(TEACHER_TOKEN);

    let created: SlotResponse = server
        .post("/api/slots")
        .add_header(owner_header.clone(), owner_value.clone())
        .json(&json!({
            "start": "2025-01-01T10:00:00Z",
            "end": "2025-01-01T11:00:00Z"
        }))
        .await
        .json();
    let path = format!("/api/slots/{}", created.id);

    let (name, value) = bearer(OTHER_TEACHER_TOKEN);
    let forbidden = server.delete(&path).add_header(name, value).await;
    forbidden.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(slots.len().await, 1);

    let unauthenticated = server.delete(&path).await;
    unauthenticated.assert_status(StatusCode::UNAUTHORIZED);

    let deleted = server.delete(&path).add_header(owner_header, owner_value).await;
    deleted.assert_status_ok();
    assert_eq!(deleted.json::<DeleteSlotResponse>().id, created.id);
    assert!(slots.is_empty().await);

    let (name, value) = bearer(TEACHER_TOKEN);
    let missing = server.delete(&path).add_header(name, value).await;
    missing.assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_store_failure_is_reported_as_bad_gateway() {
    let ctx = TestContext::new();
    let mut repo = MockSlotRepo::new();
    repo.expect_list_slots()
        .times(1)
        .returning(|_| Err(eyre::eyre!("permission denied for table slots")));
    let store: Arc<dyn SlotStore> = Arc::new(repo);
    let server = ctx.server(store);
    let (name, value) = bearer(TEACHER_TOKEN);

    let response = server.get("/api/slots").add_header(name, value).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        json!("permission denied for table slots")
    );
}

#[test_log::test(tokio::test)]
async fn test_validation_happens_before_the_store() {
    let ctx = TestContext::new();
    let mut repo = MockSlotRepo::new();
    repo.expect_insert_slot().never();
    let server = ctx.server(Arc::new(repo));
    let (name, value) = bearer(TEACHER_TOKEN);

    let response = server
        .post("/api/slots")
        .add_header(name, value)
        .json(&json!({
            "start": "2025-01-01T11:00:00Z",
            "end": "2025-01-01T10:00:00Z"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
