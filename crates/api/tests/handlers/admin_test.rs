use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use eagerbirds_core::{
    models::{
        principal::Role,
        slot::{DisplayCategory, Slot, SlotListResponse, SlotStatus, SlotType},
    },
    store::MemorySlotStore,
};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::{ADMIN_TOKEN, TEACHER_TOKEN, TestContext, bearer};

fn slot(teacher_id: Uuid, hour: u32, status: SlotStatus) -> Slot {
    Slot {
        id: Uuid::new_v4(),
        teacher_id,
        start_utc: Utc.with_ymd_and_hms(2025, 1, 2, hour, 0, 0).unwrap(),
        end_utc: Utc.with_ymd_and_hms(2025, 1, 2, hour + 1, 0, 0).unwrap(),
        slot_type: SlotType::Class,
        status,
        notes: None,
    }
}

#[test_log::test(tokio::test)]
async fn test_admin_sees_every_slot_in_start_order() {
    let ctx = TestContext::new();
    let late = slot(ctx.teacher.id, 16, SlotStatus::Booked);
    let early = slot(ctx.other_teacher.id, 8, SlotStatus::Free);
    let store = Arc::new(MemorySlotStore::with_slots(vec![late.clone(), early.clone()]));
    let server = ctx.server(store);
    let (name, value) = bearer(ADMIN_TOKEN);

    let response = server.get("/api/admin/slots").add_header(name, value).await;

    response.assert_status_ok();
    let body: SlotListResponse = response.json();
    assert_eq!(body.role, Some(Role::Admin));
    assert_eq!(
        body.slots.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![early.id, late.id]
    );
    assert!(body.slots.iter().all(|s| s.category == DisplayCategory::AdminView));
}

#[test_log::test(tokio::test)]
async fn test_teacher_is_denied_admin_view() {
    let ctx = TestContext::new();
    let server = ctx.server(Arc::new(MemorySlotStore::new()));
    let (name, value) = bearer(TEACHER_TOKEN);

    let response = server.get("/api/admin/slots").add_header(name, value).await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[test_log::test(tokio::test)]
async fn test_admin_view_requires_sign_in() {
    let ctx = TestContext::new();
    let server = ctx.server(Arc::new(MemorySlotStore::new()));

    let response = server.get("/api/admin/slots").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
