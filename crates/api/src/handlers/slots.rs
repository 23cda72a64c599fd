//! # Slot Handlers
//!
//! Teacher dashboard endpoints. Every listing goes through the access layer,
//! so teachers only ever receive their own slots and admins receive all of
//! them. Each slot carries its display category for the calling role.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use eagerbirds_core::{
    access::classify,
    models::{
        principal::Actor,
        slot::{
            DeleteSlotResponse, QuickSlotRequest, Slot, SlotCandidate, SlotListResponse,
            SlotResponse,
        },
    },
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{
        auth::{MaybeActor, RequireActor},
        error_handling::AppError,
    },
};

pub(crate) fn slot_response(slot: Slot, viewer: &Actor) -> SlotResponse {
    let category = classify(&slot, viewer.role);
    SlotResponse::new(slot, category)
}

/// Lists the slots visible to the caller.
///
/// Signed-out callers receive `200` with `signed_in: false` and no slots.
#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    MaybeActor(actor): MaybeActor,
) -> Result<Json<SlotListResponse>, AppError> {
    let slots = state.access.list_visible_slots(actor.as_ref()).await?;

    let response = match actor {
        Some(actor) => SlotListResponse {
            signed_in: true,
            role: Some(actor.role),
            slots: slots
                .into_iter()
                .map(|slot| slot_response(slot, &actor))
                .collect(),
        },
        None => SlotListResponse {
            signed_in: false,
            role: None,
            slots: Vec::new(),
        },
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    RequireActor(actor): RequireActor,
    Json(payload): Json<SlotCandidate>,
) -> Result<Json<SlotResponse>, AppError> {
    let slot = state.access.create_slot(&actor, payload).await?;

    Ok(Json(slot_response(slot, &actor)))
}

/// Creates a one hour free demo slot starting at the clicked time.
#[axum::debug_handler]
pub async fn create_quick_slot(
    State(state): State<Arc<ApiState>>,
    RequireActor(actor): RequireActor,
    Json(payload): Json<QuickSlotRequest>,
) -> Result<Json<SlotResponse>, AppError> {
    let slot = state
        .access
        .create_slot(&actor, SlotCandidate::quick_demo(payload.start))
        .await?;

    Ok(Json(slot_response(slot, &actor)))
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    RequireActor(actor): RequireActor,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteSlotResponse>, AppError> {
    state.access.delete_slot(&actor, id).await?;

    Ok(Json(DeleteSlotResponse {
        id,
        deleted_at: Utc::now(),
    }))
}
