use axum::{Json, extract::State};
use eagerbirds_core::{errors::SlotError, models::slot::SlotListResponse};
use std::sync::Arc;
use tracing::warn;

use crate::{
    ApiState,
    handlers::slots::slot_response,
    middleware::{auth::RequireActor, error_handling::AppError},
};

/// Admin table of every slot, regardless of owner.
#[axum::debug_handler]
pub async fn list_all_slots(
    State(state): State<Arc<ApiState>>,
    RequireActor(actor): RequireActor,
) -> Result<Json<SlotListResponse>, AppError> {
    if !actor.is_admin() {
        warn!("{} requested the admin view", actor.email());
        return Err(AppError(SlotError::Authorization(
            "Access denied: restricted to administrators".to_string(),
        )));
    }

    let slots = state.access.list_visible_slots(Some(&actor)).await?;

    Ok(Json(SlotListResponse {
        signed_in: true,
        role: Some(actor.role),
        slots: slots
            .into_iter()
            .map(|slot| slot_response(slot, &actor))
            .collect(),
    }))
}
