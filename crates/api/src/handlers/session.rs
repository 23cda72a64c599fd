use axum::Json;
use eagerbirds_core::models::principal::SessionResponse;

use crate::middleware::auth::MaybeActor;

/// Reports who the caller is. Signed out is a normal answer, not an error.
pub async fn get_session(MaybeActor(actor): MaybeActor) -> Json<SessionResponse> {
    Json(
        actor
            .as_ref()
            .map(SessionResponse::from)
            .unwrap_or_else(SessionResponse::signed_out),
    )
}
