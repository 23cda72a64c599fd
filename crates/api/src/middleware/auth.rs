//! # Authentication Module
//!
//! Resolves the caller from the `Authorization: Bearer <token>` header. Tokens
//! are issued by the hosted auth service and checked through the configured
//! [`TokenVerifier`](eagerbirds_core::session::TokenVerifier); the role is
//! resolved once per request by the access layer.
//!
//! Two extractors are provided:
//!
//! - [`MaybeActor`] never rejects. A missing or unknown token means signed out.
//! - [`RequireActor`] rejects signed-out callers with `401 Unauthorized`.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use eagerbirds_core::{errors::SlotError, models::principal::Actor};
use tracing::debug;

use crate::{ApiState, middleware::error_handling::AppError};

/// Extracts the bearer token from request headers, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// The caller, or `None` when signed out.
#[derive(Debug, Clone)]
pub struct MaybeActor(pub Option<Actor>);

/// The caller; signed-out requests are rejected.
#[derive(Debug, Clone)]
pub struct RequireActor(pub Actor);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for MaybeActor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Ok(MaybeActor(None));
        };

        let principal = state.verifier.principal_for_token(token).await?;
        if principal.is_none() {
            debug!("Bearer token was not accepted, treating request as signed out");
        }

        Ok(MaybeActor(principal.map(|p| state.access.actor(p))))
    }
}

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for RequireActor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let MaybeActor(actor) = MaybeActor::from_request_parts(parts, state).await?;

        actor
            .map(RequireActor)
            .ok_or_else(|| AppError(SlotError::Authentication("Sign in required".to_string())))
    }
}
