//! Session provider ports.
//!
//! Sessions are owned by the hosted auth service. This crate only observes them:
//! either as a push stream of session changes ([`SessionProvider`]) or by
//! resolving a bearer token on demand ([`TokenVerifier`]).

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::info;

use crate::errors::SlotResult;
use crate::models::principal::{Principal, Session};

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// One-shot read of the current session.
    async fn current_session(&self) -> SlotResult<Option<Session>>;

    /// Subscribes to session changes. The receiver holds the current state
    /// immediately, so the first read never waits.
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Resolves an access token to its principal, `None` when the token is not
    /// accepted.
    async fn principal_for_token(&self, token: &str) -> SlotResult<Option<Principal>>;
}

/// In-process session provider backed by a watch channel.
#[derive(Debug)]
pub struct SessionHandle {
    sender: watch::Sender<Option<Session>>,
}

impl SessionHandle {
    pub fn new(initial: Option<Session>) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn sign_in(&self, principal: Principal) {
        info!("Session started for {}", principal.email);
        self.sender.send_replace(Some(Session { principal }));
    }

    pub fn sign_out(&self) {
        info!("Session ended");
        self.sender.send_replace(None);
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl SessionProvider for SessionHandle {
    async fn current_session(&self) -> SlotResult<Option<Session>> {
        Ok(self.sender.borrow().clone())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.sender.subscribe()
    }
}
