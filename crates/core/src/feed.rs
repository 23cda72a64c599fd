//! # Slot Feed
//!
//! Holds the slot list currently shown to one viewer and keeps it consistent
//! when fetches overlap. Every fetch takes a generation number before it is
//! issued; a result is applied only if no newer fetch has been applied yet,
//! so a slow request for a previous session can never overwrite a fresher list.
//!
//! Mutations act as the actor of the most recently issued fetch, which is the
//! current session even while its listing is still in flight.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::{sync::RwLock, task::JoinHandle};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    access::SlotAccess,
    errors::{SlotError, SlotResult},
    models::{
        principal::Actor,
        slot::{Slot, SlotCandidate},
    },
    session::SessionProvider,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSnapshot {
    /// Generation of the fetch this snapshot came from, 0 before any fetch
    pub generation: u64,
    pub actor: Option<Actor>,
    pub slots: Vec<Slot>,
    /// Displayable message of the last failed fetch
    pub error: Option<String>,
}

impl FeedSnapshot {
    pub fn is_signed_in(&self) -> bool {
        self.actor.is_some()
    }
}

pub struct SlotFeed {
    access: Arc<SlotAccess>,
    issued: AtomicU64,
    /// Generation and actor of the newest fetch issued so far
    latest: RwLock<(u64, Option<Actor>)>,
    state: RwLock<FeedSnapshot>,
}

impl SlotFeed {
    pub fn new(access: Arc<SlotAccess>) -> Self {
        Self {
            access,
            issued: AtomicU64::new(0),
            latest: RwLock::new((0, None)),
            state: RwLock::new(FeedSnapshot::default()),
        }
    }

    pub async fn snapshot(&self) -> FeedSnapshot {
        self.state.read().await.clone()
    }

    /// Fetches the slots visible to `actor` and applies them unless a newer
    /// fetch already completed. Returns the snapshot in effect afterwards.
    pub async fn refresh(&self, actor: Option<Actor>) -> FeedSnapshot {
        let generation = self.issue(actor.clone()).await;
        self.apply(generation, actor).await
    }

    /// Takes the next generation and records `actor` as the one mutations use.
    async fn issue(&self, actor: Option<Actor>) -> u64 {
        let mut latest = self.latest.write().await;
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        *latest = (generation, actor);
        generation
    }

    async fn apply(&self, generation: u64, actor: Option<Actor>) -> FeedSnapshot {
        let result = self.access.list_visible_slots(actor.as_ref()).await;

        let mut state = self.state.write().await;
        if generation <= state.generation {
            debug!(
                "Discarding stale fetch {} (generation {} already applied)",
                generation, state.generation
            );
            return state.clone();
        }

        *state = match result {
            Ok(slots) => FeedSnapshot {
                generation,
                actor,
                slots,
                error: None,
            },
            Err(e) => {
                warn!("Slot fetch {} failed: {}", generation, e);
                FeedSnapshot {
                    generation,
                    actor,
                    slots: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        };
        state.clone()
    }

    /// Creates a slot as the current actor, then re-fetches the list.
    pub async fn create_slot(&self, candidate: SlotCandidate) -> SlotResult<Slot> {
        let actor = self.current_actor().await?;
        let slot = self.access.create_slot(&actor, candidate).await?;
        self.refresh(Some(actor)).await;
        Ok(slot)
    }

    /// Deletes a slot as the current actor, then re-fetches the list.
    pub async fn delete_slot(&self, id: Uuid) -> SlotResult<()> {
        let actor = self.current_actor().await?;
        self.access.delete_slot(&actor, id).await?;
        self.refresh(Some(actor)).await;
        Ok(())
    }

    /// Refreshes the feed on every session change, starting with the current
    /// session. Each refresh runs in its own task.
    pub fn follow(self: Arc<Self>, provider: &dyn SessionProvider) -> JoinHandle<()> {
        let mut sessions = provider.subscribe();
        tokio::spawn(async move {
            loop {
                let session = sessions.borrow_and_update().clone();
                let actor = session.map(|s| self.access.actor(s.principal));
                let generation = self.issue(actor.clone()).await;
                let feed = Arc::clone(&self);
                tokio::spawn(async move {
                    feed.apply(generation, actor).await;
                });

                if sessions.changed().await.is_err() {
                    debug!("Session provider closed, feed stops following");
                    break;
                }
            }
        })
    }

    async fn current_actor(&self) -> SlotResult<Actor> {
        self.latest
            .read()
            .await
            .1
            .clone()
            .ok_or_else(|| SlotError::Authentication("Sign in to manage slots".to_string()))
    }
}
