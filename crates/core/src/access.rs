//! # Slot Access Layer
//!
//! Translates an [`Actor`] into a read scope over the `slots` collection and
//! validates creation and deletion requests before they reach the store.
//!
//! ## Rules
//!
//! - Admins read every slot; teachers read only the slots they own.
//! - Listings are ordered ascending by `start_utc`, ties keep store order.
//! - Admins cannot create slots. A candidate needs a start and an end, and the
//!   end must be strictly after the start. New slots are always `free`, owned
//!   by the caller, and typed `demo` unless another type was chosen.
//! - Only the owner or an admin may delete a slot.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    config::SchedulerConfig,
    errors::{SlotError, SlotResult},
    models::{
        principal::{Actor, Principal, Role},
        slot::{DisplayCategory, NewSlot, Slot, SlotCandidate, SlotScope, SlotStatus},
    },
    store::SlotStore,
};

pub struct SlotAccess {
    store: Arc<dyn SlotStore>,
    admin_email: String,
}

impl SlotAccess {
    pub fn new(store: Arc<dyn SlotStore>, config: &SchedulerConfig) -> Self {
        Self {
            store,
            admin_email: config.admin_email.clone(),
        }
    }

    /// Resolves the role of `principal` once, for the lifetime of its session.
    pub fn actor(&self, principal: Principal) -> Actor {
        let role = Role::resolve(&principal.email, &self.admin_email);
        Actor { principal, role }
    }

    pub fn scope_for(actor: &Actor) -> SlotScope {
        match actor.role {
            Role::Admin => SlotScope::All,
            Role::Teacher => SlotScope::Teacher(actor.id()),
        }
    }

    /// Lists the slots `actor` may see. Signed-out callers get an empty list.
    pub async fn list_visible_slots(&self, actor: Option<&Actor>) -> SlotResult<Vec<Slot>> {
        let Some(actor) = actor else {
            debug!("No session, returning empty slot list");
            return Ok(Vec::new());
        };

        let scope = Self::scope_for(actor);
        debug!("Listing slots for {} with scope {:?}", actor.email(), scope);

        let mut slots = self.store.list_slots(scope).await.map_err(|e| {
            warn!("Failed to fetch slots for {}: {}", actor.email(), e);
            SlotError::Store(e)
        })?;

        // Stores may return rows out of order; the sort is stable for ties.
        slots.retain(|slot| scope.includes(slot));
        slots.sort_by_key(|slot| slot.start_utc);

        Ok(slots)
    }

    /// Validates `candidate` and submits it as a new free slot owned by `actor`.
    pub async fn create_slot(&self, actor: &Actor, candidate: SlotCandidate) -> SlotResult<Slot> {
        let new_slot = Self::validate(actor, candidate)?;

        let slot = self.store.insert_slot(new_slot).await.map_err(|e| {
            warn!("Store rejected slot for {}: {}", actor.email(), e);
            SlotError::Store(e)
        })?;

        info!(
            "Slot {} created for {} ({} -> {})",
            slot.id,
            actor.email(),
            slot.start_utc,
            slot.end_utc
        );
        Ok(slot)
    }

    /// Deletes slot `id` if `actor` owns it or is an admin.
    pub async fn delete_slot(&self, actor: &Actor, id: Uuid) -> SlotResult<()> {
        let slot = self
            .store
            .get_slot(id)
            .await
            .map_err(SlotError::Store)?
            .ok_or_else(|| SlotError::NotFound(format!("Slot with ID {} not found", id)))?;

        if !actor.is_admin() && slot.teacher_id != actor.id() {
            warn!("{} tried to delete slot {} owned by {}", actor.email(), id, slot.teacher_id);
            return Err(SlotError::Authorization(
                "Slots can only be deleted by their owner".to_string(),
            ));
        }

        self.store.delete_slot(id).await.map_err(SlotError::Store)?;

        info!("Slot {} deleted by {}", id, actor.email());
        Ok(())
    }

    fn validate(actor: &Actor, candidate: SlotCandidate) -> SlotResult<NewSlot> {
        if actor.is_admin() {
            return Err(SlotError::Validation("Admins cannot create slots".to_string()));
        }

        let (Some(start), Some(end)) = (candidate.start, candidate.end) else {
            return Err(SlotError::Validation(
                "Both start and end time are required".to_string(),
            ));
        };

        if end <= start {
            return Err(SlotError::Validation(
                "End time must be after start time".to_string(),
            ));
        }

        let notes = candidate.notes.filter(|notes| !notes.trim().is_empty());

        Ok(NewSlot {
            teacher_id: actor.id(),
            start_utc: start,
            end_utc: end,
            slot_type: candidate.slot_type.unwrap_or_default(),
            status: SlotStatus::Free,
            notes,
        })
    }
}

/// Display category of `slot` for a viewer with role `viewer`.
pub fn classify(slot: &Slot, viewer: Role) -> DisplayCategory {
    match viewer {
        Role::Admin => DisplayCategory::AdminView,
        Role::Teacher if slot.status.is_free() => DisplayCategory::Available,
        Role::Teacher => DisplayCategory::Unavailable,
    }
}
