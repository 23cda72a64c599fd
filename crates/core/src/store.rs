//! Persistence store port and an in-memory implementation.

use async_trait::async_trait;
use eyre::Result;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::slot::{NewSlot, Slot, SlotScope};

/// Access to the `slots` collection.
///
/// Implementations report their own failures through `eyre`; the access layer
/// wraps them into [`crate::errors::SlotError::Store`] without retrying.
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Slots in `scope`, ascending by `start_utc`.
    async fn list_slots(&self, scope: SlotScope) -> Result<Vec<Slot>>;

    async fn get_slot(&self, id: Uuid) -> Result<Option<Slot>>;

    /// Inserts a single row and returns it with its assigned id.
    async fn insert_slot(&self, slot: NewSlot) -> Result<Slot>;

    async fn delete_slot(&self, id: Uuid) -> Result<()>;
}

/// Process-local store, used for tests and local runs.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<Vec<Slot>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing rows.
    pub fn with_slots(slots: Vec<Slot>) -> Self {
        Self {
            slots: RwLock::new(slots),
        }
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn list_slots(&self, scope: SlotScope) -> Result<Vec<Slot>> {
        let mut slots: Vec<Slot> = self
            .slots
            .read()
            .await
            .iter()
            .filter(|slot| scope.includes(slot))
            .cloned()
            .collect();
        slots.sort_by_key(|slot| slot.start_utc);
        Ok(slots)
    }

    async fn get_slot(&self, id: Uuid) -> Result<Option<Slot>> {
        Ok(self.slots.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn insert_slot(&self, slot: NewSlot) -> Result<Slot> {
        let slot = Slot::from_new(Uuid::new_v4(), slot);
        self.slots.write().await.push(slot.clone());
        Ok(slot)
    }

    async fn delete_slot(&self, id: Uuid) -> Result<()> {
        self.slots.write().await.retain(|slot| slot.id != id);
        Ok(())
    }
}
