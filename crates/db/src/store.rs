use async_trait::async_trait;
use eagerbirds_core::{
    models::slot::{NewSlot, Slot, SlotScope},
    store::SlotStore,
};
use eyre::Result;
use uuid::Uuid;

use crate::{DbPool, repositories::slot};

/// `SlotStore` backed by a Postgres `slots` table.
#[derive(Debug, Clone)]
pub struct PgSlotStore {
    pool: DbPool,
}

impl PgSlotStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotStore for PgSlotStore {
    async fn list_slots(&self, scope: SlotScope) -> Result<Vec<Slot>> {
        let rows = match scope {
            SlotScope::All => slot::get_all_slots(&self.pool).await?,
            SlotScope::Teacher(teacher_id) => {
                slot::get_slots_by_teacher_id(&self.pool, teacher_id).await?
            }
        };
        Ok(rows.into_iter().map(Slot::from).collect())
    }

    async fn get_slot(&self, id: Uuid) -> Result<Option<Slot>> {
        Ok(slot::get_slot_by_id(&self.pool, id).await?.map(Slot::from))
    }

    async fn insert_slot(&self, new_slot: NewSlot) -> Result<Slot> {
        Ok(slot::create_slot(&self.pool, &new_slot).await?.into())
    }

    async fn delete_slot(&self, id: Uuid) -> Result<()> {
        slot::delete_slot_by_id(&self.pool, id).await
    }
}
