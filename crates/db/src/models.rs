use chrono::{DateTime, Utc};
use eagerbirds_core::models::slot::Slot;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlot {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
    pub slot_type: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbSlot> for Slot {
    fn from(row: DbSlot) -> Self {
        Slot {
            id: row.id,
            teacher_id: row.teacher_id,
            start_utc: row.start_utc,
            end_utc: row.end_utc,
            slot_type: row.slot_type.into(),
            status: row.status.into(),
            notes: row.notes,
        }
    }
}
