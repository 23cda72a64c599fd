use crate::models::DbSlot;
use chrono::Utc;
use eagerbirds_core::models::slot::NewSlot;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_slot(pool: &Pool<Postgres>, slot: &NewSlot) -> Result<DbSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating slot: id={}, teacher_id={}, start={}, end={}",
        id, slot.teacher_id, slot.start_utc, slot.end_utc
    );

    let row = sqlx::query_as::<_, DbSlot>(
        r#"
        INSERT INTO slots (id, teacher_id, start_utc, end_utc, slot_type, status, notes, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, teacher_id, start_utc, end_utc, slot_type, status, notes, created_at
        "#,
    )
    .bind(id)
    .bind(slot.teacher_id)
    .bind(slot.start_utc)
    .bind(slot.end_utc)
    .bind(slot.slot_type.as_str())
    .bind(slot.status.as_str())
    .bind(slot.notes.as_deref())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_slot_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSlot>> {
    let row = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, teacher_id, start_utc, end_utc, slot_type, status, notes, created_at
        FROM slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_all_slots(pool: &Pool<Postgres>) -> Result<Vec<DbSlot>> {
    let rows = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, teacher_id, start_utc, end_utc, slot_type, status, notes, created_at
        FROM slots
        ORDER BY start_utc ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_slots_by_teacher_id(pool: &Pool<Postgres>, teacher_id: Uuid) -> Result<Vec<DbSlot>> {
    let rows = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, teacher_id, start_utc, end_utc, slot_type, status, notes, created_at
        FROM slots
        WHERE teacher_id = $1
        ORDER BY start_utc ASC
        "#,
    )
    .bind(teacher_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn delete_slot_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
