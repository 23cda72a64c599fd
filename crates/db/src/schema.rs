use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // The range check mirrors the access layer's validation, which stays the
    // primary signal to users.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            teacher_id UUID NOT NULL,
            start_utc TIMESTAMP WITH TIME ZONE NOT NULL,
            end_utc TIMESTAMP WITH TIME ZONE NOT NULL,
            slot_type VARCHAR(64) NOT NULL DEFAULT 'demo',
            status VARCHAR(32) NOT NULL DEFAULT 'free',
            notes TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_utc > start_utc)
        );
        "#,
    )
    .execute(pool)
    .await?;

    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_slots_teacher_id ON slots(teacher_id);",
        "CREATE INDEX IF NOT EXISTS idx_slots_start_utc ON slots(start_utc);",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
