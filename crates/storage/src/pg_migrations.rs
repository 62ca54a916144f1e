//! PostgreSQL schema for the todo read projection.

use sqlx::PgPool;

/// Create the projection table and its indexes if they are missing.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todo_read_projection (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL CHECK (title <> ''),
            description TEXT,
            status TEXT NOT NULL CHECK (status IN ('pending', 'completed')),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            due_date DATE,
            deleted_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_todo_status_created
             ON todo_read_projection (status, created_at DESC) WHERE deleted_at IS NULL",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_todo_due_date
             ON todo_read_projection (due_date, created_at DESC) WHERE deleted_at IS NULL",
    )
    .execute(pool)
    .await?;

    Ok(())
}
