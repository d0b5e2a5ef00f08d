use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::Error as PgError;
use tracing::{info, instrument};

use crate::db::{DbPoolError, PgPool};

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("failed to run migration: {0}")]
    Postgres(#[from] PgError),
    #[error("failed to build pool: {0}")]
    PoolBuild(#[from] DbPoolError),
}

struct Migration {
    id: i32,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        id: 1,
        description: "mentors table",
        sql: r#"
CREATE TABLE IF NOT EXISTS dm.mentors (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name_en TEXT,
    name_ko TEXT,
    description_en TEXT,
    description_ko TEXT,
    position_en TEXT,
    position_ko TEXT,
    location_en TEXT,
    location_ko TEXT,
    company_en TEXT,
    company_ko TEXT,
    picture_url TEXT,
    linkedin_url TEXT,
    calendly_url TEXT,
    email TEXT,
    languages TEXT[] NOT NULL DEFAULT '{}',
    tags TEXT[] NOT NULL DEFAULT '{}',
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    session_time_minutes INTEGER,
    session_price_usd DOUBLE PRECISION,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_mentors_active
    ON dm.mentors(is_active)
    WHERE is_active;

CREATE INDEX IF NOT EXISTS idx_mentors_name_ko
    ON dm.mentors(name_ko);
"#,
    },
    Migration {
        id: 2,
        description: "session parameter sanity checks",
        sql: r#"
DO $$
BEGIN
    IF NOT EXISTS (
        SELECT 1 FROM pg_constraint WHERE conname = 'chk_session_time_positive'
    ) THEN
        ALTER TABLE dm.mentors
            ADD CONSTRAINT chk_session_time_positive
            CHECK (session_time_minutes IS NULL OR session_time_minutes > 0);
    END IF;

    IF NOT EXISTS (
        SELECT 1 FROM pg_constraint WHERE conname = 'chk_session_price_nonnegative'
    ) THEN
        ALTER TABLE dm.mentors
            ADD CONSTRAINT chk_session_price_nonnegative
            CHECK (session_price_usd IS NULL OR session_price_usd >= 0);
    END IF;
END $$;
"#,
    },
];

#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrationError> {
    let mut client = pool.get().await?;
    client
        .batch_execute(
            "CREATE SCHEMA IF NOT EXISTS dm;
             CREATE TABLE IF NOT EXISTS dm.schema_migrations (
                id INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
             );",
        )
        .await?;

    for migration in MIGRATIONS {
        let already_applied: bool = client
            .query_one(
                "SELECT EXISTS (SELECT 1 FROM dm.schema_migrations WHERE id = $1)",
                &[&migration.id],
            )
            .await?
            .get(0);

        if already_applied {
            continue;
        }

        let tx = client.transaction().await?;
        tx.batch_execute(migration.sql).await?;
        tx.execute(
            "INSERT INTO dm.schema_migrations (id, description) VALUES ($1, $2)",
            &[&migration.id, &migration.description],
        )
        .await?;
        tx.commit().await?;

        info!(
            id = migration.id,
            description = migration.description,
            "applied migration"
        );
    }

    Ok(())
}
