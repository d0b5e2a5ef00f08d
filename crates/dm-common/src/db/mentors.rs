use deadpool_postgres::PoolError;
use tokio_postgres::{Error as PgError, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::api::mentor_upsert::MentorUpsert;
use crate::db::PgPool;
use crate::Mentor;

#[derive(Debug, thiserror::Error)]
pub enum MentorStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
    #[error("not found: {0}")]
    NotFound(String),
}

const MENTOR_COLUMNS: &str = "id, name_en, name_ko, description_en, description_ko, \
     position_en, position_ko, location_en, location_ko, company_en, company_ko, \
     picture_url, linkedin_url, calendly_url, email, languages, tags, is_active, \
     session_time_minutes, session_price_usd, created_at, updated_at";

fn mentor_from_row(row: &Row) -> Mentor {
    Mentor {
        id: row.get("id"),
        name_en: row.get("name_en"),
        name_ko: row.get("name_ko"),
        description_en: row.get("description_en"),
        description_ko: row.get("description_ko"),
        position_en: row.get("position_en"),
        position_ko: row.get("position_ko"),
        location_en: row.get("location_en"),
        location_ko: row.get("location_ko"),
        company_en: row.get("company_en"),
        company_ko: row.get("company_ko"),
        picture_url: row.get("picture_url"),
        linkedin_url: row.get("linkedin_url"),
        calendly_url: row.get("calendly_url"),
        email: row.get("email"),
        languages: row.get("languages"),
        tags: row.get("tags"),
        is_active: row.get("is_active"),
        session_time_minutes: row.get("session_time_minutes"),
        session_price_usd: row.get("session_price_usd"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Source rows for the public listing. Display order is decided by the
/// caller (the listing shuffles), so no ORDER BY here.
#[instrument(skip(pool))]
pub async fn fetch_active_mentors(pool: &PgPool) -> Result<Vec<Mentor>, MentorStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare(&format!(
            "SELECT {MENTOR_COLUMNS} FROM dm.mentors WHERE is_active"
        ))
        .await?;

    let rows = client.query(&stmt, &[]).await?;
    Ok(rows.iter().map(mentor_from_row).collect())
}

/// Admin view: every mentor, active or not, in the panel's stable order.
#[instrument(skip(pool))]
pub async fn list_mentors(pool: &PgPool) -> Result<Vec<Mentor>, MentorStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare(&format!(
            "SELECT {MENTOR_COLUMNS} FROM dm.mentors ORDER BY name_ko ASC NULLS LAST, id"
        ))
        .await?;

    let rows = client.query(&stmt, &[]).await?;
    Ok(rows.iter().map(mentor_from_row).collect())
}

#[instrument(skip(pool))]
pub async fn get_mentor(pool: &PgPool, id: Uuid) -> Result<Option<Mentor>, MentorStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare(&format!(
            "SELECT {MENTOR_COLUMNS} FROM dm.mentors WHERE id = $1"
        ))
        .await?;

    let row = client.query_opt(&stmt, &[&id]).await?;
    Ok(row.as_ref().map(mentor_from_row))
}

#[instrument(skip(pool, mentor))]
pub async fn insert_mentor(
    pool: &PgPool,
    mentor: &MentorUpsert,
) -> Result<Mentor, MentorStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare(&format!(
            "INSERT INTO dm.mentors (
                name_en, name_ko, description_en, description_ko,
                position_en, position_ko, location_en, location_ko,
                company_en, company_ko, picture_url, linkedin_url,
                calendly_url, email, languages, tags, is_active,
                session_time_minutes, session_price_usd
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19
            )
            RETURNING {MENTOR_COLUMNS}"
        ))
        .await?;

    let row = client
        .query_one(
            &stmt,
            &[
                &mentor.name_en,
                &mentor.name_ko,
                &mentor.description_en,
                &mentor.description_ko,
                &mentor.position_en,
                &mentor.position_ko,
                &mentor.location_en,
                &mentor.location_ko,
                &mentor.company_en,
                &mentor.company_ko,
                &mentor.picture_url,
                &mentor.linkedin_url,
                &mentor.calendly_url,
                &mentor.email,
                &mentor.languages,
                &mentor.tags,
                &mentor.is_active,
                &mentor.session_time_minutes,
                &mentor.session_price_usd,
            ],
        )
        .await?;

    Ok(mentor_from_row(&row))
}

#[instrument(skip(pool, mentor))]
pub async fn update_mentor(
    pool: &PgPool,
    id: Uuid,
    mentor: &MentorUpsert,
) -> Result<Mentor, MentorStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare(&format!(
            "UPDATE dm.mentors SET
                name_en = $2, name_ko = $3, description_en = $4, description_ko = $5,
                position_en = $6, position_ko = $7, location_en = $8, location_ko = $9,
                company_en = $10, company_ko = $11, picture_url = $12, linkedin_url = $13,
                calendly_url = $14, email = $15, languages = $16, tags = $17,
                is_active = $18, session_time_minutes = $19, session_price_usd = $20,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {MENTOR_COLUMNS}"
        ))
        .await?;

    let row = client
        .query_opt(
            &stmt,
            &[
                &id,
                &mentor.name_en,
                &mentor.name_ko,
                &mentor.description_en,
                &mentor.description_ko,
                &mentor.position_en,
                &mentor.position_ko,
                &mentor.location_en,
                &mentor.location_ko,
                &mentor.company_en,
                &mentor.company_ko,
                &mentor.picture_url,
                &mentor.linkedin_url,
                &mentor.calendly_url,
                &mentor.email,
                &mentor.languages,
                &mentor.tags,
                &mentor.is_active,
                &mentor.session_time_minutes,
                &mentor.session_price_usd,
            ],
        )
        .await?;

    row.as_ref()
        .map(mentor_from_row)
        .ok_or_else(|| MentorStorageError::NotFound(format!("mentor {id} not found")))
}

#[instrument(skip(pool))]
pub async fn delete_mentor(pool: &PgPool, id: Uuid) -> Result<(), MentorStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare("DELETE FROM dm.mentors WHERE id = $1")
        .await?;

    let deleted = client.execute(&stmt, &[&id]).await?;
    if deleted == 0 {
        return Err(MentorStorageError::NotFound(format!(
            "mentor {id} not found"
        )));
    }

    Ok(())
}

/// The admin panel's visibility toggle.
#[instrument(skip(pool))]
pub async fn set_mentor_active(
    pool: &PgPool,
    id: Uuid,
    is_active: bool,
) -> Result<Mentor, MentorStorageError> {
    let client = pool.get().await?;

    let stmt = client
        .prepare(&format!(
            "UPDATE dm.mentors SET is_active = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {MENTOR_COLUMNS}"
        ))
        .await?;

    let row = client.query_opt(&stmt, &[&id, &is_active]).await?;

    row.as_ref()
        .map(mentor_from_row)
        .ok_or_else(|| MentorStorageError::NotFound(format!("mentor {id} not found")))
}
