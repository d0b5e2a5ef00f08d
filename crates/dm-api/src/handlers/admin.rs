use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use dm_common::api::MentorUpsert;
use dm_common::db;
use dm_common::Mentor;

use crate::SharedState;
use crate::auth::AuthUser;
use crate::error::ApiError;

/// Panel listing: every mentor, ordered by Korean name.
pub async fn list_mentors(
    State(state): State<SharedState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Mentor>>, ApiError> {
    let mentors = db::list_mentors(&state.pool).await?;
    Ok(Json(mentors))
}

pub async fn get_mentor(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Mentor>, ApiError> {
    let mentor = db::get_mentor(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("mentor {id} not found")))?;

    Ok(Json(mentor))
}

pub async fn create_mentor(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(mentor): Json<MentorUpsert>,
) -> Result<Json<Mentor>, ApiError> {
    let created = db::insert_mentor(&state.pool, &mentor).await?;
    Ok(Json(created))
}

pub async fn update_mentor(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(mentor): Json<MentorUpsert>,
) -> Result<Json<Mentor>, ApiError> {
    let updated = db::update_mentor(&state.pool, id, &mentor).await?;
    Ok(Json(updated))
}

pub async fn delete_mentor(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    db::delete_mentor(&state.pool, id).await?;
    Ok(Json(json!({ "success": true })))
}

#[derive(Debug, Deserialize)]
pub struct ActiveToggle {
    pub is_active: bool,
}

/// The listing visibility switch on each panel row.
pub async fn set_active(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(toggle): Json<ActiveToggle>,
) -> Result<Json<Mentor>, ApiError> {
    let mentor = db::set_mentor_active(&state.pool, id, toggle.is_active).await?;
    Ok(Json(mentor))
}
