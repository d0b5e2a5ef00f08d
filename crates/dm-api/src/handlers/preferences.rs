use axum::{Json, extract::State};

use dm_common::prefs::UiPreferences;

use crate::SharedState;
use crate::auth::AuthUser;
use crate::error::ApiError;

/// Current persisted display defaults (dark mode, boot language). Public:
/// the frontend reads this once at load.
pub async fn get_preferences(State(state): State<SharedState>) -> Json<UiPreferences> {
    Json(state.prefs.get())
}

/// Replace the persisted defaults. The store writes through to disk, so
/// the change survives restarts.
pub async fn put_preferences(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(prefs): Json<UiPreferences>,
) -> Result<Json<UiPreferences>, ApiError> {
    state.prefs.replace(prefs);
    Ok(Json(state.prefs.get()))
}
