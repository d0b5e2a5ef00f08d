use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use tracing::warn;

use dm_common::api::MentorApplication;
use dm_common::db::insert_mentor;

use crate::SharedState;
use crate::error::ApiError;

/// Public self-application endpoint. The profile is stored inactive for
/// admin review; the notification mail is best-effort and never fails
/// the submission.
pub async fn submit_application(
    State(state): State<SharedState>,
    Json(application): Json<MentorApplication>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    application.validate()?;

    let mentor = insert_mentor(&state.pool, &application.clone().into_upsert()).await?;

    if let Err(err) = state.mailer.send_application_notice(&application).await {
        warn!(error = %err, "failed to send application notice");
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": mentor.id,
            "status": "received",
        })),
    ))
}
