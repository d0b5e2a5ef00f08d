use axum::{
    Json,
    extract::{Multipart, State},
};
use serde_json::json;

use crate::SharedState;
use crate::auth::AuthUser;
use crate::error::ApiError;

/// Multipart picture upload; responds with the public URL to store in
/// `picture_url`.
pub async fn upload_picture(
    State(state): State<SharedState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let storage = state
        .storage
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable("picture storage is not configured".into()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(format!("invalid multipart body: {err}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .ok_or_else(|| ApiError::BadRequest("file field is missing a content type".into()))?
            .to_string();

        let bytes = field
            .bytes()
            .await
            .map_err(|err| ApiError::BadRequest(format!("failed to read upload: {err}")))?;

        if bytes.is_empty() {
            return Err(ApiError::BadRequest("uploaded file is empty".into()));
        }

        let url = storage.upload_picture(bytes.to_vec(), &content_type).await?;
        return Ok(Json(json!({ "url": url })));
    }

    Err(ApiError::BadRequest(
        "multipart body must contain a 'file' field".into(),
    ))
}
