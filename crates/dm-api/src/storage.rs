//! Mentor picture uploads to the hosted object-storage bucket.

use std::env;

use thiserror::Error;
use tracing::{info, instrument};
use ulid::Ulid;

#[derive(Debug, Error)]
pub enum StorageUploadError {
    #[error("object storage is not configured")]
    NotConfigured,
    #[error("unsupported content type: {0}")]
    UnsupportedType(String),
    #[error("storage request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("storage rejected upload with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage API root, e.g. `https://<project>.supabase.co/storage/v1`.
    pub base_url: String,
    pub bucket: String,
    pub service_key: String,
}

impl StorageConfig {
    /// Reads `DM_STORAGE_URL` / `DM_STORAGE_KEY` / `DM_STORAGE_BUCKET`.
    /// Returns `None` when the url or key is absent; uploads then answer
    /// 503 instead of failing at startup, since the rest of the API is
    /// fully usable without pictures.
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("DM_STORAGE_URL").ok()?;
        let service_key = env::var("DM_STORAGE_KEY").ok()?;
        let bucket = env::var("DM_STORAGE_BUCKET").unwrap_or_else(|_| "mentor-pictures".into());

        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket,
            service_key,
        })
    }
}

pub struct StorageClient {
    config: StorageConfig,
    http: reqwest::Client,
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

impl StorageClient {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Time-ordered, collision-free object name.
    fn object_name(extension: &str) -> String {
        format!("{}.{extension}", Ulid::new().to_string().to_lowercase())
    }

    pub fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/object/public/{}/{object_name}",
            self.config.base_url, self.config.bucket
        )
    }

    /// Upload picture bytes and return the public URL to store on the
    /// mentor record.
    #[instrument(skip(self, bytes), fields(bucket = %self.config.bucket, size = bytes.len()))]
    pub async fn upload_picture(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageUploadError> {
        let extension = extension_for(content_type)
            .ok_or_else(|| StorageUploadError::UnsupportedType(content_type.to_string()))?;
        let object_name = Self::object_name(extension);

        let response = self
            .http
            .post(format!(
                "{}/object/{}/{object_name}",
                self.config.base_url, self.config.bucket
            ))
            .bearer_auth(&self.config.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StorageUploadError::Rejected { status, body });
        }

        let url = self.public_url(&object_name);
        info!(object = %object_name, "picture uploaded");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StorageClient {
        StorageClient::new(StorageConfig {
            base_url: "https://project.supabase.co/storage/v1".into(),
            bucket: "mentor-pictures".into(),
            service_key: "key".into(),
        })
    }

    #[test]
    fn object_names_are_unique_and_keep_the_extension() {
        let a = StorageClient::object_name("png");
        let b = StorageClient::object_name("png");
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
        assert_eq!(a.len(), 26 + 4); // ulid + ".png"
    }

    #[test]
    fn public_url_points_into_the_bucket() {
        assert_eq!(
            client().public_url("abc.jpg"),
            "https://project.supabase.co/storage/v1/object/public/mentor-pictures/abc.jpg"
        );
    }

    #[test]
    fn only_image_types_are_accepted() {
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("application/pdf"), None);
        assert_eq!(extension_for("text/html"), None);
    }
}
