//! Storage REST Client
//!
//! Uploads photo objects to the external storage service (Supabase Storage
//! API). One bucket, no overwrites, errors surfaced as human-readable
//! strings for the modal.

use gloo_net::http::Request;

use super::config;
use crate::state::upload::ERR_UPLOAD_FAILED;

/// Bucket all festival photos land in
pub const STORAGE_BUCKET: &str = "photos";

/// Error body shape the storage service returns
#[derive(Debug, serde::Deserialize)]
struct StorageError {
    message: String,
}

/// Client for one storage project/bucket
#[derive(Clone, Debug)]
pub struct StorageClient {
    base_url: String,
    api_key: String,
    bucket: String,
}

impl StorageClient {
    /// Build the client from the configured project URL and key; `None`
    /// when either is missing (the caller degrades to the preview sink)
    pub fn from_config() -> Option<Self> {
        Some(Self {
            base_url: config::storage_url()?,
            api_key: config::storage_api_key()?,
            bucket: STORAGE_BUCKET.to_string(),
        })
    }

    /// Upload one object. Existing keys are never overwritten.
    pub async fn upload(&self, path: &str, file: &web_sys::File) -> Result<(), String> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        );

        let response = Request::post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("x-upsert", "false")
            .header("Content-Type", &file.type_())
            .body(file.clone())
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let error: StorageError = response.json().await.unwrap_or(StorageError {
                message: ERR_UPLOAD_FAILED.to_string(),
            });
            return Err(error.message);
        }

        Ok(())
    }

    /// Public URL an uploaded object is served from
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}
