//! HTTP bucket storage

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::info;

use crate::media::ObjectStorage;
use crate::types::{BackstageError, Result};

/// Writes objects to an HTTP bucket endpoint with bearer authorization.
///
/// Objects are publicly readable at `{base_url}/{key}` once written; the
/// same URL is used for the authorized PUT.
pub struct BucketStore {
    client: Client,
    base_url: String,
    key: String,
}

impl BucketStore {
    pub fn new(base_url: &str, key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            key: key.to_string(),
        }
    }

    /// Build from `MEDIA_BUCKET_URL` and `MEDIA_BUCKET_KEY`
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("MEDIA_BUCKET_URL")
            .map_err(|_| BackstageError::Config("MEDIA_BUCKET_URL is not set".to_string()))?;
        let key = std::env::var("MEDIA_BUCKET_KEY")
            .map_err(|_| BackstageError::Config("MEDIA_BUCKET_KEY is not set".to_string()))?;
        Ok(Self::new(&base_url, &key))
    }

    pub fn public_url(&self, object_key: &str) -> String {
        format!("{}/{}", self.base_url, object_key)
    }
}

#[async_trait]
impl ObjectStorage for BucketStore {
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> Result<String> {
        let url = self.public_url(key);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.key)
            .header(CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await
            .map_err(|e| BackstageError::Store(format!("Bucket unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(BackstageError::Store(format!(
                "Bucket rejected upload: {}",
                response.status()
            )));
        }

        info!("Stored media object {}", key);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_urls_join_cleanly() {
        let store = BucketStore::new("https://media.studiomeridian.example/site-assets/", "k");
        assert_eq!(
            store.public_url("logo-1700000000.png"),
            "https://media.studiomeridian.example/site-assets/logo-1700000000.png"
        );
    }
}
