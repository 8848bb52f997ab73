//! Page revalidation
//!
//! The public site renders statically, so content writes are followed by a
//! refresh of the affected pages through a webhook on the site host. A
//! refresh failure never rolls back the write that triggered it; it
//! surfaces as a warning on the action result instead.

pub mod paths;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::types::{BackstageError, Result};

/// Triggers a rebuild of one rendered page
#[async_trait]
pub trait Revalidator: Send + Sync {
    async fn revalidate(&self, path: &str) -> Result<()>;
}

/// Calls the site host's revalidation webhook.
///
/// The webhook takes the page path and a shared secret; the endpoint lives
/// under the configured site origin.
pub struct HttpRevalidator {
    client: Client,
    endpoint: String,
    secret: String,
}

impl HttpRevalidator {
    pub fn new(site_origin: &str, secret: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/revalidate", site_origin.trim_end_matches('/')),
            secret: secret.to_string(),
        }
    }
}

#[async_trait]
impl Revalidator for HttpRevalidator {
    async fn revalidate(&self, path: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "path": path, "secret": self.secret }))
            .send()
            .await
            .map_err(|e| BackstageError::Notify(format!("Webhook unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(BackstageError::Notify(format!(
                "Webhook refused: {}",
                response.status()
            )));
        }

        debug!("Revalidated {}", path);
        Ok(())
    }
}

/// Records requested paths instead of calling anything
#[derive(Default)]
pub struct RecordingRevalidator {
    paths: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl RecordingRevalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path requested so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Make subsequent refreshes fail, for exercising degraded paths
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::Relaxed);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.paths.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Revalidator for RecordingRevalidator {
    async fn revalidate(&self, path: &str) -> Result<()> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(BackstageError::Notify(
                "Recording revalidator set to fail".to_string(),
            ));
        }
        self.lock().push(path.to_string());
        Ok(())
    }
}
