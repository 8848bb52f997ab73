//! Media object storage
//!
//! Uploaded files land in an external bucket addressed by stable keys; the
//! store keeps only the [`crate::content::MediaAsset`] record pointing at
//! the public URL. [`ObjectStorage`] is the seam between the two, with an
//! in-memory implementation for tests and dev runs.

mod bucket;

pub use bucket::BucketStore;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;

use crate::types::{BackstageError, Result};

/// Writes objects and returns their public URL
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> Result<String>;
}

/// Derive a collision-resistant object key from an uploaded file name.
///
/// The stem is slugified and suffixed with the upload time in unix seconds,
/// so re-uploading `logo.png` never overwrites an earlier object.
pub fn object_key(file_name: &str) -> String {
    object_key_at(file_name, Utc::now().timestamp())
}

fn object_key_at(file_name: &str, timestamp: i64) -> String {
    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (file_name, None),
    };

    let mut slug = slugify(stem);
    if slug.is_empty() {
        slug = "file".to_string();
    }

    match ext {
        Some(ext) => format!("{}-{}.{}", slug, timestamp, ext.to_lowercase()),
        None => format!("{}-{}", slug, timestamp),
    }
}

fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_hyphen = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// One object held by [`MemoryObjectStore`]
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub content_type: String,
    pub data: Bytes,
}

/// Keeps uploads in process memory and addresses them with `memory://` URLs
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, StoredObject>>,
    fail: AtomicBool,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Make subsequent puts fail, for exercising degraded paths
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::Relaxed);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, StoredObject>> {
        self.objects.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ObjectStorage for MemoryObjectStore {
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> Result<String> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(BackstageError::Store(
                "Memory object store set to fail".to_string(),
            ));
        }
        self.lock().insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                data,
            },
        );
        Ok(format!("memory://media/{}", key))
    }
}
