//! Media library asset schema
//!
//! Assets are created by the upload action after the blob has landed in
//! object storage; the record keeps the durable public URL.

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};

/// Collection name for media assets
pub const MEDIA_COLLECTION: &str = "media";

/// Media library entry
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MediaAsset {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    /// Original file name as uploaded
    pub file_name: String,

    /// Public URL returned by object storage
    pub url: String,

    pub content_type: String,

    pub size_bytes: i64,
}

impl MediaAsset {
    pub fn new(file_name: String, url: String, content_type: String, size_bytes: i64) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            file_name,
            url,
            content_type,
            size_bytes,
        }
    }
}

impl Record for MediaAsset {
    const COLLECTION: &'static str = MEDIA_COLLECTION;
    const ENTITY: &'static str = "Media asset";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}
