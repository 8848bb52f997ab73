//! Common record shape shared by every content type
//!
//! Each entity embeds [`Metadata`] and implements [`Record`] so the store
//! can operate generically over collections.

use chrono::{SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;

/// Current time as an ISO-8601 UTC string with millisecond precision.
///
/// Fixed precision keeps lexicographic order equal to chronological order,
/// which is what collection sorting relies on in both backends.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Timestamps carried by every document
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    /// When the document was created
    #[serde(default)]
    pub created_at: String,

    /// When the document was last updated
    #[serde(default)]
    pub updated_at: String,
}

impl Metadata {
    /// Create metadata stamped with the current time
    pub fn stamped() -> Self {
        let now = now_iso();
        Self {
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Fixed timestamps, used by fixture rows so listing order is stable
    pub fn at(timestamp: &str) -> Self {
        Self {
            created_at: timestamp.to_string(),
            updated_at: timestamp.to_string(),
        }
    }

    /// Update the `updated_at` timestamp
    pub fn touch(&mut self) {
        self.updated_at = now_iso();
    }
}

/// A storable content record.
///
/// Identifiers are opaque strings assigned by the store on create and
/// serialized as `_id` in both backends.
pub trait Record:
    Serialize + DeserializeOwned + Unpin + Send + Sync + Clone + Debug + 'static
{
    /// Collection this record lives in
    const COLLECTION: &'static str;

    /// Entity label used in user-facing messages ("Post not found")
    const ENTITY: &'static str;

    /// Field collections are ordered by when the caller does not say otherwise
    const ORDER_FIELD: &'static str = "metadata.created_at";

    /// Whether the default order is ascending (newest-first collections sort descending)
    const ORDER_ASC: bool = false;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn metadata(&self) -> &Metadata;
    fn metadata_mut(&mut self) -> &mut Metadata;
}
