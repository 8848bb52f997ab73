//! Instagram-style social post schema
//!
//! The only schedulable entity. A post is created as a draft, optionally
//! carries a `scheduled_for` time while it remains a draft, and publishing
//! clears the schedule. `published` is terminal; there is no unpublish.

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};

/// Collection name for social posts
pub const SOCIAL_COLLECTION: &str = "social_posts";

/// Social post lifecycle state
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialStatus {
    /// Not yet visible; may carry a scheduled publish time
    #[default]
    Draft,
    /// Publicly visible; scheduling no longer applies
    Published,
}

/// Social post document
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SocialPost {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    pub caption: String,

    pub image_url: String,

    #[serde(default)]
    pub likes: i64,

    #[serde(default)]
    pub comments: i64,

    #[serde(default)]
    pub status: SocialStatus,

    /// Intended publish time (ISO-8601); only meaningful while `Draft`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
}

/// Fields accepted from the social post composer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialPostInput {
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub scheduled_for: Option<String>,
}

impl SocialPost {
    /// Build a new draft. Engagement counters start at zero.
    pub fn new(input: SocialPostInput) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            caption: input.caption,
            image_url: input.image_url,
            likes: 0,
            comments: 0,
            status: SocialStatus::Draft,
            scheduled_for: input.scheduled_for.filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == SocialStatus::Published
    }

    pub fn is_scheduled(&self) -> bool {
        self.status == SocialStatus::Draft && self.scheduled_for.is_some()
    }
}

impl Record for SocialPost {
    const COLLECTION: &'static str = SOCIAL_COLLECTION;
    const ENTITY: &'static str = "Social post";

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
