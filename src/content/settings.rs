//! Site-wide SEO and analytics settings
//!
//! A single document with a fixed identifier, patched in place by the
//! settings screen. Reads fall back to defaults when the document is
//! missing so public rendering never fails on a fresh store.

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};
use crate::content::split_list;

/// Collection name for settings
pub const SETTINGS_COLLECTION: &str = "settings";

/// Fixed identifier of the one settings document
pub const SETTINGS_DOC_ID: &str = "site";

/// Site settings document
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SiteSettings {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default)]
    pub meta_title: String,

    #[serde(default)]
    pub meta_description: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    /// Analytics property identifier ("G-XXXXXXX")
    #[serde(default)]
    pub analytics_id: String,

    /// Default social share image URL
    #[serde(default)]
    pub og_image: String,
}

/// Fields accepted from the settings form. Keywords arrive as one
/// comma-separated text field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteSettingsInput {
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub analytics_id: String,
    #[serde(default)]
    pub og_image: String,
}

impl SiteSettings {
    /// The empty settings document with its fixed identifier
    pub fn site_default() -> Self {
        Self {
            id: SETTINGS_DOC_ID.to_string(),
            ..Default::default()
        }
    }

    pub fn from_input(input: SiteSettingsInput) -> Self {
        Self {
            id: SETTINGS_DOC_ID.to_string(),
            metadata: Metadata::default(),
            meta_title: input.meta_title,
            meta_description: input.meta_description,
            keywords: split_list(&input.keywords),
            analytics_id: input.analytics_id,
            og_image: input.og_image,
        }
    }
}

impl Record for SiteSettings {
    const COLLECTION: &'static str = SETTINGS_COLLECTION;
    const ENTITY: &'static str = "Settings";

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
