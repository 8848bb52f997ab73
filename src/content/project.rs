//! Portfolio project schema

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};
use crate::content::split_list;

/// Collection name for projects
pub const PROJECT_COLLECTION: &str = "projects";

/// Portfolio project document
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Project {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    pub title: String,

    /// URL fragment, `[a-z0-9-]+`
    pub slug: String,

    #[serde(default)]
    pub summary: String,

    /// Free-form category label ("branding", "web", ...); renamed in bulk
    /// through the batch update action
    pub category: String,

    #[serde(default)]
    pub cover_image: String,

    #[serde(default)]
    pub gallery: Vec<String>,

    #[serde(default)]
    pub client: String,

    #[serde(default)]
    pub year: String,

    /// Featured projects surface on the home page
    #[serde(default)]
    pub featured: bool,
}

/// Fields accepted from the project editor form. Gallery arrives as one
/// comma-separated text field of image URLs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub gallery: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn new(input: ProjectInput) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            title: input.title,
            slug: input.slug,
            summary: input.summary,
            category: input.category,
            cover_image: input.cover_image,
            gallery: split_list(&input.gallery),
            client: input.client,
            year: input.year,
            featured: input.featured,
        }
    }
}

impl Record for Project {
    const COLLECTION: &'static str = PROJECT_COLLECTION;
    const ENTITY: &'static str = "Project";

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
