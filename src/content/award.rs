//! Award schema

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};

/// Collection name for awards
pub const AWARD_COLLECTION: &str = "awards";

/// Award document, listed newest-first on the about page
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Award {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    pub title: String,

    pub organization: String,

    /// Date the award was received, as entered ("2023-05-15")
    pub date: String,

    #[serde(default)]
    pub category: String,

    /// Featured awards surface on the home page
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwardInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
}

impl Award {
    pub fn new(input: AwardInput) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            title: input.title,
            organization: input.organization,
            date: input.date,
            category: input.category,
            featured: input.featured,
        }
    }
}

impl Record for Award {
    const COLLECTION: &'static str = AWARD_COLLECTION;
    const ENTITY: &'static str = "Award";

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
