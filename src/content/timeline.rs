//! Company timeline schema

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};

/// Collection name for timeline entries
pub const TIMELINE_COLLECTION: &str = "timeline";

/// Timeline entry document, drag-ordered on the about page
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TimelineEntry {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    /// Display year, as entered ("2019")
    pub year: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Icon name from the site's icon set
    #[serde(default)]
    pub icon: String,

    /// Manual display position, ascending
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineEntryInput {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i64,
}

impl TimelineEntry {
    pub fn new(input: TimelineEntryInput) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            year: input.year,
            title: input.title,
            description: input.description,
            icon: input.icon,
            order: input.order,
        }
    }
}

impl Record for TimelineEntry {
    const COLLECTION: &'static str = TIMELINE_COLLECTION;
    const ENTITY: &'static str = "Timeline entry";
    const ORDER_FIELD: &'static str = "order";
    const ORDER_ASC: bool = true;

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
