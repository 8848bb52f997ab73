//! Service offering schema
//!
//! Services are drag-ordered on the services page, so listing follows the
//! manual `order` field rather than creation time.

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};

/// Collection name for services
pub const SERVICE_COLLECTION: &str = "services";

/// Service offering document
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Service {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    pub title: String,

    pub blurb: String,

    /// Icon name from the site's icon set
    #[serde(default)]
    pub icon: String,

    /// Manual display position, ascending
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i64,
}

impl Service {
    pub fn new(input: ServiceInput) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            title: input.title,
            blurb: input.blurb,
            icon: input.icon,
            order: input.order,
        }
    }
}

impl Record for Service {
    const COLLECTION: &'static str = SERVICE_COLLECTION;
    const ENTITY: &'static str = "Service";
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
