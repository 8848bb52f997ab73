//! Newsletter subscriber schema

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};

/// Collection name for subscribers
pub const SUBSCRIBER_COLLECTION: &str = "subscribers";

/// Newsletter subscriber document
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Subscriber {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    pub email: String,
}

impl Subscriber {
    pub fn new(email: String) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            email,
        }
    }
}

impl Record for Subscriber {
    const COLLECTION: &'static str = SUBSCRIBER_COLLECTION;
    const ENTITY: &'static str = "Subscriber";

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
