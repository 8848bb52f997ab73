//! FAQ schema

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};

/// Collection name for FAQs
pub const FAQ_COLLECTION: &str = "faqs";

/// FAQ document, drag-ordered on the FAQ page
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Faq {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    pub question: String,

    pub answer: String,

    /// Manual display position, ascending
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaqInput {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub order: i64,
}

impl Faq {
    pub fn new(input: FaqInput) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            question: input.question,
            answer: input.answer,
            order: input.order,
        }
    }
}

impl Record for Faq {
    const COLLECTION: &'static str = FAQ_COLLECTION;
    const ENTITY: &'static str = "FAQ";
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
