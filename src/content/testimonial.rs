//! Client testimonial schema

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};
use crate::content::validate;

/// Collection name for testimonials
pub const TESTIMONIAL_COLLECTION: &str = "testimonials";

fn default_rating() -> i64 {
    5
}

/// Client testimonial document, drag-ordered on the home page carousel
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Testimonial {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    pub author: String,

    #[serde(default)]
    pub company: String,

    pub quote: String,

    /// Star rating, 1..=5 (clamped on input, not enforced by the store)
    #[serde(default = "default_rating")]
    pub rating: i64,

    /// Manual display position, ascending
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialInput {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default = "default_rating")]
    pub rating: i64,
    #[serde(default)]
    pub order: i64,
}

impl Default for TestimonialInput {
    fn default() -> Self {
        Self {
            author: String::new(),
            company: String::new(),
            quote: String::new(),
            rating: default_rating(),
            order: 0,
        }
    }
}

impl Testimonial {
    pub fn new(input: TestimonialInput) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            author: input.author,
            company: input.company,
            quote: input.quote,
            rating: validate::clamp_rating(input.rating),
            order: input.order,
        }
    }
}

impl Record for Testimonial {
    const COLLECTION: &'static str = TESTIMONIAL_COLLECTION;
    const ENTITY: &'static str = "Testimonial";
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_clamped_on_input() {
        let testimonial = Testimonial::new(TestimonialInput {
            author: "Priya Nair".to_string(),
            quote: "They rebuilt our storefront in six weeks.".to_string(),
            rating: 11,
            ..Default::default()
        });
        assert_eq!(testimonial.rating, 5);
    }
}
