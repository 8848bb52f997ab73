//! Blog post schema
//!
//! Posts are listed newest-first on the public blog; `published` controls
//! public visibility and is toggled through a plain field update.

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};
use crate::content::split_list;

/// Collection name for blog posts
pub const POST_COLLECTION: &str = "posts";

/// Blog post document
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BlogPost {
    /// Store-assigned identifier
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Common timestamps
    #[serde(default)]
    pub metadata: Metadata,

    pub title: String,

    /// URL fragment, `[a-z0-9-]+`
    pub slug: String,

    #[serde(default)]
    pub excerpt: String,

    pub body: String,

    #[serde(default)]
    pub cover_image: String,

    #[serde(default)]
    pub tags: Vec<String>,

    pub author: String,

    /// Whether the post is publicly visible
    #[serde(default)]
    pub published: bool,
}

/// Fields accepted from the post editor form. Tags arrive as one
/// comma-separated text field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPostInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub published: bool,
}

impl BlogPost {
    /// Build a new post from form input. The store assigns id and timestamps.
    pub fn new(input: BlogPostInput) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            title: input.title,
            slug: input.slug,
            excerpt: input.excerpt,
            body: input.body,
            cover_image: input.cover_image,
            tags: split_list(&input.tags),
            author: input.author,
            published: input.published,
        }
    }
}

impl Record for BlogPost {
    const COLLECTION: &'static str = POST_COLLECTION;
    const ENTITY: &'static str = "Post";

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
    fn new_post_starts_unassigned_and_splits_tags() {
        let post = BlogPost::new(BlogPostInput {
            title: "Shipping the rebrand".to_string(),
            slug: "shipping-the-rebrand".to_string(),
            body: "Full write-up".to_string(),
            author: "Dana Okafor".to_string(),
            tags: "design, process , launch".to_string(),
            ..Default::default()
        });

        assert!(post.id.is_empty());
        assert!(post.metadata.created_at.is_empty());
        assert!(!post.published);
        assert_eq!(post.tags, vec!["design", "process", "launch"]);
    }
}
