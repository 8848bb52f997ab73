//! Blog post actions

use tracing::info;

use crate::auth::AdminIdentity;
use crate::content::{validate, BlogPost, BlogPostInput};
use crate::revalidate::paths;
use crate::store::{Patch, Query};

use super::{ActionResult, Backoffice, Completed};

impl Backoffice {
    /// List posts, newest first (public)
    pub async fn list_posts(&self) -> ActionResult<Vec<BlogPost>> {
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    /// Fetch one post (public)
    pub async fn get_post(&self, id: &str) -> ActionResult<BlogPost> {
        Ok(Completed::new(self.fetch_one(id).await?))
    }

    /// Create a post and refresh the blog pages
    pub async fn create_post(
        &self,
        identity: &AdminIdentity,
        input: BlogPostInput,
    ) -> ActionResult<BlogPost> {
        self.gate(identity)?;
        validate::required("Title", &input.title)?;
        validate::required("Slug", &input.slug)?;
        validate::slug(&input.slug)?;
        validate::required("Body", &input.body)?;

        let post = self.create_record(BlogPost::new(input)).await?;
        info!("Created post '{}' by admin {}", post.title, identity.email);

        let effects = self.refresh(paths::blog_post(&post.slug)).await;
        Ok(Completed::with_effects(post, effects))
    }

    /// Patch named fields on a post and refresh the blog pages
    pub async fn update_post(
        &self,
        identity: &AdminIdentity,
        id: &str,
        patch: Patch,
    ) -> ActionResult<BlogPost> {
        self.gate(identity)?;
        if let Some(title) = patch.get_str("title") {
            validate::required("Title", title)?;
        }
        if let Some(slug) = patch.get_str("slug") {
            validate::slug(slug)?;
        }

        let post: BlogPost = self.patch_record(id, patch).await?;
        info!("Updated post '{}' by admin {}", post.title, identity.email);

        let effects = self.refresh(paths::blog_post(&post.slug)).await;
        Ok(Completed::with_effects(post, effects))
    }

    /// Delete a post and refresh the blog listing pages
    pub async fn delete_post(&self, identity: &AdminIdentity, id: &str) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<BlogPost>(id).await?;
        info!("Deleted post {} by admin {}", id, identity.email);

        let effects = self.refresh(paths::BLOG).await;
        Ok(Completed::with_effects((), effects))
    }
}
