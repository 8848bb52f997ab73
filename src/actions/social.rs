//! Social post actions
//!
//! The one entity with a lifecycle: drafts may carry a schedule, publishing
//! clears it, and published is terminal. Lifecycle fields only move through
//! the dedicated actions here; the generic patch refuses them.

use tracing::info;

use crate::auth::AdminIdentity;
use crate::content::{validate, SocialPost, SocialPostInput};
use crate::revalidate::paths;
use crate::store::{Patch, Query};

use super::{ActionError, ActionResult, Backoffice, Completed};

impl Backoffice {
    /// List social posts, newest first (public)
    pub async fn list_social_posts(&self) -> ActionResult<Vec<SocialPost>> {
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    /// Fetch one social post (public)
    pub async fn get_social_post(&self, id: &str) -> ActionResult<SocialPost> {
        Ok(Completed::new(self.fetch_one(id).await?))
    }

    /// Create a draft. Posts are never created published, so there is
    /// nothing on the site to refresh yet.
    pub async fn create_social_post(
        &self,
        identity: &AdminIdentity,
        input: SocialPostInput,
    ) -> ActionResult<SocialPost> {
        self.gate(identity)?;
        validate::required("Caption", &input.caption)?;
        validate::required("Image URL", &input.image_url)?;

        let post = self.create_record(SocialPost::new(input)).await?;
        info!("Created social post draft {} by admin {}", post.id, identity.email);
        Ok(Completed::new(post))
    }

    /// Patch content fields on a social post. Status and schedule move
    /// through `publish_social_post` and `schedule_social_post` only.
    pub async fn update_social_post(
        &self,
        identity: &AdminIdentity,
        id: &str,
        patch: Patch,
    ) -> ActionResult<SocialPost> {
        self.gate(identity)?;
        if patch.names().any(|f| f == "status" || f == "scheduled_for") {
            return Err(ActionError::Validation(
                "Status and schedule cannot be edited directly".to_string(),
            ));
        }
        if let Some(caption) = patch.get_str("caption") {
            validate::required("Caption", caption)?;
        }

        let post: SocialPost = self.patch_record(id, patch).await?;
        info!("Updated social post {} by admin {}", post.id, identity.email);

        // Only published posts are on the site
        let effects = if post.is_published() {
            self.refresh(paths::SOCIAL).await
        } else {
            Vec::new()
        };
        Ok(Completed::with_effects(post, effects))
    }

    /// Set or clear the intended publish time on a draft
    pub async fn schedule_social_post(
        &self,
        identity: &AdminIdentity,
        id: &str,
        scheduled_for: Option<String>,
    ) -> ActionResult<SocialPost> {
        self.gate(identity)?;
        let current: SocialPost = self.fetch_one(id).await?;
        if current.is_published() {
            return Err(ActionError::Validation(
                "Post is already published".to_string(),
            ));
        }

        let patch = match scheduled_for.as_deref().map(str::trim) {
            Some(at) if !at.is_empty() => Patch::new().set("scheduled_for", at),
            _ => Patch::new().unset("scheduled_for"),
        };
        let post: SocialPost = self.patch_record(id, patch).await?;
        match &post.scheduled_for {
            Some(at) => info!("Scheduled social post {} for {} by admin {}", post.id, at, identity.email),
            None => info!("Cleared schedule on social post {} by admin {}", post.id, identity.email),
        }
        Ok(Completed::new(post))
    }

    /// Publish a draft immediately. Clears any schedule; terminal.
    pub async fn publish_social_post(
        &self,
        identity: &AdminIdentity,
        id: &str,
    ) -> ActionResult<SocialPost> {
        self.gate(identity)?;
        let current: SocialPost = self.fetch_one(id).await?;
        if current.is_published() {
            return Err(ActionError::Validation(
                "Post is already published".to_string(),
            ));
        }

        let patch = Patch::new().set("status", "published").unset("scheduled_for");
        let post: SocialPost = self.patch_record(id, patch).await?;
        info!("Published social post {} by admin {}", post.id, identity.email);

        let effects = self.refresh(paths::SOCIAL).await;
        Ok(Completed::with_effects(post, effects))
    }

    /// Delete a social post in any state
    pub async fn delete_social_post(
        &self,
        identity: &AdminIdentity,
        id: &str,
    ) -> ActionResult<()> {
        self.gate(identity)?;
        let current: SocialPost = self.fetch_one(id).await?;
        self.remove_record::<SocialPost>(id).await?;
        info!("Deleted social post {} by admin {}", id, identity.email);

        let effects = if current.is_published() {
            self.refresh(paths::SOCIAL).await
        } else {
            Vec::new()
        };
        Ok(Completed::with_effects((), effects))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::Mailboxes;
    use super::*;
    use crate::content::SocialStatus;
    use crate::media::MemoryObjectStore;
    use crate::notify::RecordingMailer;
    use crate::revalidate::RecordingRevalidator;
    use crate::store::ContentStore;

    async fn office() -> (Backoffice, Arc<RecordingRevalidator>) {
        let revalidator = Arc::new(RecordingRevalidator::new());
        let backoffice = Backoffice::new(
            ContentStore::seeded_memory().await.unwrap(),
            Arc::new(RecordingMailer::new()),
            revalidator.clone(),
            Arc::new(MemoryObjectStore::new()),
            Mailboxes::default(),
        );
        (backoffice, revalidator)
    }

    fn admin() -> AdminIdentity {
        AdminIdentity::admin("uid-1", "dana@studiomeridian.example", "Dana Okafor")
    }

    #[tokio::test]
    async fn publish_clears_the_schedule() {
        let (office, revalidator) = office().await;

        // ig-3 is the scheduled draft fixture
        let published = office.publish_social_post(&admin(), "ig-3").await.unwrap();
        assert_eq!(published.data.status, SocialStatus::Published);
        assert_eq!(published.data.scheduled_for, None);
        assert_eq!(revalidator.requested(), vec!["/social"]);
    }

    #[tokio::test]
    async fn publish_works_on_unscheduled_drafts_too() {
        let (office, _) = office().await;
        let published = office.publish_social_post(&admin(), "ig-2").await.unwrap();
        assert!(published.data.is_published());
        assert_eq!(published.data.scheduled_for, None);
    }

    #[tokio::test]
    async fn publishing_twice_is_refused() {
        let (office, _) = office().await;
        office.publish_social_post(&admin(), "ig-2").await.unwrap();

        let err = office.publish_social_post(&admin(), "ig-2").await.unwrap_err();
        assert_eq!(err.message(), "Post is already published");
    }

    #[tokio::test]
    async fn scheduling_a_published_post_is_refused() {
        let (office, _) = office().await;
        let err = office
            .schedule_social_post(&admin(), "ig-1", Some("2026-10-01T09:00:00.000Z".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Post is already published");
    }

    #[tokio::test]
    async fn schedule_can_be_set_and_cleared_on_drafts() {
        let (office, _) = office().await;

        let scheduled = office
            .schedule_social_post(&admin(), "ig-2", Some("2026-10-01T09:00:00.000Z".to_string()))
            .await
            .unwrap();
        assert!(scheduled.data.is_scheduled());

        let cleared = office
            .schedule_social_post(&admin(), "ig-2", None)
            .await
            .unwrap();
        assert_eq!(cleared.data.scheduled_for, None);
        assert_eq!(cleared.data.status, SocialStatus::Draft);
    }

    #[tokio::test]
    async fn generic_patch_refuses_lifecycle_fields() {
        let (office, _) = office().await;

        let err = office
            .update_social_post(&admin(), "ig-2", Patch::new().set("status", "published"))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Status and schedule cannot be edited directly");

        let still_draft = office.get_social_post("ig-2").await.unwrap().data;
        assert_eq!(still_draft.status, SocialStatus::Draft);
    }

    #[tokio::test]
    async fn caption_edits_on_drafts_skip_revalidation() {
        let (office, revalidator) = office().await;
        office
            .update_social_post(&admin(), "ig-2", Patch::new().set("caption", "New caption"))
            .await
            .unwrap();
        assert!(revalidator.requested().is_empty());
    }
}
