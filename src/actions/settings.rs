//! Site settings actions
//!
//! Settings live in a single document with a fixed identifier. Reads fall
//! back to defaults when nothing is stored yet; the first write creates
//! the document before patching it.

use tracing::info;

use crate::auth::AdminIdentity;
use crate::content::{SiteSettings, SETTINGS_DOC_ID};
use crate::revalidate::paths;
use crate::store::Patch;

use super::{ActionResult, Backoffice, Completed};

impl Backoffice {
    /// Current site settings, defaults when none are stored (public)
    pub async fn get_settings(&self) -> ActionResult<SiteSettings> {
        match self.store.get::<SiteSettings>(SETTINGS_DOC_ID).await {
            Ok(Some(settings)) => Ok(Completed::new(settings)),
            Ok(None) => Ok(Completed::new(SiteSettings::site_default())),
            Err(e) => Err(Self::store_failure::<SiteSettings>(e, "fetch")),
        }
    }

    /// Patch the settings document, creating it on first write
    pub async fn update_settings(
        &self,
        identity: &AdminIdentity,
        patch: Patch,
    ) -> ActionResult<SiteSettings> {
        self.gate(identity)?;

        let exists = self
            .store
            .get::<SiteSettings>(SETTINGS_DOC_ID)
            .await
            .map_err(|e| Self::store_failure::<SiteSettings>(e, "update"))?
            .is_some();
        if !exists {
            self.create_record(SiteSettings::site_default()).await?;
        }

        let settings: SiteSettings = self.patch_record(SETTINGS_DOC_ID, patch).await?;
        info!("Updated site settings by admin {}", identity.email);

        let effects = self.refresh(paths::SETTINGS).await;
        Ok(Completed::with_effects(settings, effects))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::Mailboxes;
    use super::*;
    use crate::media::MemoryObjectStore;
    use crate::notify::RecordingMailer;
    use crate::revalidate::RecordingRevalidator;
    use crate::store::ContentStore;

    fn office(store: ContentStore) -> Backoffice {
        Backoffice::new(
            store,
            Arc::new(RecordingMailer::new()),
            Arc::new(RecordingRevalidator::new()),
            Arc::new(MemoryObjectStore::new()),
            Mailboxes::default(),
        )
    }

    fn admin() -> AdminIdentity {
        AdminIdentity::admin("uid-1", "dana@studiomeridian.example", "Dana Okafor")
    }

    #[tokio::test]
    async fn reads_fall_back_to_defaults_when_unstored() {
        let office = office(ContentStore::memory());
        let settings = office.get_settings().await.unwrap().data;
        assert_eq!(settings.id, SETTINGS_DOC_ID);
        assert_eq!(settings.meta_title, "");
    }

    #[tokio::test]
    async fn first_write_creates_then_patches() {
        let office = office(ContentStore::memory());

        let updated = office
            .update_settings(&admin(), Patch::new().set("meta_title", "Studio Meridian"))
            .await
            .unwrap();

        assert_eq!(updated.data.meta_title, "Studio Meridian");
        assert_eq!(updated.data.meta_description, "");

        let stored = office.get_settings().await.unwrap().data;
        assert_eq!(stored.meta_title, "Studio Meridian");
    }

    #[tokio::test]
    async fn patches_leave_other_settings_fields_alone() {
        let office = office(ContentStore::seeded_memory().await.unwrap());

        let updated = office
            .update_settings(&admin(), Patch::new().set("analytics_id", "G-NEW"))
            .await
            .unwrap();

        assert_eq!(updated.data.analytics_id, "G-NEW");
        assert!(updated.data.meta_title.starts_with("Studio Meridian"));
    }
}
