//! Award actions

use tracing::info;

use crate::auth::AdminIdentity;
use crate::content::{validate, Award, AwardInput};
use crate::revalidate::paths;
use crate::store::{Patch, Query};

use super::{ActionResult, Backoffice, Completed};

impl Backoffice {
    /// List awards, newest first (public)
    pub async fn list_awards(&self) -> ActionResult<Vec<Award>> {
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    /// Record an award and refresh the pages that show it
    pub async fn create_award(
        &self,
        identity: &AdminIdentity,
        input: AwardInput,
    ) -> ActionResult<Award> {
        self.gate(identity)?;
        validate::required("Title", &input.title)?;
        validate::required("Organization", &input.organization)?;
        validate::required("Date", &input.date)?;

        let award = self.create_record(Award::new(input)).await?;
        info!("Created award '{}' by admin {}", award.title, identity.email);

        let effects = self.refresh(paths::AWARDS).await;
        Ok(Completed::with_effects(award, effects))
    }

    /// Patch named fields on an award
    pub async fn update_award(
        &self,
        identity: &AdminIdentity,
        id: &str,
        patch: Patch,
    ) -> ActionResult<Award> {
        self.gate(identity)?;
        if let Some(title) = patch.get_str("title") {
            validate::required("Title", title)?;
        }

        let award: Award = self.patch_record(id, patch).await?;
        info!("Updated award '{}' by admin {}", award.title, identity.email);

        let effects = self.refresh(paths::AWARDS).await;
        Ok(Completed::with_effects(award, effects))
    }

    /// Delete an award
    pub async fn delete_award(&self, identity: &AdminIdentity, id: &str) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<Award>(id).await?;
        info!("Deleted award {} by admin {}", id, identity.email);

        let effects = self.refresh(paths::AWARDS).await;
        Ok(Completed::with_effects((), effects))
    }
}
