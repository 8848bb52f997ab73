//! Portfolio project actions

use tracing::info;

use crate::auth::AdminIdentity;
use crate::content::{validate, Project, ProjectInput};
use crate::revalidate::paths;
use crate::store::{Filter, Patch, Query};

use super::{ActionResult, Backoffice, Completed};

impl Backoffice {
    /// List projects, newest first (public)
    pub async fn list_projects(&self) -> ActionResult<Vec<Project>> {
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    /// List projects in one category, newest first (public)
    pub async fn list_projects_in_category(&self, category: &str) -> ActionResult<Vec<Project>> {
        let query = Query::all().with_filter(Filter::eq("category", category));
        Ok(Completed::new(self.fetch_all(query).await?))
    }

    /// Fetch one project (public)
    pub async fn get_project(&self, id: &str) -> ActionResult<Project> {
        Ok(Completed::new(self.fetch_one(id).await?))
    }

    /// Create a project and refresh the work pages
    pub async fn create_project(
        &self,
        identity: &AdminIdentity,
        input: ProjectInput,
    ) -> ActionResult<Project> {
        self.gate(identity)?;
        validate::required("Title", &input.title)?;
        validate::required("Slug", &input.slug)?;
        validate::slug(&input.slug)?;
        validate::required("Category", &input.category)?;

        let project = self.create_record(Project::new(input)).await?;
        info!("Created project '{}' by admin {}", project.title, identity.email);

        let effects = self.refresh(paths::project(&project.slug)).await;
        Ok(Completed::with_effects(project, effects))
    }

    /// Patch named fields on a project and refresh the work pages
    pub async fn update_project(
        &self,
        identity: &AdminIdentity,
        id: &str,
        patch: Patch,
    ) -> ActionResult<Project> {
        self.gate(identity)?;
        if let Some(title) = patch.get_str("title") {
            validate::required("Title", title)?;
        }
        if let Some(slug) = patch.get_str("slug") {
            validate::slug(slug)?;
        }

        let project: Project = self.patch_record(id, patch).await?;
        info!("Updated project '{}' by admin {}", project.title, identity.email);

        let effects = self.refresh(paths::project(&project.slug)).await;
        Ok(Completed::with_effects(project, effects))
    }

    /// Delete a project and refresh the work listing pages
    pub async fn delete_project(&self, identity: &AdminIdentity, id: &str) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<Project>(id).await?;
        info!("Deleted project {} by admin {}", id, identity.email);

        let effects = self.refresh(paths::PROJECTS).await;
        Ok(Completed::with_effects((), effects))
    }

    /// Move every project in one category to another in a single pass,
    /// returning how many moved
    pub async fn rename_project_category(
        &self,
        identity: &AdminIdentity,
        from: &str,
        to: &str,
    ) -> ActionResult<u64> {
        self.gate(identity)?;
        validate::required("Current category", from)?;
        validate::required("New category", to)?;

        let changed = self
            .store
            .batch_update::<Project>(
                Filter::eq("category", from),
                Patch::new().set("category", to),
            )
            .await
            .map_err(|e| Self::store_failure::<Project>(e, "update"))?;
        info!(
            "Renamed project category '{}' to '{}' ({} projects) by admin {}",
            from, to, changed, identity.email
        );

        let effects = self.refresh(paths::PROJECTS).await;
        Ok(Completed::with_effects(changed, effects))
    }
}
