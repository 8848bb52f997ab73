//! Actions for the list-managed site sections: services, team,
//! testimonials, FAQs, timeline, and skill categories.
//!
//! These rows are edited inline from their listing in the admin, so the
//! surface per entity is list, create, update, delete. Ordering is manual
//! (the `order` field) and listings are public.

use tracing::info;

use crate::auth::AdminIdentity;
use crate::content::{
    validate, Faq, FaqInput, Service, ServiceInput, SkillCategory, SkillCategoryInput,
    TeamMember, TeamMemberInput, Testimonial, TestimonialInput, TimelineEntry,
    TimelineEntryInput,
};
use crate::revalidate::paths;
use crate::store::{Patch, Query};

use super::{ActionResult, Backoffice, Completed};

impl Backoffice {
    // Services

    pub async fn list_services(&self) -> ActionResult<Vec<Service>> {
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    pub async fn create_service(
        &self,
        identity: &AdminIdentity,
        input: ServiceInput,
    ) -> ActionResult<Service> {
        self.gate(identity)?;
        validate::required("Title", &input.title)?;
        validate::required("Blurb", &input.blurb)?;

        let service = self.create_record(Service::new(input)).await?;
        info!("Created service '{}' by admin {}", service.title, identity.email);

        let effects = self.refresh(paths::SERVICES).await;
        Ok(Completed::with_effects(service, effects))
    }

    pub async fn update_service(
        &self,
        identity: &AdminIdentity,
        id: &str,
        patch: Patch,
    ) -> ActionResult<Service> {
        self.gate(identity)?;
        if let Some(title) = patch.get_str("title") {
            validate::required("Title", title)?;
        }

        let service: Service = self.patch_record(id, patch).await?;
        info!("Updated service '{}' by admin {}", service.title, identity.email);

        let effects = self.refresh(paths::SERVICES).await;
        Ok(Completed::with_effects(service, effects))
    }

    pub async fn delete_service(&self, identity: &AdminIdentity, id: &str) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<Service>(id).await?;
        info!("Deleted service {} by admin {}", id, identity.email);

        let effects = self.refresh(paths::SERVICES).await;
        Ok(Completed::with_effects((), effects))
    }

    // Team

    pub async fn list_team(&self) -> ActionResult<Vec<TeamMember>> {
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    pub async fn create_team_member(
        &self,
        identity: &AdminIdentity,
        input: TeamMemberInput,
    ) -> ActionResult<TeamMember> {
        self.gate(identity)?;
        validate::required("Name", &input.name)?;
        validate::required("Role", &input.role)?;

        let member = self.create_record(TeamMember::new(input)).await?;
        info!("Created team member '{}' by admin {}", member.name, identity.email);

        let effects = self.refresh(paths::TEAM).await;
        Ok(Completed::with_effects(member, effects))
    }

    pub async fn update_team_member(
        &self,
        identity: &AdminIdentity,
        id: &str,
        patch: Patch,
    ) -> ActionResult<TeamMember> {
        self.gate(identity)?;
        if let Some(name) = patch.get_str("name") {
            validate::required("Name", name)?;
        }

        let member: TeamMember = self.patch_record(id, patch).await?;
        info!("Updated team member '{}' by admin {}", member.name, identity.email);

        let effects = self.refresh(paths::TEAM).await;
        Ok(Completed::with_effects(member, effects))
    }

    pub async fn delete_team_member(
        &self,
        identity: &AdminIdentity,
        id: &str,
    ) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<TeamMember>(id).await?;
        info!("Deleted team member {} by admin {}", id, identity.email);

        let effects = self.refresh(paths::TEAM).await;
        Ok(Completed::with_effects((), effects))
    }

    // Testimonials

    pub async fn list_testimonials(&self) -> ActionResult<Vec<Testimonial>> {
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    pub async fn create_testimonial(
        &self,
        identity: &AdminIdentity,
        input: TestimonialInput,
    ) -> ActionResult<Testimonial> {
        self.gate(identity)?;
        validate::required("Author", &input.author)?;
        validate::required("Quote", &input.quote)?;

        let testimonial = self.create_record(Testimonial::new(input)).await?;
        info!(
            "Created testimonial from '{}' by admin {}",
            testimonial.author, identity.email
        );

        let effects = self.refresh(paths::TESTIMONIALS).await;
        Ok(Completed::with_effects(testimonial, effects))
    }

    pub async fn update_testimonial(
        &self,
        identity: &AdminIdentity,
        id: &str,
        patch: Patch,
    ) -> ActionResult<Testimonial> {
        self.gate(identity)?;
        if let Some(author) = patch.get_str("author") {
            validate::required("Author", author)?;
        }
        // Ratings patch through clamped, same as on create
        let patch = match patch.get("rating").and_then(|v| v.as_i64()) {
            Some(rating) => patch.set("rating", validate::clamp_rating(rating)),
            None => patch,
        };

        let testimonial: Testimonial = self.patch_record(id, patch).await?;
        info!(
            "Updated testimonial from '{}' by admin {}",
            testimonial.author, identity.email
        );

        let effects = self.refresh(paths::TESTIMONIALS).await;
        Ok(Completed::with_effects(testimonial, effects))
    }

    pub async fn delete_testimonial(
        &self,
        identity: &AdminIdentity,
        id: &str,
    ) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<Testimonial>(id).await?;
        info!("Deleted testimonial {} by admin {}", id, identity.email);

        let effects = self.refresh(paths::TESTIMONIALS).await;
        Ok(Completed::with_effects((), effects))
    }

    // FAQs

    pub async fn list_faqs(&self) -> ActionResult<Vec<Faq>> {
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    pub async fn create_faq(
        &self,
        identity: &AdminIdentity,
        input: FaqInput,
    ) -> ActionResult<Faq> {
        self.gate(identity)?;
        validate::required("Question", &input.question)?;
        validate::required("Answer", &input.answer)?;

        let faq = self.create_record(Faq::new(input)).await?;
        info!("Created FAQ '{}' by admin {}", faq.question, identity.email);

        let effects = self.refresh(paths::FAQS).await;
        Ok(Completed::with_effects(faq, effects))
    }

    pub async fn update_faq(
        &self,
        identity: &AdminIdentity,
        id: &str,
        patch: Patch,
    ) -> ActionResult<Faq> {
        self.gate(identity)?;
        if let Some(question) = patch.get_str("question") {
            validate::required("Question", question)?;
        }

        let faq: Faq = self.patch_record(id, patch).await?;
        info!("Updated FAQ '{}' by admin {}", faq.question, identity.email);

        let effects = self.refresh(paths::FAQS).await;
        Ok(Completed::with_effects(faq, effects))
    }

    pub async fn delete_faq(&self, identity: &AdminIdentity, id: &str) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<Faq>(id).await?;
        info!("Deleted FAQ {} by admin {}", id, identity.email);

        let effects = self.refresh(paths::FAQS).await;
        Ok(Completed::with_effects((), effects))
    }

    // Timeline

    pub async fn list_timeline(&self) -> ActionResult<Vec<TimelineEntry>> {
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    pub async fn create_timeline_entry(
        &self,
        identity: &AdminIdentity,
        input: TimelineEntryInput,
    ) -> ActionResult<TimelineEntry> {
        self.gate(identity)?;
        validate::required("Year", &input.year)?;
        validate::required("Title", &input.title)?;

        let entry = self.create_record(TimelineEntry::new(input)).await?;
        info!(
            "Created timeline entry '{} {}' by admin {}",
            entry.year, entry.title, identity.email
        );

        let effects = self.refresh(paths::TIMELINE).await;
        Ok(Completed::with_effects(entry, effects))
    }

    pub async fn update_timeline_entry(
        &self,
        identity: &AdminIdentity,
        id: &str,
        patch: Patch,
    ) -> ActionResult<TimelineEntry> {
        self.gate(identity)?;
        if let Some(title) = patch.get_str("title") {
            validate::required("Title", title)?;
        }

        let entry: TimelineEntry = self.patch_record(id, patch).await?;
        info!("Updated timeline entry '{}' by admin {}", entry.title, identity.email);

        let effects = self.refresh(paths::TIMELINE).await;
        Ok(Completed::with_effects(entry, effects))
    }

    pub async fn delete_timeline_entry(
        &self,
        identity: &AdminIdentity,
        id: &str,
    ) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<TimelineEntry>(id).await?;
        info!("Deleted timeline entry {} by admin {}", id, identity.email);

        let effects = self.refresh(paths::TIMELINE).await;
        Ok(Completed::with_effects((), effects))
    }

    // Skill categories

    pub async fn list_skills(&self) -> ActionResult<Vec<SkillCategory>> {
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    pub async fn create_skill_category(
        &self,
        identity: &AdminIdentity,
        input: SkillCategoryInput,
    ) -> ActionResult<SkillCategory> {
        self.gate(identity)?;
        validate::required("Name", &input.name)?;

        let category = self.create_record(SkillCategory::new(input)).await?;
        info!(
            "Created skill category '{}' by admin {}",
            category.name, identity.email
        );

        let effects = self.refresh(paths::SKILLS).await;
        Ok(Completed::with_effects(category, effects))
    }

    pub async fn update_skill_category(
        &self,
        identity: &AdminIdentity,
        id: &str,
        patch: Patch,
    ) -> ActionResult<SkillCategory> {
        self.gate(identity)?;
        if let Some(name) = patch.get_str("name") {
            validate::required("Name", name)?;
        }

        let category: SkillCategory = self.patch_record(id, patch).await?;
        info!(
            "Updated skill category '{}' by admin {}",
            category.name, identity.email
        );

        let effects = self.refresh(paths::SKILLS).await;
        Ok(Completed::with_effects(category, effects))
    }

    pub async fn delete_skill_category(
        &self,
        identity: &AdminIdentity,
        id: &str,
    ) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<SkillCategory>(id).await?;
        info!("Deleted skill category {} by admin {}", id, identity.email);

        let effects = self.refresh(paths::SKILLS).await;
        Ok(Completed::with_effects((), effects))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::{ActionError, Mailboxes};
    use super::*;
    use crate::media::MemoryObjectStore;
    use crate::notify::RecordingMailer;
    use crate::revalidate::RecordingRevalidator;
    use crate::store::ContentStore;

    async fn office() -> Backoffice {
        Backoffice::new(
            ContentStore::seeded_memory().await.unwrap(),
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
    async fn services_list_in_manual_order() {
        let office = office().await;
        let services = office.list_services().await.unwrap().data;
        let orders: Vec<i64> = services.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn non_admin_callers_are_refused() {
        let office = office().await;
        let viewer = AdminIdentity::viewer("uid-9", "guest@example.com");

        let err = office
            .create_faq(
                &viewer,
                FaqInput {
                    question: "Q".to_string(),
                    answer: "A".to_string(),
                    order: 9,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, ActionError::Unauthorized);
    }

    #[tokio::test]
    async fn testimonial_rating_patches_are_clamped() {
        let office = office().await;
        let updated = office
            .update_testimonial(
                &admin(),
                "testimonial-1",
                crate::store::Patch::new().set("rating", 11),
            )
            .await
            .unwrap();
        assert_eq!(updated.data.rating, 5);
    }

    #[tokio::test]
    async fn timeline_requires_a_year() {
        let office = office().await;
        let err = office
            .create_timeline_entry(
                &admin(),
                TimelineEntryInput {
                    title: "Second office".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Year is required");
    }

    #[tokio::test]
    async fn deleting_a_missing_row_names_the_entity() {
        let office = office().await;
        let err = office.delete_service(&admin(), "ghost").await.unwrap_err();
        assert_eq!(err.message(), "Service not found");
    }
}
