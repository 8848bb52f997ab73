//! Entity schemas for the content store
//!
//! One file per content type. Schemas are pure descriptions: shape,
//! defaults, and collection names. The validation rules the action layer
//! applies live in [`validate`].

mod application;
mod award;
mod faq;
mod media;
mod post;
mod project;
pub mod record;
mod service;
mod settings;
mod skill;
mod social;
mod subscriber;
mod team;
mod testimonial;
mod timeline;
pub mod validate;

pub use application::{
    ApplicationStatus, JobApplication, JobApplicationInput, APPLICATION_COLLECTION,
};
pub use award::{Award, AwardInput, AWARD_COLLECTION};
pub use faq::{Faq, FaqInput, FAQ_COLLECTION};
pub use media::{MediaAsset, MEDIA_COLLECTION};
pub use post::{BlogPost, BlogPostInput, POST_COLLECTION};
pub use project::{Project, ProjectInput, PROJECT_COLLECTION};
pub use record::{now_iso, Metadata, Record};
pub use service::{Service, ServiceInput, SERVICE_COLLECTION};
pub use settings::{SiteSettings, SiteSettingsInput, SETTINGS_COLLECTION, SETTINGS_DOC_ID};
pub use skill::{SkillCategory, SkillCategoryInput, SkillItem, SKILL_COLLECTION};
pub use social::{SocialPost, SocialPostInput, SocialStatus, SOCIAL_COLLECTION};
pub use subscriber::{Subscriber, SUBSCRIBER_COLLECTION};
pub use team::{TeamMember, TeamMemberInput, TEAM_COLLECTION};
pub use testimonial::{Testimonial, TestimonialInput, TESTIMONIAL_COLLECTION};
pub use timeline::{TimelineEntry, TimelineEntryInput, TIMELINE_COLLECTION};

/// Split a comma-separated form field into trimmed, non-empty values.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(split_list("a, b ,,c "), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }
}
