//! Job application schema
//!
//! The one entity with real lifecycle transitions: applications arrive
//! `pending` from the public careers form, an admin moves them to
//! `accepted` (which emails the applicant) or `rejected`, and either state
//! may be deleted. There is no path back to `pending`.

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};

/// Collection name for job applications
pub const APPLICATION_COLLECTION: &str = "applications";

/// Application review state
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Awaiting review
    #[default]
    Pending,
    /// Accepted; the applicant has been emailed
    Accepted,
    /// Rejected
    Rejected,
}

/// Job application document
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JobApplication {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    pub name: String,

    pub email: String,

    pub phone: String,

    /// Position applied for
    pub position: String,

    /// Public URL of the uploaded resume, when one was attached
    #[serde(default)]
    pub resume_url: String,

    #[serde(default)]
    pub cover_letter: String,

    #[serde(default)]
    pub status: ApplicationStatus,
}

/// Fields accepted from the public careers form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobApplicationInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub cover_letter: String,
}

impl JobApplication {
    /// Build a new application; review always starts at `Pending`.
    pub fn new(input: JobApplicationInput) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            position: input.position,
            resume_url: input.resume_url,
            cover_letter: input.cover_letter,
            status: ApplicationStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }
}

impl Record for JobApplication {
    const COLLECTION: &'static str = APPLICATION_COLLECTION;
    const ENTITY: &'static str = "Application";

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
    fn new_applications_are_pending() {
        let app = JobApplication::new(JobApplicationInput {
            name: "Jordan Reyes".to_string(),
            email: "jordan.reyes@example.com".to_string(),
            phone: "+1 555 0134".to_string(),
            position: "Senior Designer".to_string(),
            ..Default::default()
        });
        assert!(app.is_pending());
        assert!(app.resume_url.is_empty());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_value(ApplicationStatus::Accepted).unwrap();
        assert_eq!(json, serde_json::json!("accepted"));
    }
}
