//! Job application actions
//!
//! Submission is the one public write: the careers form posts straight in
//! and the studio inbox gets a notification. Review is a single pending ->
//! accepted/rejected transition; acceptance emails the applicant,
//! rejection stays quiet.

use tracing::info;

use crate::auth::AdminIdentity;
use crate::content::{validate, JobApplication, JobApplicationInput};
use crate::notify::EmailMessage;
use crate::store::{Patch, Query};

use super::{ActionError, ActionResult, Backoffice, Completed};

impl Backoffice {
    /// Accept a submission from the public careers form. No session needed.
    pub async fn submit_application(
        &self,
        input: JobApplicationInput,
    ) -> ActionResult<JobApplication> {
        validate::required("Name", &input.name)?;
        validate::required("Email", &input.email)?;
        validate::email(&input.email)?;
        validate::required("Phone", &input.phone)?;
        validate::required("Position", &input.position)?;

        let application = self.create_record(JobApplication::new(input)).await?;
        info!(
            "Received application from {} for {}",
            application.email, application.position
        );

        let message = EmailMessage::new(
            &self.mailboxes.sender,
            &self.mailboxes.admin_inbox,
            &format!("New application: {}", application.position),
            &format!(
                "{} applied for {}.\n\nEmail: {}\nPhone: {}\n\n{}",
                application.name,
                application.position,
                application.email,
                application.phone,
                application.cover_letter
            ),
        )
        .reply_to(&application.email);
        let effects = vec![self.send_mail(message).await];

        Ok(Completed::with_effects(application, effects))
    }

    /// List applications, newest first (admin)
    pub async fn list_applications(
        &self,
        identity: &AdminIdentity,
    ) -> ActionResult<Vec<JobApplication>> {
        self.gate(identity)?;
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    /// Fetch one application (admin)
    pub async fn get_application(
        &self,
        identity: &AdminIdentity,
        id: &str,
    ) -> ActionResult<JobApplication> {
        self.gate(identity)?;
        Ok(Completed::new(self.fetch_one(id).await?))
    }

    /// Accept a pending application and email the applicant
    pub async fn accept_application(
        &self,
        identity: &AdminIdentity,
        id: &str,
    ) -> ActionResult<JobApplication> {
        self.gate(identity)?;
        let current: JobApplication = self.fetch_one(id).await?;
        if !current.is_pending() {
            return Err(ActionError::Validation(
                "Application has already been reviewed".to_string(),
            ));
        }

        let application: JobApplication = self
            .patch_record(id, Patch::new().set("status", "accepted"))
            .await?;
        info!("Accepted application {} by admin {}", application.id, identity.email);

        let message = EmailMessage::new(
            &self.mailboxes.sender,
            &application.email,
            &format!("Your application for {}", application.position),
            &format!(
                "Hi {},\n\nGood news: we would like to move forward with your \
                 application for {}. We will be in touch shortly to set up a \
                 conversation.\n\nStudio Meridian",
                application.name, application.position
            ),
        );
        let effects = vec![self.send_mail(message).await];

        Ok(Completed::with_effects(application, effects))
    }

    /// Reject a pending application. Recorded without email; rejections go
    /// out on the studio's own schedule.
    pub async fn reject_application(
        &self,
        identity: &AdminIdentity,
        id: &str,
    ) -> ActionResult<JobApplication> {
        self.gate(identity)?;
        let current: JobApplication = self.fetch_one(id).await?;
        if !current.is_pending() {
            return Err(ActionError::Validation(
                "Application has already been reviewed".to_string(),
            ));
        }

        let application: JobApplication = self
            .patch_record(id, Patch::new().set("status", "rejected"))
            .await?;
        info!("Rejected application {} by admin {}", application.id, identity.email);
        Ok(Completed::new(application))
    }

    /// Remove an application record in any state
    pub async fn delete_application(
        &self,
        identity: &AdminIdentity,
        id: &str,
    ) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<JobApplication>(id).await?;
        info!("Deleted application {} by admin {}", id, identity.email);
        Ok(Completed::new(()))
    }
}
