//! Newsletter subscriber actions

use tracing::info;

use crate::auth::AdminIdentity;
use crate::content::{validate, Subscriber};
use crate::store::{Filter, Query};

use super::{ActionError, ActionResult, Backoffice, Completed};

impl Backoffice {
    /// Add a subscriber from the public newsletter form. No session needed;
    /// addresses are normalized and deduplicated.
    pub async fn subscribe(&self, email: &str) -> ActionResult<Subscriber> {
        validate::required("Email", email)?;
        validate::email(email)?;

        let email = email.trim().to_lowercase();
        let existing = self
            .store
            .count::<Subscriber>(Some(Filter::eq("email", email.as_str())))
            .await
            .map_err(|e| Self::store_failure::<Subscriber>(e, "create"))?;
        if existing > 0 {
            return Err(ActionError::Validation(
                "Email is already subscribed".to_string(),
            ));
        }

        let subscriber = self.create_record(Subscriber::new(email)).await?;
        info!("New subscriber {}", subscriber.email);
        Ok(Completed::new(subscriber))
    }

    /// List subscribers, newest first (admin)
    pub async fn list_subscribers(
        &self,
        identity: &AdminIdentity,
    ) -> ActionResult<Vec<Subscriber>> {
        self.gate(identity)?;
        Ok(Completed::new(self.fetch_all(Query::all()).await?))
    }

    /// Remove a subscriber (admin)
    pub async fn unsubscribe(&self, identity: &AdminIdentity, id: &str) -> ActionResult<()> {
        self.gate(identity)?;
        self.remove_record::<Subscriber>(id).await?;
        info!("Removed subscriber {} by admin {}", id, identity.email);
        Ok(Completed::new(()))
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
    async fn subscribe_normalizes_the_address() {
        let office = office().await;
        let subscriber = office.subscribe("  New.Reader@Example.COM ").await.unwrap();
        assert_eq!(subscriber.data.email, "new.reader@example.com");
    }

    #[tokio::test]
    async fn duplicate_subscriptions_are_refused() {
        let office = office().await;

        let err = office.subscribe("elena.brandt@example.com").await.unwrap_err();
        assert_eq!(err.message(), "Email is already subscribed");

        // normalization catches case variants too
        let err = office.subscribe("Elena.Brandt@example.com").await.unwrap_err();
        assert_eq!(err.message(), "Email is already subscribed");
    }

    #[tokio::test]
    async fn malformed_addresses_never_reach_the_store() {
        let office = office().await;
        let before = office.store().count::<Subscriber>(None).await.unwrap();

        assert!(office.subscribe("not-an-email").await.is_err());
        assert!(office.subscribe("").await.is_err());
        assert_eq!(office.store().count::<Subscriber>(None).await.unwrap(), before);
    }

    #[tokio::test]
    async fn unsubscribe_removes_the_row() {
        let office = office().await;
        office.unsubscribe(&admin(), "sub-1").await.unwrap();

        let listed = office.list_subscribers(&admin()).await.unwrap().data;
        assert!(listed.iter().all(|s| s.id != "sub-1"));
    }
}
