//! Back-office actions
//!
//! Every content mutation goes through one of these actions: gate the
//! caller, validate the input, persist, then fire side effects. A failed
//! write fails the action; a failed side effect after a committed write
//! only degrades it to a success with warnings.
//!
//! Public-site submissions (careers form, newsletter signup) and reads of
//! rendered content skip the gate; everything else requires an admin
//! identity.

mod applications;
mod awards;
mod envelope;
mod forms;
mod media;
mod posts;
mod projects;
mod settings;
mod site;
mod social;
mod subscribers;

pub use envelope::{ActionError, ActionResult, Completed, EffectReport, Envelope, SideEffect};
pub use forms::parse_form;

use std::sync::Arc;

use tracing::{error, warn};

use crate::auth::AdminIdentity;
use crate::content::Record;
use crate::media::ObjectStorage;
use crate::notify::{EmailMessage, Mailer};
use crate::revalidate::Revalidator;
use crate::store::{ContentStore, Patch, Query};
use crate::types::BackstageError;

/// Addresses the studio sends from and receives at
#[derive(Debug, Clone)]
pub struct Mailboxes {
    /// From address on outbound notifications
    pub sender: String,
    /// Inbox that receives admin notifications
    pub admin_inbox: String,
}

impl Default for Mailboxes {
    fn default() -> Self {
        Self {
            sender: "noreply@studiomeridian.example".to_string(),
            admin_inbox: "hello@studiomeridian.example".to_string(),
        }
    }
}

/// The action layer. Owns the store and the side-effect collaborators,
/// all injected at startup; the entity operations live in the sibling
/// modules as further `impl` blocks.
#[derive(Clone)]
pub struct Backoffice {
    store: ContentStore,
    mailer: Arc<dyn Mailer>,
    revalidator: Arc<dyn Revalidator>,
    storage: Arc<dyn ObjectStorage>,
    mailboxes: Mailboxes,
}

impl Backoffice {
    pub fn new(
        store: ContentStore,
        mailer: Arc<dyn Mailer>,
        revalidator: Arc<dyn Revalidator>,
        storage: Arc<dyn ObjectStorage>,
        mailboxes: Mailboxes,
    ) -> Self {
        Self {
            store,
            mailer,
            revalidator,
            storage,
            mailboxes,
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Refuse callers that are not administrators
    fn gate(&self, identity: &AdminIdentity) -> Result<(), ActionError> {
        if !identity.is_admin {
            warn!("Refused admin action for {}", identity.email);
            return Err(ActionError::Unauthorized);
        }
        Ok(())
    }

    /// Send one notification, reporting the outcome without failing the action
    async fn send_mail(&self, message: EmailMessage) -> EffectReport {
        let target = message.to.clone();
        match self.mailer.send(&message).await {
            Ok(()) => EffectReport::ok(SideEffect::Notification, target),
            Err(e) => {
                warn!("Notification to {} failed: {}", target, e);
                EffectReport::failed(SideEffect::Notification, target, e)
            }
        }
    }

    /// Refresh a set of rendered pages, one report per path
    async fn refresh<I>(&self, paths: I) -> Vec<EffectReport>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut reports = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let report = match self.revalidator.revalidate(path).await {
                Ok(()) => EffectReport::ok(SideEffect::Revalidation, path),
                Err(e) => {
                    warn!("Revalidation of {} failed: {}", path, e);
                    EffectReport::failed(SideEffect::Revalidation, path, e)
                }
            };
            reports.push(report);
        }
        reports
    }

    /// Map a store failure onto the action taxonomy
    fn store_failure<T: Record>(err: BackstageError, verb: &'static str) -> ActionError {
        match err {
            BackstageError::NotFound(entity) => ActionError::NotFound(entity),
            other => {
                error!("Failed to {} {}: {}", verb, T::ENTITY.to_lowercase(), other);
                ActionError::Store {
                    verb,
                    entity: T::ENTITY,
                }
            }
        }
    }

    async fn create_record<T: Record>(&self, record: T) -> Result<T, ActionError> {
        self.store
            .create(record)
            .await
            .map_err(|e| Self::store_failure::<T>(e, "create"))
    }

    async fn patch_record<T: Record>(&self, id: &str, patch: Patch) -> Result<T, ActionError> {
        self.store
            .update(id, patch)
            .await
            .map_err(|e| Self::store_failure::<T>(e, "update"))
    }

    async fn remove_record<T: Record>(&self, id: &str) -> Result<(), ActionError> {
        self.store
            .delete::<T>(id)
            .await
            .map_err(|e| Self::store_failure::<T>(e, "delete"))
    }

    async fn fetch_all<T: Record>(&self, query: Query) -> Result<Vec<T>, ActionError> {
        self.store
            .list(query)
            .await
            .map_err(|e| Self::store_failure::<T>(e, "list"))
    }

    async fn fetch_one<T: Record>(&self, id: &str) -> Result<T, ActionError> {
        match self.store.get::<T>(id).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(ActionError::NotFound(T::ENTITY.to_string())),
            Err(e) => Err(Self::store_failure::<T>(e, "fetch")),
        }
    }
}
