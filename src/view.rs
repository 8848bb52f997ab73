//! Admin view-layer helpers
//!
//! State machinery shared by the admin screens: folding action envelopes
//! into edit-form state, a double-submit guard, and a registry of
//! short-lived preview URLs for files picked but not yet uploaded.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use crate::actions::Envelope;

/// Which record an edit form is bound to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditTarget {
    /// Creating a fresh record
    #[default]
    New,
    /// Editing the record with this identifier
    Existing(String),
}

/// Outcome state for one edit surface.
///
/// Applying a successful envelope clears the binding so the caller resets
/// the draft and refetches the listing. Applying a failure keeps the
/// binding (and so the draft) and surfaces the error inline; nothing the
/// admin typed is lost to a validation round-trip.
#[derive(Debug, Clone, Default)]
pub struct FormBinding {
    pub target: EditTarget,
    pub error: Option<String>,
    pub warnings: Vec<String>,
}

impl FormBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(id: impl Into<String>) -> Self {
        Self {
            target: EditTarget::Existing(id.into()),
            error: None,
            warnings: Vec::new(),
        }
    }

    /// Fold an action envelope into the form state. Returns `true` when
    /// the caller should clear the draft and refetch.
    pub fn apply<T>(&mut self, envelope: &Envelope<T>) -> bool {
        self.warnings = envelope.warnings.clone();
        if envelope.success {
            self.error = None;
            self.target = EditTarget::New;
            true
        } else {
            self.error = envelope.error.clone();
            false
        }
    }
}

/// Double-submit guard. `begin` refuses while an earlier submission is
/// still in flight; the returned token releases on drop, so error paths
/// release it too.
#[derive(Clone, Default)]
pub struct PendingGuard {
    busy: Arc<AtomicBool>,
}

impl PendingGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Option<Pending> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            Some(Pending {
                busy: self.busy.clone(),
            })
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Token for one in-flight submission
pub struct Pending {
    busy: Arc<AtomicBool>,
}

impl Drop for Pending {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Registry of short-lived preview URLs.
///
/// A handle keeps its URL live; dropping the handle releases it, so a
/// preview can never outlive the form that minted it.
#[derive(Clone, Default)]
pub struct PreviewUrls {
    live: Arc<Mutex<HashSet<String>>>,
}

impl PreviewUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh preview URL tied to the returned handle
    pub fn mint(&self) -> PreviewHandle {
        let url = format!("preview://{}", Uuid::new_v4());
        self.lock().insert(url.clone());
        PreviewHandle {
            url,
            registry: self.live.clone(),
        }
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.lock().contains(url)
    }

    pub fn live_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.live.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// One live preview URL
pub struct PreviewHandle {
    url: String,
    registry: Arc<Mutex<HashSet<String>>>,
}

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        let mut live = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        live.remove(&self.url);
    }
}
