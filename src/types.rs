//! Error types for backstage

use thiserror::Error;

/// Errors raised by the content store and its collaborators.
///
/// The action layer catches every variant and folds it into the result
/// envelope; none of these cross the view boundary as a panic.
#[derive(Error, Debug)]
pub enum BackstageError {
    /// Input failed a validation rule before any store access
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation referenced an identifier absent from the store
    #[error("{0} not found")]
    NotFound(String),

    /// The underlying persistence call failed (connectivity, provider error)
    #[error("Store error: {0}")]
    Store(String),

    /// A side-effect delivery failed (mail relay, revalidation webhook).
    /// Messages are self-describing; effect reports quote them verbatim.
    #[error("{0}")]
    Notify(String),

    /// Session token could not be verified
    #[error("Auth error: {0}")]
    Auth(String),

    /// A collaborator refused to operate for lack of configuration
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type
pub type Result<T> = std::result::Result<T, BackstageError>;
