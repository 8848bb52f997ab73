//! Action outcomes and the result envelope
//!
//! Success tracks the persisted write alone. Side effects that fail after
//! a committed write degrade the result to a success with warnings; they
//! never flip it to a failure, because the content change is already live.

use std::fmt;

use serde::Serialize;

/// Why an action refused or failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Input rejected before any store access
    Validation(String),
    /// The named entity does not exist
    NotFound(String),
    /// Persistence failed mid-action
    Store {
        verb: &'static str,
        entity: &'static str,
    },
    /// Caller is not an administrator
    Unauthorized,
}

impl ActionError {
    /// User-facing message for the envelope
    pub fn message(&self) -> String {
        match self {
            ActionError::Validation(message) => message.clone(),
            ActionError::NotFound(entity) => format!("{} not found", entity),
            ActionError::Store { verb, entity } => {
                format!("Failed to {} {}", verb, entity.to_lowercase())
            }
            ActionError::Unauthorized => "Admin access required".to_string(),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ActionError {}

// Lets validation rules (`Result<(), String>`) flow through `?`
impl From<String> for ActionError {
    fn from(message: String) -> Self {
        ActionError::Validation(message)
    }
}

/// The two kinds of follow-up work an action fires after its write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    Notification,
    Revalidation,
}

/// Outcome of one side effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectReport {
    pub effect: SideEffect,
    /// Email address or page path the effect aimed at
    pub target: String,
    pub error: Option<String>,
}

impl EffectReport {
    pub fn ok(effect: SideEffect, target: impl Into<String>) -> Self {
        Self {
            effect,
            target: target.into(),
            error: None,
        }
    }

    pub fn failed(effect: SideEffect, target: impl Into<String>, error: impl ToString) -> Self {
        Self {
            effect,
            target: target.into(),
            error: Some(error.to_string()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// Warning line for the envelope, `None` when the effect landed
    pub fn warning(&self) -> Option<String> {
        let error = self.error.as_ref()?;
        Some(match self.effect {
            SideEffect::Notification => {
                format!("Notification to {} failed: {}", self.target, error)
            }
            SideEffect::Revalidation => {
                format!("Revalidation of {} failed: {}", self.target, error)
            }
        })
    }
}

/// A committed action: the written data plus its side-effect outcomes
#[derive(Debug, Clone)]
pub struct Completed<T> {
    pub data: T,
    pub effects: Vec<EffectReport>,
}

impl<T> Completed<T> {
    /// A committed write with no side effects to report
    pub fn new(data: T) -> Self {
        Self {
            data,
            effects: Vec::new(),
        }
    }

    pub fn with_effects(data: T, effects: Vec<EffectReport>) -> Self {
        Self { data, effects }
    }

    pub fn warnings(&self) -> Vec<String> {
        self.effects.iter().filter_map(EffectReport::warning).collect()
    }
}

/// What every action returns
pub type ActionResult<T> = Result<Completed<T>, ActionError>;

/// Serialized action outcome handed to the caller
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl<T> Envelope<T> {
    /// Succeeded with every side effect delivered
    pub fn is_clean(&self) -> bool {
        self.success && self.warnings.is_empty()
    }
}

impl<T> From<ActionResult<T>> for Envelope<T> {
    fn from(result: ActionResult<T>) -> Self {
        match result {
            Ok(completed) => {
                let warnings = completed.warnings();
                Envelope {
                    success: true,
                    data: Some(completed.data),
                    error: None,
                    warnings,
                }
            }
            Err(err) => Envelope {
                success: false,
                data: None,
                error: Some(err.message()),
                warnings: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_follow_the_taxonomy() {
        assert_eq!(
            ActionError::Validation("Title is required".to_string()).message(),
            "Title is required"
        );
        assert_eq!(ActionError::NotFound("Post".to_string()).message(), "Post not found");
        assert_eq!(
            ActionError::Store { verb: "update", entity: "Social post" }.message(),
            "Failed to update social post"
        );
        assert_eq!(ActionError::Unauthorized.message(), "Admin access required");
    }

    #[test]
    fn validation_strings_convert_through_question_mark() {
        fn check() -> Result<(), ActionError> {
            crate::content::validate::required("Title", "")?;
            Ok(())
        }
        assert_eq!(
            check().unwrap_err(),
            ActionError::Validation("Title is required".to_string())
        );
    }

    #[test]
    fn failed_effects_become_warnings_not_failures() {
        let completed = Completed::with_effects(
            "data",
            vec![
                EffectReport::ok(SideEffect::Revalidation, "/"),
                EffectReport::failed(SideEffect::Notification, "hello@studiomeridian.example", "Mail relay unreachable: timeout"),
            ],
        );
        let envelope = Envelope::from(Ok(completed));

        assert!(envelope.success);
        assert!(!envelope.is_clean());
        assert_eq!(
            envelope.warnings,
            vec!["Notification to hello@studiomeridian.example failed: Mail relay unreachable: timeout"]
        );
    }

    #[test]
    fn errors_fill_only_the_error_field() {
        let envelope = Envelope::<()>::from(Err(ActionError::Unauthorized));
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("Admin access required"));
        assert!(envelope.data.is_none());
        assert!(envelope.warnings.is_empty());
    }

    #[test]
    fn clean_success_serializes_minimally() {
        let envelope = Envelope::from(Ok(Completed::new(serde_json::json!({ "id": "post-1" }))));
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], serde_json::json!(true));
        assert!(json.get("error").is_none());
        assert!(json.get("warnings").is_none());
    }
}
