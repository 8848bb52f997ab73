//! Outbound email
//!
//! Notifications ride an HTTP mail relay rather than raw SMTP. Delivery
//! sits behind the [`Mailer`] trait so the action layer never sees
//! transport details; [`RecordingMailer`] captures messages for tests and
//! for dev runs with no relay configured.

mod relay;

pub use relay::RelayMailer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

use crate::types::{BackstageError, Result};

/// A file attached to an outbound message, carried base64-encoded
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub data_base64: String,
}

impl Attachment {
    pub fn from_bytes(file_name: &str, content_type: &str, data: &[u8]) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            data_base64: BASE64.encode(data),
        }
    }
}

/// One outbound email in the shape the relay accepts
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl EmailMessage {
    pub fn new(from: &str, to: &str, subject: &str, text: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            reply_to: None,
            subject: subject.to_string(),
            text: text.to_string(),
            html: None,
            attachments: Vec::new(),
        }
    }

    pub fn reply_to(mut self, address: &str) -> Self {
        self.reply_to = Some(address.to_string());
        self
    }

    pub fn html(mut self, body: &str) -> Self {
        self.html = Some(body.to_string());
        self
    }

    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// Sends email. Implementations report failure without retrying; the
/// caller decides what a failed notification means for its result.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<()>;
}

/// Captures messages instead of delivering them
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
    fail: AtomicBool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message handed to `send` so far
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.lock().clone()
    }

    /// Make subsequent sends fail, for exercising degraded paths
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::Relaxed);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<EmailMessage>> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(BackstageError::Notify(
                "Recording mailer set to fail".to_string(),
            ));
        }
        self.lock().push(message.clone());
        Ok(())
    }
}
