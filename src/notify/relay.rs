//! HTTP mail relay delivery

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::notify::{EmailMessage, Mailer};
use crate::types::{BackstageError, Result};

/// Delivers mail through an HTTP relay endpoint.
///
/// The relay accepts a JSON message envelope authorized by a bearer key.
pub struct RelayMailer {
    client: Client,
    url: String,
    key: String,
}

impl RelayMailer {
    pub fn new(url: &str, key: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
            key: key.to_string(),
        }
    }

    /// Build from `MAIL_RELAY_URL` and `MAIL_RELAY_KEY`
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("MAIL_RELAY_URL")
            .map_err(|_| BackstageError::Config("MAIL_RELAY_URL is not set".to_string()))?;
        let key = std::env::var("MAIL_RELAY_KEY")
            .map_err(|_| BackstageError::Config("MAIL_RELAY_KEY is not set".to_string()))?;
        Ok(Self::new(&url, &key))
    }
}

#[async_trait]
impl Mailer for RelayMailer {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.key)
            .json(message)
            .send()
            .await
            .map_err(|e| BackstageError::Notify(format!("Mail relay unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(BackstageError::Notify(format!(
                "Mail relay rejected message: {}",
                response.status()
            )));
        }

        info!("Sent '{}' to {}", message.subject, message.to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_both_variables() {
        // Serialized via a single test to avoid env races with siblings
        std::env::remove_var("MAIL_RELAY_URL");
        std::env::remove_var("MAIL_RELAY_KEY");
        assert!(RelayMailer::from_env().is_err());

        std::env::set_var("MAIL_RELAY_URL", "https://relay.example.com/send");
        assert!(RelayMailer::from_env().is_err());

        std::env::set_var("MAIL_RELAY_KEY", "relay-key");
        assert!(RelayMailer::from_env().is_ok());

        std::env::remove_var("MAIL_RELAY_URL");
        std::env::remove_var("MAIL_RELAY_KEY");
    }
}
