//! Configuration from CLI arguments and environment variables

use clap::{Parser, ValueEnum};

use crate::actions::Mailboxes;

/// Which store backend a process runs against. An explicit choice, made
/// once at startup; nothing selects a backend implicitly.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Fixture-seeded in-memory collections (non-durable)
    Memory,
    /// MongoDB document collections
    Mongo,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "backstage",
    about = "Content store and admin back-office actions for the studio site"
)]
pub struct Args {
    /// Store backend to run against
    #[arg(long, env = "STORE_BACKEND", value_enum, default_value = "memory")]
    pub store_backend: StoreBackend,

    /// MongoDB connection URI
    #[arg(long, env = "MONGODB_URI", default_value = "mongodb://localhost:27017")]
    pub mongodb_uri: String,

    /// MongoDB database name
    #[arg(long, env = "MONGODB_DATABASE", default_value = "backstage")]
    pub mongodb_database: String,

    /// Secret for signing admin session tokens
    #[arg(long, env = "JWT_SECRET")]
    pub jwt_secret: Option<String>,

    /// Development mode (insecure session fallback, memory degradation)
    #[arg(long, env = "DEV_MODE", default_value = "false")]
    pub dev_mode: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Origin of the rendered site, for page revalidation
    #[arg(long, env = "SITE_ORIGIN", default_value = "http://localhost:3000")]
    pub site_origin: String,

    /// Shared secret for the revalidation webhook
    #[arg(long, env = "REVALIDATE_SECRET", default_value = "")]
    pub revalidate_secret: String,

    /// From address on outbound notifications
    #[arg(long, env = "MAIL_FROM", default_value = "noreply@studiomeridian.example")]
    pub mail_from: String,

    /// Inbox that receives admin notifications
    #[arg(long, env = "ADMIN_INBOX", default_value = "hello@studiomeridian.example")]
    pub admin_inbox: String,

    /// Seed fixture content on startup (the memory backend always seeds)
    #[arg(long, default_value = "false")]
    pub seed: bool,
}

impl Args {
    /// Session signing secret, with an insecure fallback for dev mode only
    pub fn jwt_secret(&self) -> String {
        self.jwt_secret
            .clone()
            .unwrap_or_else(|| "dev-only-insecure-secret".to_string())
    }

    pub fn mailboxes(&self) -> Mailboxes {
        Mailboxes {
            sender: self.mail_from.clone(),
            admin_inbox: self.admin_inbox.clone(),
        }
    }

    /// Reject configurations that must not reach production
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.is_none() && !self.dev_mode {
            return Err(
                "JWT_SECRET must be set when not in dev mode (set DEV_MODE=true for local development)"
                    .to_string(),
            );
        }
        if self.store_backend == StoreBackend::Mongo && self.mongodb_uri.trim().is_empty() {
            return Err("MONGODB_URI must be set for the mongo backend".to_string());
        }
        Ok(())
    }
}
