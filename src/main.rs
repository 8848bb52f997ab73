//! Backstage - content store and admin back-office for the studio site

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backstage::{
    actions::Backoffice,
    auth::JwtSessions,
    config::{Args, StoreBackend},
    media::{BucketStore, MemoryObjectStore, ObjectStorage},
    notify::{Mailer, RecordingMailer, RelayMailer},
    revalidate::{HttpRevalidator, RecordingRevalidator, Revalidator},
    store::{fixtures, ContentStore, MongoStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("backstage={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // Print startup banner
    info!("======================================");
    info!("  Backstage - Studio Meridian");
    info!("======================================");
    info!("Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_COMMIT_SHORT"));
    info!("Backend: {:?}", args.store_backend);
    info!("Site origin: {}", args.site_origin);
    info!("Mode: {}", if args.dev_mode { "DEVELOPMENT" } else { "PRODUCTION" });
    info!("======================================");

    // Open the content store (mongo falls back to memory in dev mode)
    let store = match args.store_backend {
        StoreBackend::Memory => {
            info!("Using in-memory store");
            ContentStore::memory()
        }
        StoreBackend::Mongo => {
            match MongoStore::connect(&args.mongodb_uri, &args.mongodb_database).await {
                Ok(mongo) => {
                    info!("MongoDB connected successfully");
                    ContentStore::Mongo(mongo)
                }
                Err(e) => {
                    if args.dev_mode {
                        warn!("MongoDB connection failed (dev mode, using memory store): {}", e);
                        ContentStore::memory()
                    } else {
                        error!("MongoDB connection failed: {}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
    };

    // Seed fixture content. The memory backend starts empty every run, so
    // it always seeds; mongo only seeds when asked.
    if args.seed || matches!(store, ContentStore::Memory(_)) {
        let report = fixtures::seed(&store).await?;
        for entry in &report {
            if entry.seeded > 0 {
                info!("Seeded {} into {}", entry.seeded, entry.collection);
            } else {
                info!(
                    "Skipped {} ({} record(s) already present)",
                    entry.collection, entry.existing
                );
            }
        }
    }

    // Outbound mail
    let mailer: Arc<dyn Mailer> = match RelayMailer::from_env() {
        Ok(relay) => {
            info!("Mail relay configured");
            Arc::new(relay)
        }
        Err(e) => {
            warn!("Mail relay not configured, notifications will be dropped: {}", e);
            Arc::new(RecordingMailer::new())
        }
    };

    // Page revalidation webhook
    let revalidator: Arc<dyn Revalidator> = if args.revalidate_secret.is_empty() {
        warn!("REVALIDATE_SECRET not set, page revalidation disabled");
        Arc::new(RecordingRevalidator::new())
    } else {
        Arc::new(HttpRevalidator::new(&args.site_origin, &args.revalidate_secret))
    };

    // Media object storage
    let storage: Arc<dyn ObjectStorage> = match BucketStore::from_env() {
        Ok(bucket) => {
            info!("Media bucket configured");
            Arc::new(bucket)
        }
        Err(e) => {
            warn!("Media bucket not configured, uploads stay in memory: {}", e);
            Arc::new(MemoryObjectStore::new())
        }
    };

    // Admin sessions
    let sessions = JwtSessions::new(&args.jwt_secret());
    if args.dev_mode {
        let token = sessions.issue("dev-admin", "dev@studiomeridian.example", "Dev Admin", true)?;
        info!("Dev admin session token: {}", token);
    }

    let office = Backoffice::new(store, mailer, revalidator, storage, args.mailboxes());

    // Report what the store holds
    info!("Collections:");
    for (collection, count) in fixtures::collection_counts(office.store()).await? {
        info!("  {:<14} {}", collection, count);
    }

    info!("Ready");
    Ok(())
}
