//! Backstage - content store and admin back-office for the studio site
//!
//! Backstage owns every record the studio site renders (posts, projects,
//! services, team, testimonials, social posts, FAQs, awards, timeline,
//! skills, job applications, media, subscribers, settings) and the admin
//! actions that mutate them.
//!
//! ## Layers
//!
//! - **Content**: typed records, constructors, field validation
//! - **Store**: one generic persistence surface over memory and MongoDB
//! - **Actions**: admin-gated mutations with notification and
//!   revalidation side effects, reported through result envelopes
//! - **Auth**: JWT session verification for the admin gate
//! - **Notify / Revalidate / Media**: outbound collaborators (mail relay,
//!   page revalidation webhook, object storage)

pub mod actions;
pub mod auth;
pub mod chain;
pub mod config;
pub mod content;
pub mod media;
pub mod notify;
pub mod revalidate;
pub mod store;
pub mod types;
pub mod view;

pub use actions::Backoffice;
pub use config::Args;
pub use store::ContentStore;
pub use types::{BackstageError, Result};
