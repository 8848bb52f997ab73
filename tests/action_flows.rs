//! Admin flow integration tests
//!
//! Wires the public crate surface together the way the admin screens do:
//! session tokens verified into identities in front of gated actions,
//! form bodies decoded into typed inputs, result envelopes folded into
//! form state, and side-effect outages degrading to warnings.

use std::sync::Arc;

use backstage::actions::{ActionError, Backoffice, Envelope, Mailboxes};
use backstage::auth::{AdminIdentity, JwtSessions, SessionVerifier};
use backstage::content::{ApplicationStatus, BlogPost, BlogPostInput, JobApplicationInput};
use backstage::media::MemoryObjectStore;
use backstage::notify::RecordingMailer;
use backstage::revalidate::RecordingRevalidator;
use backstage::store::{ContentStore, Patch};
use backstage::view::{EditTarget, FormBinding};

struct Harness {
    office: Backoffice,
    mailer: Arc<RecordingMailer>,
    revalidator: Arc<RecordingRevalidator>,
    sessions: JwtSessions,
}

async fn harness() -> Harness {
    let mailer = Arc::new(RecordingMailer::new());
    let revalidator = Arc::new(RecordingRevalidator::new());
    let office = Backoffice::new(
        ContentStore::seeded_memory().await.unwrap(),
        mailer.clone(),
        revalidator.clone(),
        Arc::new(MemoryObjectStore::new()),
        Mailboxes::default(),
    );
    Harness {
        office,
        mailer,
        revalidator,
        sessions: JwtSessions::new("integration-secret"),
    }
}

// =============================================================================
// Sessions in front of the gate
// =============================================================================

#[tokio::test]
async fn verified_session_drives_a_gated_action() {
    let h = harness().await;
    let token = h
        .sessions
        .issue("uid-1", "dana@studiomeridian.example", "Dana Okafor", true)
        .unwrap();

    let identity = h.sessions.verify(&token).await.unwrap();
    assert!(identity.is_admin);
    assert_eq!(identity.email, "dana@studiomeridian.example");

    let completed = h
        .office
        .update_post(&identity, "post-1", Patch::new().set("title", "Renamed"))
        .await
        .unwrap();
    assert_eq!(completed.data.title, "Renamed");
}

#[tokio::test]
async fn viewer_sessions_cannot_mutate() {
    let h = harness().await;
    let token = h
        .sessions
        .issue("uid-9", "guest@studiomeridian.example", "Guest", false)
        .unwrap();
    let identity = h.sessions.verify(&token).await.unwrap();

    let result = h.office.delete_post(&identity, "post-1").await;
    assert_eq!(result.unwrap_err(), ActionError::Unauthorized);

    let envelope = Envelope::from(h.office.delete_post(&identity, "post-1").await);
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("Admin access required"));

    // Nothing was deleted
    assert!(h
        .office
        .store()
        .get::<BlogPost>("post-1")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn foreign_tokens_verify_as_nobody() {
    let h = harness().await;
    let other = JwtSessions::new("some-other-secret");
    let token = other
        .issue("uid-1", "dana@studiomeridian.example", "Dana Okafor", true)
        .unwrap();

    assert!(h.sessions.verify(&token).await.is_none());
    assert!(h.sessions.verify("not-a-token").await.is_none());
}

// =============================================================================
// Form body to envelope to form state
// =============================================================================

#[tokio::test]
async fn form_body_becomes_a_published_post() {
    let h = harness().await;
    let admin = AdminIdentity::admin("uid-1", "dana@studiomeridian.example", "Dana Okafor");

    let input: BlogPostInput = backstage::actions::parse_form(
        "title=Studio+notes&slug=studio-notes&body=What+we+learned+this+month.&author=Dana+Okafor",
    )
    .unwrap();

    let envelope = Envelope::from(h.office.create_post(&admin, input).await);
    assert!(envelope.success);
    assert!(envelope.is_clean());

    let mut binding = FormBinding::new();
    assert!(binding.apply(&envelope));
    assert_eq!(binding.error, None);

    let listed = h.office.list_posts().await.unwrap().data;
    assert!(listed.iter().any(|p| p.slug == "studio-notes"));
}

#[tokio::test]
async fn validation_failure_keeps_the_draft_bound() {
    let h = harness().await;
    let admin = AdminIdentity::admin("uid-1", "dana@studiomeridian.example", "Dana Okafor");

    let envelope = Envelope::from(
        h.office
            .update_post(&admin, "post-1", Patch::new().set("title", ""))
            .await,
    );
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("Title is required"));

    let mut binding = FormBinding::editing("post-1");
    assert!(!binding.apply(&envelope));
    assert_eq!(binding.target, EditTarget::Existing("post-1".to_string()));
    assert_eq!(binding.error.as_deref(), Some("Title is required"));

    // The rejected patch never reached the store
    let post: BlogPost = h.office.store().get("post-1").await.unwrap().unwrap();
    assert_eq!(post.title, "Designing in the open");
}

#[tokio::test]
async fn malformed_form_bodies_are_refused() {
    let err = backstage::actions::parse_form::<BlogPostInput>("%zz").unwrap_err();
    assert!(err.message().starts_with("Malformed form body"));
}

// =============================================================================
// Side-effect outages
// =============================================================================

#[tokio::test]
async fn revalidation_outage_degrades_to_warnings() {
    let h = harness().await;
    let admin = AdminIdentity::admin("uid-1", "dana@studiomeridian.example", "Dana Okafor");
    h.revalidator.set_failing(true);

    let envelope = Envelope::from(
        h.office
            .update_post(&admin, "post-1", Patch::new().set("title", "Still lands"))
            .await,
    );

    // The write committed; only the refresh is reported as degraded
    assert!(envelope.success);
    assert!(!envelope.is_clean());
    assert_eq!(envelope.warnings.len(), 3);
    for warning in &envelope.warnings {
        assert!(warning.starts_with("Revalidation of "), "{}", warning);
    }

    let post: BlogPost = h.office.store().get("post-1").await.unwrap().unwrap();
    assert_eq!(post.title, "Still lands");

    let mut binding = FormBinding::editing("post-1");
    assert!(binding.apply(&envelope));
    assert_eq!(binding.warnings.len(), 3);
}

// =============================================================================
// Careers flow end to end
// =============================================================================

#[tokio::test]
async fn careers_flow_from_submission_to_acceptance() {
    let h = harness().await;

    // Public submission, no session involved
    let input: JobApplicationInput = backstage::actions::parse_form(
        "name=Sam+Myers&email=sam.myers@example.com&position=Design+Lead&phone=%2B1+555+0168",
    )
    .unwrap();
    let submitted = h.office.submit_application(input).await.unwrap();
    assert_eq!(submitted.data.status, ApplicationStatus::Pending);

    let inbox = h.mailer.sent();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].to, "hello@studiomeridian.example");
    assert_eq!(inbox[0].subject, "New application: Design Lead");
    assert_eq!(inbox[0].reply_to.as_deref(), Some("sam.myers@example.com"));

    // Admin reviews it through a verified session
    let token = h
        .sessions
        .issue("uid-1", "dana@studiomeridian.example", "Dana Okafor", true)
        .unwrap();
    let admin = h.sessions.verify(&token).await.unwrap();

    let accepted = h
        .office
        .accept_application(&admin, &submitted.data.id)
        .await
        .unwrap();
    assert_eq!(accepted.data.status, ApplicationStatus::Accepted);

    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].to, "sam.myers@example.com");
    assert_eq!(sent[1].subject, "Your application for Design Lead");

    // A second review attempt is refused
    let err = h
        .office
        .accept_application(&admin, &submitted.data.id)
        .await
        .unwrap_err();
    assert_eq!(
        err.message(),
        "Application has already been reviewed"
    );
    assert_eq!(h.mailer.sent().len(), 2);
}
