//! Store adapter integration tests
//!
//! Exercises the generic store surface end to end against the memory
//! backend: identifier and timestamp assignment, listing order, filters,
//! limits, patch semantics, and batch updates across entity types.

use backstage::content::{
    Award, AwardInput, BlogPost, Project, Service, SiteSettings, SETTINGS_DOC_ID,
};
use backstage::store::{fixtures, ContentStore, Filter, Patch, Query, Sort};

fn award(title: &str) -> Award {
    Award::new(AwardInput {
        title: title.to_string(),
        organization: "Awwwards".to_string(),
        date: "2024-06-01".to_string(),
        ..Default::default()
    })
}

// =============================================================================
// Seeding
// =============================================================================

#[tokio::test]
async fn seeded_store_reports_every_collection() {
    let store = ContentStore::seeded_memory().await.unwrap();
    let counts = fixtures::collection_counts(&store).await.unwrap();

    assert_eq!(counts.len(), 14);
    for (collection, count) in &counts {
        assert!(*count > 0, "{} should be seeded", collection);
    }

    assert!(counts.contains(&("posts", 3)));
    assert!(counts.contains(&("services", 4)));
    assert!(counts.contains(&("settings", 1)));
}

#[tokio::test]
async fn reseeding_never_duplicates_content() {
    let store = ContentStore::seeded_memory().await.unwrap();
    let report = fixtures::seed(&store).await.unwrap();

    for entry in report {
        assert_eq!(entry.seeded, 0, "{} was reseeded", entry.collection);
    }
    assert_eq!(store.count::<BlogPost>(None).await.unwrap(), 3);
}

// =============================================================================
// Create / get / update / delete
// =============================================================================

#[tokio::test]
async fn create_assigns_identifier_and_timestamps() {
    let store = ContentStore::memory();

    let stored = store.create(award("Site of the Month")).await.unwrap();
    assert!(!stored.id.is_empty());
    assert!(!stored.metadata.created_at.is_empty());
    assert_eq!(stored.metadata.created_at, stored.metadata.updated_at);

    let fetched: Award = store.get(&stored.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Site of the Month");
}

#[tokio::test]
async fn update_patches_named_fields_and_bumps_updated_at() {
    let store = ContentStore::seeded_memory().await.unwrap();

    let before: Award = store.get("award-1").await.unwrap().unwrap();
    let updated: Award = store
        .update("award-1", Patch::new().set("featured", false))
        .await
        .unwrap();

    assert!(!updated.featured);
    assert_eq!(updated.title, before.title);
    assert_eq!(updated.metadata.created_at, before.metadata.created_at);
    assert!(updated.metadata.updated_at > before.metadata.updated_at);
}

#[tokio::test]
async fn delete_removes_the_record_for_good() {
    let store = ContentStore::seeded_memory().await.unwrap();

    store.delete::<Award>("award-2").await.unwrap();
    assert!(store.get::<Award>("award-2").await.unwrap().is_none());

    let err = store.delete::<Award>("award-2").await.unwrap_err();
    assert_eq!(err.to_string(), "Award not found");
}

#[tokio::test]
async fn missing_identifiers_surface_the_entity_label() {
    let store = ContentStore::memory();

    let err = store
        .update::<BlogPost>("no-such-post", Patch::new().set("title", "x"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Post not found");
}

// =============================================================================
// Listing order, filters, limits
// =============================================================================

#[tokio::test]
async fn listing_defaults_to_newest_first() {
    let store = ContentStore::seeded_memory().await.unwrap();

    let posts: Vec<BlogPost> = store.list(Query::all()).await.unwrap();
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["post-3", "post-2", "post-1"]);
}

#[tokio::test]
async fn repeated_listings_keep_their_order() {
    let store = ContentStore::seeded_memory().await.unwrap();

    let first: Vec<Project> = store.list(Query::all()).await.unwrap();
    let second: Vec<Project> = store.list(Query::all()).await.unwrap();

    let first_ids: Vec<&str> = first.iter().map(|p| p.id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn manually_ordered_collections_list_ascending() {
    let store = ContentStore::seeded_memory().await.unwrap();

    let services: Vec<Service> = store.list(Query::all()).await.unwrap();
    let orders: Vec<i64> = services.iter().map(|s| s.order).collect();
    assert_eq!(orders, [1, 2, 3, 4]);
}

#[tokio::test]
async fn explicit_sort_overrides_the_collection_default() {
    let store = ContentStore::seeded_memory().await.unwrap();

    let projects: Vec<Project> = store
        .list(Query::all().sorted(Sort::asc("title")))
        .await
        .unwrap();
    let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["project-3", "project-1", "project-2"]);
}

#[tokio::test]
async fn filters_and_limits_narrow_listings() {
    let store = ContentStore::seeded_memory().await.unwrap();

    let branding: Vec<Project> = store
        .list(Query::all().with_filter(Filter::eq("category", "branding")))
        .await
        .unwrap();
    assert_eq!(branding.len(), 1);
    assert_eq!(branding[0].id, "project-2");

    let latest: Vec<BlogPost> = store.list(Query::all().with_limit(2)).await.unwrap();
    let ids: Vec<&str> = latest.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["post-3", "post-2"]);
}

#[tokio::test]
async fn count_respects_filters() {
    let store = ContentStore::seeded_memory().await.unwrap();

    assert_eq!(store.count::<BlogPost>(None).await.unwrap(), 3);
    assert_eq!(
        store
            .count::<BlogPost>(Some(Filter::eq("published", true)))
            .await
            .unwrap(),
        2
    );
}

// =============================================================================
// Batch updates
// =============================================================================

#[tokio::test]
async fn batch_update_rewrites_only_matching_rows() {
    let store = ContentStore::seeded_memory().await.unwrap();

    let changed = store
        .batch_update::<Project>(
            Filter::eq("featured", true),
            Patch::new().set("featured", false),
        )
        .await
        .unwrap();
    assert_eq!(changed, 2);

    assert_eq!(
        store
            .count::<Project>(Some(Filter::eq("featured", true)))
            .await
            .unwrap(),
        0
    );
    assert_eq!(store.count::<Project>(None).await.unwrap(), 3);
}

#[tokio::test]
async fn batch_update_with_no_matches_reports_zero() {
    let store = ContentStore::seeded_memory().await.unwrap();

    let changed = store
        .batch_update::<Project>(
            Filter::eq("category", "no-such-category"),
            Patch::new().set("featured", true),
        )
        .await
        .unwrap();
    assert_eq!(changed, 0);
}

// =============================================================================
// Settings
// =============================================================================

#[tokio::test]
async fn settings_keep_their_fixed_identifier() {
    let store = ContentStore::seeded_memory().await.unwrap();

    let settings: SiteSettings = store.get(SETTINGS_DOC_ID).await.unwrap().unwrap();
    assert_eq!(settings.id, SETTINGS_DOC_ID);
}
