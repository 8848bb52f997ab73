//! Fixture content set
//!
//! Seeds every collection with realistic starter rows so the memory backend
//! boots with a browsable site. Identifiers and timestamps are fixed, which
//! keeps listing order deterministic across runs and in tests.
//!
//! Seeding is idempotent per collection: a collection that already holds
//! rows is left untouched.

use tracing::info;

use crate::content::{
    ApplicationStatus, Award, BlogPost, Faq, JobApplication, MediaAsset, Metadata, Project,
    Record, Service, SiteSettings, SkillCategory, SkillItem, SocialPost, SocialStatus,
    Subscriber, TeamMember, Testimonial, TimelineEntry, SETTINGS_DOC_ID,
};
use crate::store::ContentStore;
use crate::types::Result;

/// What `seed` did to one collection
#[derive(Debug, Clone)]
pub struct SeedEntry {
    pub collection: &'static str,
    pub seeded: u64,
    pub existing: u64,
}

/// Seed all collections, skipping any that already hold rows
pub async fn seed(store: &ContentStore) -> Result<Vec<SeedEntry>> {
    let report = vec![
        seed_collection(store, posts()).await?,
        seed_collection(store, projects()).await?,
        seed_collection(store, services()).await?,
        seed_collection(store, team()).await?,
        seed_collection(store, testimonials()).await?,
        seed_collection(store, social_posts()).await?,
        seed_collection(store, faqs()).await?,
        seed_collection(store, awards()).await?,
        seed_collection(store, timeline()).await?,
        seed_collection(store, skills()).await?,
        seed_collection(store, applications()).await?,
        seed_collection(store, media()).await?,
        seed_collection(store, subscribers()).await?,
        seed_collection(store, settings()).await?,
    ];

    let seeded: u64 = report.iter().map(|entry| entry.seeded).sum();
    info!("Seeded {} fixture rows", seeded);
    Ok(report)
}

async fn seed_collection<T: Record>(store: &ContentStore, rows: Vec<T>) -> Result<SeedEntry> {
    let existing = store.count::<T>(None).await?;
    if existing > 0 {
        return Ok(SeedEntry {
            collection: T::COLLECTION,
            seeded: 0,
            existing,
        });
    }

    let mut seeded = 0;
    for row in rows {
        store.create(row).await?;
        seeded += 1;
    }
    Ok(SeedEntry {
        collection: T::COLLECTION,
        seeded,
        existing: 0,
    })
}

/// Row count per collection, for the startup report
pub async fn collection_counts(store: &ContentStore) -> Result<Vec<(&'static str, u64)>> {
    Ok(vec![
        (BlogPost::COLLECTION, store.count::<BlogPost>(None).await?),
        (Project::COLLECTION, store.count::<Project>(None).await?),
        (Service::COLLECTION, store.count::<Service>(None).await?),
        (TeamMember::COLLECTION, store.count::<TeamMember>(None).await?),
        (Testimonial::COLLECTION, store.count::<Testimonial>(None).await?),
        (SocialPost::COLLECTION, store.count::<SocialPost>(None).await?),
        (Faq::COLLECTION, store.count::<Faq>(None).await?),
        (Award::COLLECTION, store.count::<Award>(None).await?),
        (TimelineEntry::COLLECTION, store.count::<TimelineEntry>(None).await?),
        (SkillCategory::COLLECTION, store.count::<SkillCategory>(None).await?),
        (JobApplication::COLLECTION, store.count::<JobApplication>(None).await?),
        (MediaAsset::COLLECTION, store.count::<MediaAsset>(None).await?),
        (Subscriber::COLLECTION, store.count::<Subscriber>(None).await?),
        (SiteSettings::COLLECTION, store.count::<SiteSettings>(None).await?),
    ])
}

fn posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "post-1".to_string(),
            metadata: Metadata::at("2024-01-15T09:00:00.000Z"),
            title: "Designing in the open".to_string(),
            slug: "designing-in-the-open".to_string(),
            excerpt: "Why we share unfinished work with clients from day one.".to_string(),
            body: "Every project at the studio starts with a shared board that the client \
                   can see. Unfinished work invites better questions than polished decks, \
                   and the feedback lands while changing course is still cheap."
                .to_string(),
            cover_image: "https://media.studiomeridian.example/blog/open-board.jpg".to_string(),
            tags: vec!["process".to_string(), "clients".to_string()],
            author: "Dana Okafor".to_string(),
            published: true,
        },
        BlogPost {
            id: "post-2".to_string(),
            metadata: Metadata::at("2024-02-20T10:30:00.000Z"),
            title: "A build pipeline for tiny teams".to_string(),
            slug: "a-build-pipeline-for-tiny-teams".to_string(),
            excerpt: "The three-stage deploy setup we run for every client site.".to_string(),
            body: "Preview, staging, production. Nothing exotic, but the discipline of \
                   never skipping a stage is what lets two engineers ship for a dozen \
                   retainer clients without breaking things."
                .to_string(),
            cover_image: "https://media.studiomeridian.example/blog/pipeline.jpg".to_string(),
            tags: vec!["engineering".to_string()],
            author: "Priya Nair".to_string(),
            published: true,
        },
        BlogPost {
            id: "post-3".to_string(),
            metadata: Metadata::at("2024-03-08T14:00:00.000Z"),
            title: "Notes on motion budgets".to_string(),
            slug: "notes-on-motion-budgets".to_string(),
            excerpt: "Draft thoughts on when animation earns its keep.".to_string(),
            body: "Working notes, not ready yet.".to_string(),
            cover_image: String::new(),
            tags: vec!["motion".to_string(), "craft".to_string()],
            author: "Marco Silva".to_string(),
            published: false,
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "project-1".to_string(),
            metadata: Metadata::at("2024-01-10T09:00:00.000Z"),
            title: "Harbor & Co storefront".to_string(),
            slug: "harbor-and-co-storefront".to_string(),
            summary: "Full e-commerce rebuild for a coastal homeware brand.".to_string(),
            category: "web".to_string(),
            cover_image: "https://media.studiomeridian.example/work/harbor-cover.jpg".to_string(),
            gallery: vec![
                "https://media.studiomeridian.example/work/harbor-1.jpg".to_string(),
                "https://media.studiomeridian.example/work/harbor-2.jpg".to_string(),
            ],
            client: "Harbor & Co".to_string(),
            year: "2024".to_string(),
            featured: true,
        },
        Project {
            id: "project-2".to_string(),
            metadata: Metadata::at("2023-09-18T09:00:00.000Z"),
            title: "Nordlys identity".to_string(),
            slug: "nordlys-identity".to_string(),
            summary: "Naming, wordmark, and brand system for a renewables startup.".to_string(),
            category: "branding".to_string(),
            cover_image: "https://media.studiomeridian.example/work/nordlys-cover.jpg".to_string(),
            gallery: vec!["https://media.studiomeridian.example/work/nordlys-1.jpg".to_string()],
            client: "Nordlys Energi".to_string(),
            year: "2023".to_string(),
            featured: true,
        },
        Project {
            id: "project-3".to_string(),
            metadata: Metadata::at("2023-04-02T09:00:00.000Z"),
            title: "Atlas city guides".to_string(),
            slug: "atlas-city-guides".to_string(),
            summary: "Design system and front-end for a travel publisher's guide app.".to_string(),
            category: "product".to_string(),
            cover_image: "https://media.studiomeridian.example/work/atlas-cover.jpg".to_string(),
            gallery: Vec::new(),
            client: "Atlas Press".to_string(),
            year: "2023".to_string(),
            featured: false,
        },
    ]
}

fn services() -> Vec<Service> {
    let rows = [
        ("service-1", "Brand strategy", "Positioning, naming, and identity systems.", "compass", 1),
        ("service-2", "Web design & build", "Marketing sites and storefronts, designed and shipped.", "layout", 2),
        ("service-3", "Product design", "Interfaces for apps and internal tools.", "grid", 3),
        ("service-4", "Motion & content", "Launch films, social cuts, and photography.", "film", 4),
    ];
    rows.iter()
        .map(|(id, title, blurb, icon, order)| Service {
            id: id.to_string(),
            metadata: Metadata::at("2023-01-05T09:00:00.000Z"),
            title: title.to_string(),
            blurb: blurb.to_string(),
            icon: icon.to_string(),
            order: *order,
        })
        .collect()
}

fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "team-1".to_string(),
            metadata: Metadata::at("2023-01-05T09:00:00.000Z"),
            name: "Dana Okafor".to_string(),
            role: "Creative Director".to_string(),
            photo: "https://media.studiomeridian.example/team/dana.jpg".to_string(),
            bio: "Founded the studio in 2019 after a decade in brand agencies.".to_string(),
            order: 1,
        },
        TeamMember {
            id: "team-2".to_string(),
            metadata: Metadata::at("2023-01-05T09:05:00.000Z"),
            name: "Priya Nair".to_string(),
            role: "Lead Engineer".to_string(),
            photo: "https://media.studiomeridian.example/team/priya.jpg".to_string(),
            bio: "Builds the storefronts and keeps the deploy pipeline honest.".to_string(),
            order: 2,
        },
        TeamMember {
            id: "team-3".to_string(),
            metadata: Metadata::at("2023-01-05T09:10:00.000Z"),
            name: "Marco Silva".to_string(),
            role: "Design Lead".to_string(),
            photo: "https://media.studiomeridian.example/team/marco.jpg".to_string(),
            bio: "Interface and motion design across every client account.".to_string(),
            order: 3,
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "testimonial-1".to_string(),
            metadata: Metadata::at("2024-02-01T09:00:00.000Z"),
            author: "Elena Brandt".to_string(),
            company: "Harbor & Co".to_string(),
            quote: "They rebuilt our store in eight weeks and conversion went up by a third."
                .to_string(),
            rating: 5,
            order: 1,
        },
        Testimonial {
            id: "testimonial-2".to_string(),
            metadata: Metadata::at("2023-10-12T09:00:00.000Z"),
            author: "Tomas Lindqvist".to_string(),
            company: "Nordlys Energi".to_string(),
            quote: "The identity work gave investors something to believe in before we had \
                    a product."
                .to_string(),
            rating: 4,
            order: 2,
        },
    ]
}

fn social_posts() -> Vec<SocialPost> {
    vec![
        SocialPost {
            id: "ig-1".to_string(),
            metadata: Metadata::at("2024-03-01T12:00:00.000Z"),
            caption: "Behind the scenes at the Harbor & Co shoot.".to_string(),
            image_url: "https://media.studiomeridian.example/social/harbor-shoot.jpg".to_string(),
            likes: 214,
            comments: 12,
            status: SocialStatus::Published,
            scheduled_for: None,
        },
        SocialPost {
            id: "ig-2".to_string(),
            metadata: Metadata::at("2024-03-10T12:00:00.000Z"),
            caption: "Sneak peek of the new studio space.".to_string(),
            image_url: "https://media.studiomeridian.example/social/studio-space.jpg".to_string(),
            likes: 0,
            comments: 0,
            status: SocialStatus::Draft,
            scheduled_for: None,
        },
        SocialPost {
            id: "ig-3".to_string(),
            metadata: Metadata::at("2024-03-12T12:00:00.000Z"),
            caption: "Nordlys launch film drops next week.".to_string(),
            image_url: "https://media.studiomeridian.example/social/nordlys-teaser.jpg".to_string(),
            likes: 0,
            comments: 0,
            status: SocialStatus::Draft,
            scheduled_for: Some("2026-09-05T09:00:00.000Z".to_string()),
        },
    ]
}

fn faqs() -> Vec<Faq> {
    let rows = [
        (
            "faq-1",
            "What does a typical project cost?",
            "Identity projects start around 15k, full site builds around 30k. We quote fixed prices after a scoping call.",
            1,
        ),
        (
            "faq-2",
            "How long does a site build take?",
            "Eight to twelve weeks from kickoff to launch, depending on content readiness.",
            2,
        ),
        (
            "faq-3",
            "Do you work with agencies as a white-label partner?",
            "Yes, about a third of our work ships under other agencies' names.",
            3,
        ),
    ];
    rows.iter()
        .map(|(id, question, answer, order)| Faq {
            id: id.to_string(),
            metadata: Metadata::at("2023-02-01T09:00:00.000Z"),
            question: question.to_string(),
            answer: answer.to_string(),
            order: *order,
        })
        .collect()
}

fn awards() -> Vec<Award> {
    vec![
        Award {
            id: "award-1".to_string(),
            metadata: Metadata::at("2024-02-10T08:00:00.000Z"),
            title: "Site of the Day".to_string(),
            organization: "Awwwards".to_string(),
            date: "2024-02-10".to_string(),
            category: "design".to_string(),
            featured: true,
        },
        Award {
            id: "award-2".to_string(),
            metadata: Metadata::at("2023-11-02T08:00:00.000Z"),
            title: "Honorable Mention".to_string(),
            organization: "CSS Design Awards".to_string(),
            date: "2023-11-02".to_string(),
            category: "design".to_string(),
            featured: false,
        },
    ]
}

fn timeline() -> Vec<TimelineEntry> {
    let rows = [
        ("timeline-1", "2019", "Studio founded", "Dana leaves agency life and takes on the first two clients from a kitchen table.", "flag", 1),
        ("timeline-2", "2021", "First retainers", "Three clients move to monthly retainers and the studio rents a real space.", "building", 2),
        ("timeline-3", "2024", "Team of eight", "Engineering joins design in-house and the studio passes fifty shipped projects.", "users", 3),
    ];
    rows.iter()
        .map(|(id, year, title, description, icon, order)| TimelineEntry {
            id: id.to_string(),
            metadata: Metadata::at("2023-02-01T09:00:00.000Z"),
            year: year.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            order: *order,
        })
        .collect()
}

fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            id: "skills-1".to_string(),
            metadata: Metadata::at("2023-02-01T09:00:00.000Z"),
            name: "Design".to_string(),
            icon: "pen-tool".to_string(),
            order: 1,
            skills: vec![
                SkillItem {
                    name: "Brand identity".to_string(),
                    proficiency: 95,
                },
                SkillItem {
                    name: "Interface design".to_string(),
                    proficiency: 90,
                },
                SkillItem {
                    name: "Motion".to_string(),
                    proficiency: 75,
                },
            ],
        },
        SkillCategory {
            id: "skills-2".to_string(),
            metadata: Metadata::at("2023-02-01T09:05:00.000Z"),
            name: "Engineering".to_string(),
            icon: "code".to_string(),
            order: 2,
            skills: vec![
                SkillItem {
                    name: "Front-end build".to_string(),
                    proficiency: 92,
                },
                SkillItem {
                    name: "E-commerce platforms".to_string(),
                    proficiency: 80,
                },
                SkillItem {
                    name: "Accessibility".to_string(),
                    proficiency: 85,
                },
            ],
        },
    ]
}

fn applications() -> Vec<JobApplication> {
    vec![
        JobApplication {
            id: "app-1".to_string(),
            metadata: Metadata::at("2024-03-20T11:00:00.000Z"),
            name: "Jordan Reyes".to_string(),
            email: "jordan.reyes@example.com".to_string(),
            phone: "+1 555 0134".to_string(),
            position: "Senior Designer".to_string(),
            resume_url: "https://media.studiomeridian.example/applications/jordan-reyes-cv.pdf"
                .to_string(),
            cover_letter: "I followed the Nordlys launch and would love to bring that level \
                           of craft to more brands."
                .to_string(),
            status: ApplicationStatus::Pending,
        },
        JobApplication {
            id: "app-2".to_string(),
            metadata: Metadata::at("2024-02-11T16:30:00.000Z"),
            name: "Alex Petrov".to_string(),
            email: "alex.petrov@example.com".to_string(),
            phone: String::new(),
            position: "Front-end Engineer".to_string(),
            resume_url: String::new(),
            cover_letter: String::new(),
            status: ApplicationStatus::Accepted,
        },
    ]
}

fn media() -> Vec<MediaAsset> {
    vec![MediaAsset {
        id: "media-1".to_string(),
        metadata: Metadata::at("2024-03-01T10:00:00.000Z"),
        file_name: "studio-loft.jpg".to_string(),
        url: "https://media.studiomeridian.example/site-assets/studio-loft-1709287200.jpg"
            .to_string(),
        content_type: "image/jpeg".to_string(),
        size_bytes: 482_113,
    }]
}

fn subscribers() -> Vec<Subscriber> {
    vec![
        Subscriber {
            id: "sub-1".to_string(),
            metadata: Metadata::at("2024-01-20T09:00:00.000Z"),
            email: "elena.brandt@example.com".to_string(),
        },
        Subscriber {
            id: "sub-2".to_string(),
            metadata: Metadata::at("2024-02-14T09:00:00.000Z"),
            email: "sofia.keller@example.com".to_string(),
        },
    ]
}

fn settings() -> Vec<SiteSettings> {
    vec![SiteSettings {
        id: SETTINGS_DOC_ID.to_string(),
        metadata: Metadata::at("2023-01-05T09:00:00.000Z"),
        meta_title: "Studio Meridian | Design & build studio".to_string(),
        meta_description: "A small studio shipping brands, websites, and products for \
                           clients who care about craft."
            .to_string(),
        keywords: vec![
            "design studio".to_string(),
            "branding".to_string(),
            "web design".to_string(),
        ],
        analytics_id: "G-7F2K9QD41M".to_string(),
        og_image: "https://media.studiomeridian.example/site-assets/og-default.jpg".to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Filter, Query};

    #[tokio::test]
    async fn seed_fills_every_collection() {
        let store = ContentStore::memory();
        let report = seed(&store).await.unwrap();

        assert_eq!(report.len(), 14);
        for entry in &report {
            assert!(entry.seeded > 0, "{} seeded nothing", entry.collection);
            assert_eq!(entry.existing, 0);
        }
    }

    #[tokio::test]
    async fn seeding_twice_adds_nothing() {
        let store = ContentStore::memory();
        seed(&store).await.unwrap();
        let first = collection_counts(&store).await.unwrap();

        let report = seed(&store).await.unwrap();
        for entry in &report {
            assert_eq!(entry.seeded, 0, "{} was reseeded", entry.collection);
            assert!(entry.existing > 0);
        }
        assert_eq!(collection_counts(&store).await.unwrap(), first);
    }

    #[tokio::test]
    async fn fixture_application_is_pending_review() {
        let store = ContentStore::seeded_memory().await.unwrap();
        let app: JobApplication = store.get("app-1").await.unwrap().unwrap();
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.email, "jordan.reyes@example.com");
    }

    #[tokio::test]
    async fn fixture_social_posts_cover_the_lifecycle() {
        let store = ContentStore::seeded_memory().await.unwrap();
        let drafts: Vec<SocialPost> = store
            .list(Query::all().with_filter(Filter::eq("status", "draft")))
            .await
            .unwrap();

        assert_eq!(drafts.len(), 2);
        assert!(drafts.iter().any(|p| p.is_scheduled()));
        assert!(drafts.iter().any(|p| !p.is_scheduled()));
    }

    #[tokio::test]
    async fn settings_row_uses_the_fixed_id() {
        let store = ContentStore::seeded_memory().await.unwrap();
        let settings: SiteSettings = store.get(SETTINGS_DOC_ID).await.unwrap().unwrap();
        assert!(settings.meta_title.starts_with("Studio Meridian"));
    }
}
