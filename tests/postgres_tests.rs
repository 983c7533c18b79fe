//! PostgreSQL store tests. Run only when `TEST_DATABASE_URL` points at a disposable database.

use landing_cms::*;
use std::sync::Arc;

async fn pool() -> Option<sqlx::PgPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to TEST_DATABASE_URL");
    ensure_tables(&pool).await.expect("ensure tables");
    // Twice: bootstrap must be idempotent.
    ensure_tables(&pool).await.expect("ensure tables again");
    sqlx::query(
        "TRUNCATE hero_sections, sdk_showcases, sdk_features, code_comparisons, community_stats, roadmap_items \
         RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await
    .expect("truncate");
    Some(pool)
}

fn hero(headline: &str) -> CreateHeroSection {
    CreateHeroSection {
        headline: headline.into(),
        subheadline: "s".into(),
        mission_statement: "m".into(),
        primary_cta_text: "p".into(),
        primary_cta_url: "/p".into(),
        secondary_cta_text: "q".into(),
        secondary_cta_url: "/q".into(),
        code_snippet: "c".into(),
    }
}

fn sdk(name: &str, featured: bool) -> CreateSdkShowcase {
    CreateSdkShowcase {
        name: name.into(),
        version: "1.0.0".into(),
        description: "d".into(),
        install_command: "i".into(),
        code_example: "e".into(),
        documentation_url: "https://docs".into(),
        github_url: "https://github".into(),
        package_url: "https://pkg".into(),
        is_featured: featured,
    }
}

// Single test so the steps share one database without interleaving.
#[tokio::test]
async fn postgres_store_end_to_end() {
    let Some(pool) = pool().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let svc = ContentService::new(Arc::new(PgStore::new(pool.clone())));

    let err = svc.get_landing_page_data().await.unwrap_err();
    assert!(matches!(err, AppError::MissingRequired("hero section")));

    svc.create_hero_section(hero("old")).await.unwrap();
    let latest = svc.create_hero_section(hero("new")).await.unwrap();
    assert_eq!(svc.get_hero_section().await.unwrap(), Some(latest.clone()));

    let shown = svc.create_sdk_showcase(sdk("python", true)).await.unwrap();
    let hidden = svc.create_sdk_showcase(sdk("go", false)).await.unwrap();
    let feature = svc
        .create_sdk_feature(CreateSdkFeature {
            sdk_id: shown.id,
            name: "Typed".into(),
            description: "d".into(),
            icon: Some("shield".into()),
        })
        .await
        .unwrap();
    svc.create_sdk_feature(CreateSdkFeature {
        sdk_id: hidden.id,
        name: "Fast".into(),
        description: "d".into(),
        icon: None,
    })
    .await
    .unwrap();
    let missing = svc
        .create_sdk_feature(CreateSdkFeature { sdk_id: 9999, name: "x".into(), description: "d".into(), icon: None })
        .await
        .unwrap_err();
    assert!(matches!(missing, AppError::ForeignKey { id: 9999, .. }));
    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sdk_features WHERE sdk_id = 9999")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);

    let created = svc
        .update_community_stats(UpdateCommunityStats {
            github_stars: Some(1500),
            total_downloads: Some(50000),
            contributors: Some(25),
            repositories: Some(10),
        })
        .await
        .unwrap();
    let updated = svc
        .update_community_stats(UpdateCommunityStats { github_stars: Some(2000), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!((updated.total_downloads, updated.contributors, updated.repositories), (50000, 25, 10));
    assert!(updated.updated_at > created.updated_at);

    for (title, priority, status) in [
        ("a", 1, RoadmapStatus::Completed),
        ("b", 1, RoadmapStatus::InProgress),
        ("c", 2, RoadmapStatus::Completed),
        ("d", 3, RoadmapStatus::Planned),
    ] {
        svc.create_roadmap_item(CreateRoadmapItem {
            title: title.into(),
            description: "d".into(),
            status,
            expected_date: None,
            priority,
        })
        .await
        .unwrap();
    }
    let titles: Vec<String> = svc.get_roadmap_items().await.unwrap().into_iter().map(|i| i.title).collect();
    assert_eq!(titles, vec!["a", "b", "c", "d"]);

    let data = svc.get_landing_page_data().await.unwrap();
    assert_eq!(data.hero, latest);
    assert_eq!(data.featured_sdks, vec![shown]);
    assert_eq!(data.sdk_features, vec![feature]);
    assert_eq!(data.community_stats, updated);
    assert_eq!(data.roadmap.len(), 4);
}
