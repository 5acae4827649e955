use super::*;

fn params(organizer_id: Uuid) -> CreateHackathonParams {
    CreateHackathonParams {
        organizer_id,
        title: "Rust Jam".to_string(),
        problem_statement: "Build a parser".to_string(),
        mode: HackathonMode::Hybrid,
        status: HackathonStatus::Draft,
        banner_url: None,
        logo_url: Some("https://example.com/logo.png".to_string()),
        timeline: json!({ "start": "2025-10-01" }),
        participation_rules: json!({ "max_team_size": 4 }),
        submission_requirements: json!({}),
        communication_resources: json!({}),
        prize_rewards: json!({ "first": 500 }),
        settings: json!({}),
    }
}

/// Tests creating a hackathon.
///
/// Verifies that every provided field is persisted and that created and
/// updated timestamps are set to the same instant.
///
/// Expected: Ok(Hackathon) readable by id
#[tokio::test]
async fn creates_hackathon() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer_id = Uuid::new_v4();

    let repo = HackathonRepository::new(db);
    let created = repo.create(params(organizer_id)).await?;

    assert_eq!(created.organizer_id, organizer_id);
    assert_eq!(created.title, "Rust Jam");
    assert_eq!(created.mode, HackathonMode::Hybrid);
    assert_eq!(created.status, HackathonStatus::Draft);
    assert_eq!(created.participation_rules, json!({ "max_team_size": 4 }));
    assert_eq!(created.created_at, created.updated_at);

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests finding a hackathon by its title slug.
///
/// Expected: Ok(Some) for an exact title, Ok(None) otherwise
#[tokio::test]
async fn finds_by_exact_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::hackathon::HackathonFactory::new(db)
        .title("rust-jam-2025")
        .build()
        .await?;

    let repo = HackathonRepository::new(db);

    let found = repo.find_by_title("rust-jam-2025").await?;
    assert_eq!(found.map(|h| h.id), Some(hackathon.id));

    assert!(repo.find_by_title("rust-jam").await?.is_none());

    Ok(())
}

/// Tests looking up an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HackathonRepository::new(db);

    assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
