use super::*;

/// Tests creating a team for an existing hackathon.
///
/// Expected: Ok(Team) that has not submitted yet
#[tokio::test]
async fn creates_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::create_hackathon(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            hackathon_id: hackathon.id,
            name: "Borrow Checkers".to_string(),
            description: Some("We fight the compiler".to_string()),
            status: TeamStatus::Approved,
        })
        .await?;

    assert_eq!(team.hackathon_id, hackathon.id);
    assert_eq!(team.name, "Borrow Checkers");
    assert_eq!(team.status, TeamStatus::Approved);
    assert_eq!(team.submission_status, SubmissionStatus::NotSubmitted);
    assert!(team.ai_score.is_none());

    assert_eq!(repo.find_by_id(team.id).await?, Some(team));

    Ok(())
}

/// Tests that team names are scoped to their hackathon.
///
/// Expected: name taken in its own hackathon only
#[tokio::test]
async fn detects_taken_name_within_hackathon() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::create_hackathon(db).await?;
    let other = factory::create_hackathon(db).await?;
    factory::team::TeamFactory::new(db, hackathon.id)
        .name("Ferris")
        .build()
        .await?;

    let repo = TeamRepository::new(db);

    assert!(repo.name_taken(hackathon.id, "Ferris").await?);
    assert!(!repo.name_taken(other.id, "Ferris").await?);
    assert!(!repo.name_taken(hackathon.id, "Crabs").await?);

    Ok(())
}

/// Tests that a team cannot reference a missing hackathon.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_hackathon() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamRepository::new(db)
        .create(CreateTeamParams {
            hackathon_id: Uuid::new_v4(),
            name: "Orphans".to_string(),
            description: None,
            status: TeamStatus::Pending,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
