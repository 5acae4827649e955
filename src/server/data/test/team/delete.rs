use super::*;

/// Tests deleting an existing team.
///
/// Expected: Ok(true) and the team is gone
#[tokio::test]
async fn deletes_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hackathon, team) = factory::helpers::create_team_with_hackathon(db).await?;
    let repo = TeamRepository::new(db);

    assert!(repo.delete(team.id).await?);
    assert!(repo.find_by_id(team.id).await?.is_none());

    Ok(())
}

/// Tests deleting a team that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!TeamRepository::new(db).delete(Uuid::new_v4()).await?);

    Ok(())
}
