use super::*;

/// Tests that deleting a hackathon removes its teams and activity logs.
///
/// Expected: hackathon, team and log rows are gone
#[tokio::test]
async fn deletes_hackathon_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (hackathon, _team) = factory::helpers::create_team_with_hackathon(db).await?;
    factory::activity_log::ActivityLogFactory::new(db, "TEAM_CREATION")
        .hackathon_id(hackathon.id)
        .build()
        .await?;

    let repo = HackathonRepository::new(db);
    repo.delete(hackathon.id).await?;

    assert!(repo.find_by_id(hackathon.id).await?.is_none());
    assert_eq!(entity::prelude::Team::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ActivityLog::find().count(db).await?, 0);

    Ok(())
}
