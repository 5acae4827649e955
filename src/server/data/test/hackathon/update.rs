use super::*;

/// Tests that a partial update only changes the provided fields.
///
/// Expected: Ok(Some) with new title and mode, other fields untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::hackathon::HackathonFactory::new(db)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let updated = HackathonRepository::new(db)
        .update(
            hackathon.id,
            UpdateHackathonParams {
                title: Some("Renamed".to_string()),
                mode: Some(HackathonMode::Offline),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.mode, HackathonMode::Offline);
    assert_eq!(updated.problem_statement, hackathon.problem_statement);
    assert_eq!(updated.timeline, hackathon.timeline);
    assert_eq!(updated.status, hackathon.status);
    assert!(updated.updated_at > hackathon.updated_at);

    Ok(())
}

/// Tests updating a hackathon that does not exist.
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

    let result = HackathonRepository::new(db)
        .update(Uuid::new_v4(), UpdateHackathonParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests setting the status directly.
///
/// Expected: Ok(Hackathon) with the new status persisted
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::create_hackathon(db).await?;
    let repo = HackathonRepository::new(db);

    let updated = repo
        .set_status(hackathon.id, HackathonStatus::Published)
        .await?;
    assert_eq!(updated.status, HackathonStatus::Published);
    assert_eq!(updated.title, hackathon.title);

    let stored = repo.find_by_id(hackathon.id).await?.unwrap();
    assert_eq!(stored.status, HackathonStatus::Published);

    Ok(())
}
