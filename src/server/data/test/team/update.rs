use super::*;

/// Tests updating scoring fields of a team.
///
/// Expected: Ok(Some) with new submission status and score, name untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hackathon, team) = factory::helpers::create_team_with_hackathon(db).await?;

    let updated = TeamRepository::new(db)
        .update(
            team.id,
            UpdateTeamParams {
                submission_status: Some(SubmissionStatus::Submitted),
                ai_score: Some(87.5),
                eligibility: Some("eligible".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, team.name);
    assert_eq!(updated.status, team.status);
    assert_eq!(updated.submission_status, SubmissionStatus::Submitted);
    assert_eq!(updated.ai_score, Some(87.5));
    assert_eq!(updated.eligibility.as_deref(), Some("eligible"));
    assert!(updated.has_submission());

    Ok(())
}

/// Tests updating a team that does not exist.
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

    let result = TeamRepository::new(db)
        .update(Uuid::new_v4(), UpdateTeamParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
