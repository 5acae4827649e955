use super::*;

/// Tests counting teams and submissions for a hackathon.
///
/// Teams of other hackathons must not be counted; late submissions count as
/// submitted.
///
/// Expected: Ok(HackathonStats) with 3 teams and 2 submissions
#[tokio::test]
async fn counts_teams_and_submissions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::create_hackathon(db).await?;
    let other = factory::create_hackathon(db).await?;

    factory::create_team(db, hackathon.id).await?;
    factory::team::TeamFactory::new(db, hackathon.id)
        .submission_status(SubmissionStatus::Submitted)
        .build()
        .await?;
    factory::team::TeamFactory::new(db, hackathon.id)
        .submission_status(SubmissionStatus::Late)
        .build()
        .await?;
    factory::team::TeamFactory::new(db, other.id)
        .submission_status(SubmissionStatus::Submitted)
        .build()
        .await?;

    let stats = HackathonRepository::new(db).get_stats(hackathon.id).await?;

    assert_eq!(stats.total_teams, 3);
    assert_eq!(stats.total_submissions, 2);

    Ok(())
}

/// Tests stats for a hackathon without teams.
///
/// Expected: zero counts
#[tokio::test]
async fn returns_zero_without_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::create_hackathon(db).await?;

    let stats = HackathonRepository::new(db).get_stats(hackathon.id).await?;

    assert_eq!(stats.total_teams, 0);
    assert_eq!(stats.total_submissions, 0);

    Ok(())
}
