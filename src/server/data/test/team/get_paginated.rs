use super::*;

/// Tests filtering teams by hackathon and status.
///
/// Expected: only matching teams are returned and counted
#[tokio::test]
async fn filters_by_hackathon_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::create_hackathon(db).await?;
    let other = factory::create_hackathon(db).await?;
    factory::team::TeamFactory::new(db, hackathon.id)
        .status(TeamStatus::Approved)
        .build()
        .await?;
    factory::create_team(db, hackathon.id).await?;
    factory::team::TeamFactory::new(db, other.id)
        .status(TeamStatus::Approved)
        .build()
        .await?;

    let repo = TeamRepository::new(db);

    let in_hackathon = repo
        .get_paginated(
            &TeamFilter {
                hackathon_id: Some(hackathon.id),
                status: None,
            },
            PageRequest::new(1, 10),
        )
        .await?;
    assert_eq!(in_hackathon.total, 2);

    let approved = repo
        .get_paginated(
            &TeamFilter {
                hackathon_id: Some(hackathon.id),
                status: Some(TeamStatus::Approved),
            },
            PageRequest::new(1, 10),
        )
        .await?;
    assert_eq!(approved.total, 1);
    assert_eq!(approved.items[0].status, TeamStatus::Approved);

    let all = repo
        .get_paginated(&TeamFilter::default(), PageRequest::new(1, 2))
        .await?;
    assert_eq!(all.total, 3);
    assert_eq!(all.items.len(), 2);
    assert_eq!(all.total_pages, 2);

    Ok(())
}
