use super::*;

async fn seed(db: &sea_orm::DatabaseConnection, hackathon_id: Uuid) -> Result<(), DbErr> {
    let day_one = Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap();
    let day_two = Utc.with_ymd_and_hms(2025, 10, 2, 23, 30, 0).unwrap();

    for (action, timestamp) in [
        ("TEAM_CREATION", day_one),
        ("TEAM_CREATION", day_one + Duration::hours(1)),
        ("TEAM_CREATION", day_two),
        ("HACKATHON_STATUS_CHANGE", day_two),
    ] {
        factory::activity_log::ActivityLogFactory::new(db, action)
            .hackathon_id(hackathon_id)
            .timestamp(timestamp)
            .build()
            .await?;
    }

    Ok(())
}

/// Tests counting entries per action.
///
/// Expected: actions ordered by count, highest first
#[tokio::test]
async fn counts_by_action_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::create_hackathon(db).await?;
    seed(db, hackathon.id).await?;

    let repo = ActivityLogRepository::new(db);
    let filter = SummaryFilter::default();

    assert_eq!(repo.count(&filter).await?, 4);
    assert_eq!(
        repo.count_by_action(&filter).await?,
        vec![
            ("TEAM_CREATION".to_string(), 3),
            ("HACKATHON_STATUS_CHANGE".to_string(), 1),
        ]
    );

    Ok(())
}

/// Tests counting entries per UTC day.
///
/// Expected: days ordered oldest first
#[tokio::test]
async fn counts_by_day_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::create_hackathon(db).await?;
    seed(db, hackathon.id).await?;

    let days = ActivityLogRepository::new(db)
        .count_by_day(&SummaryFilter::default())
        .await?;

    assert_eq!(
        days,
        vec![
            (NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(), 2),
            (NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(), 2),
        ]
    );

    Ok(())
}

/// Tests that the date range and hackathon filters apply to every count.
///
/// Expected: only day two of the seeded hackathon is counted
#[tokio::test]
async fn applies_date_range_and_hackathon() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::create_hackathon(db).await?;
    let other = factory::create_hackathon(db).await?;
    seed(db, hackathon.id).await?;
    seed(db, other.id).await?;

    let filter = SummaryFilter {
        hackathon_id: Some(hackathon.id),
        start: Some(Utc.with_ymd_and_hms(2025, 10, 2, 0, 0, 0).unwrap()),
        end: None,
    };
    let repo = ActivityLogRepository::new(db);

    assert_eq!(repo.count(&filter).await?, 2);
    assert_eq!(
        repo.count_by_action(&filter).await?,
        vec![
            ("HACKATHON_STATUS_CHANGE".to_string(), 1),
            ("TEAM_CREATION".to_string(), 1),
        ]
    );
    assert_eq!(
        repo.count_by_day(&filter).await?,
        vec![(NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(), 2)]
    );

    Ok(())
}
