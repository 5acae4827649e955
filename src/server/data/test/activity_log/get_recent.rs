use super::*;

/// Tests fetching the most recent entries.
///
/// Expected: the `limit` newest entries, newest first
#[tokio::test]
async fn returns_newest_entries_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (action, minutes_ago) in [("FIRST", 30), ("SECOND", 20), ("THIRD", 10)] {
        factory::activity_log::ActivityLogFactory::new(db, action)
            .timestamp(now - Duration::minutes(minutes_ago))
            .build()
            .await?;
    }

    let recent = ActivityLogRepository::new(db).get_recent(2).await?;

    let actions: Vec<_> = recent.iter().map(|l| l.action.as_str()).collect();
    assert_eq!(actions, vec!["THIRD", "SECOND"]);

    Ok(())
}
