use super::*;

/// Tests appending a log entry.
///
/// Expected: Ok(ActivityLog) with all links and details stored
#[tokio::test]
async fn appends_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::create_hackathon(db).await?;
    let admin_id = Uuid::new_v4();
    let before = Utc::now();

    let log = ActivityLogRepository::new(db)
        .create(NewActivityLog {
            hackathon_id: Some(hackathon.id),
            admin_id: Some(admin_id),
            ip_address: Some("10.0.0.1".to_string()),
            ..NewActivityLog::new(
                "HACKATHON_STATUS_CHANGE",
                json!({ "oldStatus": "draft", "newStatus": "published" }),
            )
        })
        .await?;

    assert_eq!(log.action, "HACKATHON_STATUS_CHANGE");
    assert_eq!(log.hackathon_id, Some(hackathon.id));
    assert_eq!(log.admin_id, Some(admin_id));
    assert_eq!(log.details["newStatus"], "published");
    assert!(log.timestamp >= before);

    Ok(())
}
