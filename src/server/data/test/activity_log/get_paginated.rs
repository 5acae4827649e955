use super::*;

/// Tests the case-insensitive substring filter on the action.
///
/// Expected: "status" matches HACKATHON_STATUS_CHANGE only
#[tokio::test]
async fn filters_action_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_activity_log(db, "HACKATHON_STATUS_CHANGE").await?;
    factory::create_activity_log(db, "TEAM_CREATION").await?;
    factory::create_activity_log(db, "ADMIN_LOGIN").await?;

    let page = ActivityLogRepository::new(db)
        .get_paginated(
            &ActivityLogFilter {
                action: Some("status".to_string()),
                ..Default::default()
            },
            PageRequest::new(1, 50),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].action, "HACKATHON_STATUS_CHANGE");

    Ok(())
}

/// Tests filtering by hackathon, admin and user.
///
/// Expected: each filter narrows to its own entries
#[tokio::test]
async fn filters_by_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hackathon = factory::create_hackathon(db).await?;
    let admin_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    factory::activity_log::ActivityLogFactory::new(db, "HACKATHON_STATUS_CHANGE")
        .hackathon_id(hackathon.id)
        .admin_id(admin_id)
        .build()
        .await?;
    factory::activity_log::ActivityLogFactory::new(db, "USER_REGISTRATION")
        .hackathon_id(hackathon.id)
        .user_id(user_id)
        .build()
        .await?;
    factory::create_activity_log(db, "ADMIN_LOGIN").await?;

    let repo = ActivityLogRepository::new(db);
    let request = PageRequest::new(1, 50);

    let by_hackathon = repo
        .get_paginated(
            &ActivityLogFilter {
                hackathon_id: Some(hackathon.id),
                ..Default::default()
            },
            request,
        )
        .await?;
    assert_eq!(by_hackathon.total, 2);

    let by_admin = repo
        .get_paginated(
            &ActivityLogFilter {
                admin_id: Some(admin_id),
                ..Default::default()
            },
            request,
        )
        .await?;
    assert_eq!(by_admin.total, 1);
    assert_eq!(by_admin.items[0].action, "HACKATHON_STATUS_CHANGE");

    let by_user = repo
        .get_paginated(
            &ActivityLogFilter {
                user_id: Some(user_id),
                ..Default::default()
            },
            request,
        )
        .await?;
    assert_eq!(by_user.total, 1);
    assert_eq!(by_user.items[0].action, "USER_REGISTRATION");

    Ok(())
}
