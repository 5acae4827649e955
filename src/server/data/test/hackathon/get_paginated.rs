use super::*;

/// Tests that listings are ordered newest first and paginated.
///
/// Expected: second page holds the oldest hackathon, totals cover all rows
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = factory::hackathon::HackathonFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let middle = factory::hackathon::HackathonFactory::new(db)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let newest = factory::hackathon::HackathonFactory::new(db)
        .created_at(now)
        .build()
        .await?;

    let repo = HackathonRepository::new(db);

    let first = repo
        .get_paginated(&HackathonFilter::default(), PageRequest::new(1, 2))
        .await?;
    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.page, 1);
    let ids: Vec<_> = first.items.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id]);

    let second = repo
        .get_paginated(&HackathonFilter::default(), PageRequest::new(2, 2))
        .await?;
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].id, oldest.id);

    Ok(())
}

/// Tests filtering by organizer and by a set of statuses.
///
/// Expected: only matching hackathons are returned and counted
#[tokio::test]
async fn filters_by_organizer_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer_id = Uuid::new_v4();
    factory::hackathon::HackathonFactory::new(db)
        .organizer_id(organizer_id)
        .status(HackathonStatus::Draft)
        .build()
        .await?;
    factory::hackathon::HackathonFactory::new(db)
        .organizer_id(organizer_id)
        .status(HackathonStatus::Published)
        .build()
        .await?;
    factory::hackathon::HackathonFactory::new(db)
        .status(HackathonStatus::Active)
        .build()
        .await?;
    factory::hackathon::HackathonFactory::new(db)
        .status(HackathonStatus::Completed)
        .build()
        .await?;

    let repo = HackathonRepository::new(db);

    let own = repo
        .get_paginated(
            &HackathonFilter {
                organizer_id: Some(organizer_id),
                statuses: vec![],
            },
            PageRequest::new(1, 10),
        )
        .await?;
    assert_eq!(own.total, 2);
    assert!(own.items.iter().all(|h| h.organizer_id == organizer_id));

    let public = repo
        .get_paginated(
            &HackathonFilter {
                organizer_id: None,
                statuses: vec![HackathonStatus::Published, HackathonStatus::Active],
            },
            PageRequest::new(1, 10),
        )
        .await?;
    assert_eq!(public.total, 2);
    assert!(public.items.iter().all(|h| matches!(
        h.status,
        HackathonStatus::Published | HackathonStatus::Active
    )));

    Ok(())
}

/// Tests paging past the end of the results.
///
/// Expected: empty items with the real total
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hackathon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_hackathon(db).await?;

    let page = HackathonRepository::new(db)
        .get_paginated(&HackathonFilter::default(), PageRequest::new(5, 10))
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 1);
    assert_eq!(page.total_pages, 1);

    Ok(())
}
