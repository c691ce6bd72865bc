use chatdesk::domain::errors::DomainError;
use chatdesk::domain::ports::WorkSessionRepository;

mod helpers;
use helpers::*;

#[tokio::test]
async fn switching_status_closes_the_open_session() {
    let db = setup_test_db().await;
    let staff = create_operator(&db, "Alice", true).await;
    let services = build_services(&db);

    let first = services
        .time_tracking
        .switch_status(&staff.id, "online")
        .await
        .unwrap();
    assert!(first.ended_at.is_none());

    let second = services
        .time_tracking
        .switch_status(&staff.id, "break")
        .await
        .unwrap();
    assert_eq!(second.status, "break");

    // exactly one open session remains, and it is the new one
    let open = db.get_open_session(&staff.id).await.unwrap().unwrap();
    assert_eq!(open.id, second.id);
}

#[tokio::test]
async fn report_aggregates_closed_sessions_only() {
    let db = setup_test_db().await;
    let staff = create_operator(&db, "Alice", true).await;
    let services = build_services(&db);

    services.time_tracking.switch_status(&staff.id, "online").await.unwrap();
    services.time_tracking.switch_status(&staff.id, "break").await.unwrap();

    let today = chrono::Utc::now().date_naive().to_string();
    let report = services
        .time_tracking
        .report(&staff.id, &today, &today)
        .await
        .unwrap();

    // the closed "online" session reports; the open "break" one does not
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].status, "online");
    assert!(report[0].total_minutes >= 0);
}

#[tokio::test]
async fn unknown_staff_cannot_track_time() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    let err = services
        .time_tracking
        .switch_status("missing", "online")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn empty_status_is_rejected() {
    let db = setup_test_db().await;
    let staff = create_operator(&db, "Alice", true).await;
    let services = build_services(&db);

    let err = services
        .time_tracking
        .switch_status(&staff.id, " ")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)), "got {:?}", err);
}
