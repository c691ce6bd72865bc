use chatdesk::domain::entities::{CloseChatRequest, Resolution, StatsOutcome};

mod helpers;
use helpers::*;

const DATE: &str = "2026-08-07";

#[tokio::test]
async fn running_mean_matches_the_arithmetic_mean() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    for handling in [100, 200, 400] {
        services
            .stats
            .record("op-1", DATE, StatsOutcome::Resolved, Some(handling))
            .await
            .unwrap();
    }

    let stats = services.stats.get("op-1", DATE).await.unwrap().unwrap();
    assert_eq!(stats.total_chats, 3);
    assert_eq!(stats.resolved, 3);
    let mean = (100.0 + 200.0 + 400.0) / 3.0;
    assert!((stats.avg_handling_time - mean).abs() < 1e-9);
}

#[tokio::test]
async fn running_mean_is_order_independent() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    for handling in [100, 200, 400] {
        services
            .stats
            .record("op-a", DATE, StatsOutcome::Resolved, Some(handling))
            .await
            .unwrap();
    }
    for handling in [400, 100, 200] {
        services
            .stats
            .record("op-b", DATE, StatsOutcome::Resolved, Some(handling))
            .await
            .unwrap();
    }

    let a = services.stats.get("op-a", DATE).await.unwrap().unwrap();
    let b = services.stats.get("op-b", DATE).await.unwrap().unwrap();
    assert!((a.avg_handling_time - b.avg_handling_time).abs() < 1e-9);
}

#[tokio::test]
async fn mean_is_weighted_by_the_pre_increment_total() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    services
        .stats
        .record("op-1", DATE, StatsOutcome::Resolved, Some(100))
        .await
        .unwrap();
    services
        .stats
        .record("op-1", DATE, StatsOutcome::Postponed, None)
        .await
        .unwrap();
    services
        .stats
        .record("op-1", DATE, StatsOutcome::Resolved, Some(300))
        .await
        .unwrap();

    let stats = services.stats.get("op-1", DATE).await.unwrap().unwrap();
    assert_eq!(stats.total_chats, 3);
    assert_eq!(stats.resolved, 2);
    assert_eq!(stats.postponed, 1);
    // the second resolved close folds in against a total of 2, not a
    // resolved count of 1
    let expected = (100.0 * 2.0 + 300.0) / 3.0;
    assert!((stats.avg_handling_time - expected).abs() < 1e-9);
}

#[tokio::test]
async fn outcomes_land_in_their_own_counters() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    services
        .stats
        .record("op-1", DATE, StatsOutcome::Escalated, None)
        .await
        .unwrap();
    services
        .stats
        .record("op-1", DATE, StatsOutcome::Plain, None)
        .await
        .unwrap();

    let stats = services.stats.get("op-1", DATE).await.unwrap().unwrap();
    assert_eq!(stats.total_chats, 2);
    assert_eq!(stats.escalated, 1);
    assert_eq!(stats.resolved, 0);
    assert_eq!(stats.postponed, 0);
}

#[tokio::test]
async fn days_are_tracked_separately() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    services
        .stats
        .record("op-1", "2026-08-06", StatsOutcome::Resolved, Some(60))
        .await
        .unwrap();
    services
        .stats
        .record("op-1", "2026-08-07", StatsOutcome::Resolved, Some(120))
        .await
        .unwrap();

    let history = services.stats.for_operator("op-1").await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|s| s.total_chats == 1));

    let board = services.stats.for_date("2026-08-07").await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].operator_id, "op-1");
}

#[tokio::test]
async fn concurrent_closes_both_reach_the_counters() {
    let db = setup_test_db().await;
    let operator = create_operator(&db, "Alice", true).await;
    let services = build_services(&db);

    let first = services
        .lifecycle
        .create_chat(create_chat_request("Ann", "+1555", "help"))
        .await
        .unwrap();
    let second = services
        .lifecycle
        .create_chat(create_chat_request("Ben", "+1666", "hi"))
        .await
        .unwrap();

    let request = || CloseChatRequest {
        resolution: Resolution::Resolved,
        comment: None,
        scheduled_for: None,
    };
    let (a, b) = tokio::join!(
        services.lifecycle.close(&first.chat_id, request()),
        services.lifecycle.close(&second.chat_id, request()),
    );
    a.unwrap();
    b.unwrap();

    let today = chrono::Utc::now().date_naive().to_string();
    let stats = services.stats.get(&operator.id, &today).await.unwrap().unwrap();
    assert_eq!(stats.total_chats, 2);
    assert_eq!(stats.resolved, 2);
}
