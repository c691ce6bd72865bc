use chatdesk::domain::entities::{ChatStatus, CloseChatRequest, QcStatus, Resolution};

mod helpers;
use helpers::*;

async fn resolved_chat(services: &Services, phone: &str) -> String {
    let created = services
        .lifecycle
        .create_chat(create_chat_request("Ann", phone, "help"))
        .await
        .unwrap();
    services
        .lifecycle
        .close(
            &created.chat_id,
            CloseChatRequest {
                resolution: Resolution::Resolved,
                comment: Some("fixed".to_string()),
                scheduled_for: None,
            },
        )
        .await
        .unwrap();
    created.chat_id
}

#[tokio::test]
async fn the_queue_is_exactly_the_qc_status_view() {
    let db = setup_test_db().await;
    create_operator(&db, "Alice", true).await;
    let services = build_services(&db);

    assert!(services.qc.list_queue().await.unwrap().is_empty());

    let first = resolved_chat(&services, "+1555").await;
    let second = resolved_chat(&services, "+1666").await;

    // an active chat never shows up in the queue
    services
        .lifecycle
        .create_chat(create_chat_request("Cara", "+1777", "hey"))
        .await
        .unwrap();

    let queue = services.qc.list_queue().await.unwrap();
    assert_eq!(queue.len(), 2);
    assert!(queue.iter().all(|c| c.status == ChatStatus::Qc));
    let ids: Vec<_> = queue.iter().map(|c| c.id.as_str()).collect();
    assert!(ids.contains(&first.as_str()));
    assert!(ids.contains(&second.as_str()));
}

#[tokio::test]
async fn disposing_a_chat_as_closed_removes_it_from_the_queue() {
    let db = setup_test_db().await;
    create_operator(&db, "Alice", true).await;
    let services = build_services(&db);

    let chat_id = resolved_chat(&services, "+1555").await;

    services.qc.dispose(&chat_id, QcStatus::Closed).await.unwrap();

    assert!(services.qc.list_queue().await.unwrap().is_empty());
    let detail = services.lifecycle.get_chat(&chat_id).await.unwrap();
    assert_eq!(detail.chat.status, ChatStatus::Closed);
}

#[tokio::test]
async fn non_final_dispositions_keep_the_chat_queued() {
    let db = setup_test_db().await;
    create_operator(&db, "Alice", true).await;
    let services = build_services(&db);

    let chat_id = resolved_chat(&services, "+1555").await;

    for disposition in [QcStatus::Pending, QcStatus::Rejected, QcStatus::Approved] {
        let chat = services.qc.dispose(&chat_id, disposition).await.unwrap();
        assert_eq!(chat.status, ChatStatus::Qc);
        assert_eq!(chat.qc_status, Some(disposition));
    }
    assert_eq!(services.qc.list_queue().await.unwrap().len(), 1);
}
