use chatdesk::domain::entities::{AppendMessageRequest, SenderType};
use chatdesk::domain::errors::DomainError;

mod helpers;
use helpers::*;

fn operator_message(chat_id: &str, content: &str) -> AppendMessageRequest {
    AppendMessageRequest {
        chat_id: chat_id.to_string(),
        sender_type: SenderType::Operator,
        sender_name: "Alice".to_string(),
        sender_id: Some("staff-1".to_string()),
        content: content.to_string(),
    }
}

#[tokio::test]
async fn messages_keep_chronological_order() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    let created = services
        .lifecycle
        .create_chat(create_chat_request("Ann", "+1555", "help"))
        .await
        .unwrap();

    services
        .messages
        .append_message(operator_message(&created.chat_id, "hello, how can I help?"))
        .await
        .unwrap();
    services
        .messages
        .append_message(AppendMessageRequest {
            chat_id: created.chat_id.clone(),
            sender_type: SenderType::Client,
            sender_name: "Ann".to_string(),
            sender_id: None,
            content: "my order is late".to_string(),
        })
        .await
        .unwrap();

    let messages = services.messages.list_messages(&created.chat_id).await.unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].sender_type, SenderType::Client);
    assert_eq!(messages[0].content, "help");
    assert_eq!(messages[1].sender_type, SenderType::Operator);
    assert_eq!(messages[2].content, "my order is late");
    assert!(messages.windows(2).all(|w| w[0].created_at <= w[1].created_at));
}

#[tokio::test]
async fn appending_to_a_missing_chat_is_not_found() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    let err = services
        .messages
        .append_message(operator_message("missing", "hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn empty_content_is_rejected() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    let created = services
        .lifecycle
        .create_chat(create_chat_request("Ann", "+1555", "help"))
        .await
        .unwrap();
    let err = services
        .messages
        .append_message(operator_message(&created.chat_id, "  "))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)), "got {:?}", err);
}

#[tokio::test]
async fn sender_identity_is_preserved() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    let created = services
        .lifecycle
        .create_chat(create_chat_request("Ann", "+1555", "help"))
        .await
        .unwrap();
    let message = services
        .messages
        .append_message(operator_message(&created.chat_id, "on it"))
        .await
        .unwrap();

    assert_eq!(message.sender_name, "Alice");
    assert_eq!(message.sender_id.as_deref(), Some("staff-1"));

    let messages = services.messages.list_messages(&created.chat_id).await.unwrap();
    let stored = messages.iter().find(|m| m.id == message.id).unwrap();
    assert_eq!(stored.sender_id.as_deref(), Some("staff-1"));
    // the client's opening message has no staff id
    assert_eq!(messages[0].sender_id, None);
}
