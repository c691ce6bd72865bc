use chatdesk::domain::entities::RateChatRequest;
use chatdesk::domain::errors::DomainError;

mod helpers;
use helpers::*;

fn rate(chat_id: &str, operator_id: &str, rated_by: &str, score: i64) -> RateChatRequest {
    RateChatRequest {
        chat_id: chat_id.to_string(),
        operator_id: operator_id.to_string(),
        rated_by: rated_by.to_string(),
        score,
        comment: "solid handling".to_string(),
    }
}

#[tokio::test]
async fn a_second_rating_replaces_the_first() {
    let db = setup_test_db().await;
    let operator = create_operator(&db, "Alice", true).await;
    let reviewer = create_operator(&db, "Rita", false).await;
    let services = build_services(&db);

    let created = services
        .lifecycle
        .create_chat(create_chat_request("Ann", "+1555", "help"))
        .await
        .unwrap();

    services
        .ratings
        .rate_chat(rate(&created.chat_id, &operator.id, &reviewer.id, 70))
        .await
        .unwrap();
    services
        .ratings
        .rate_chat(rate(&created.chat_id, &operator.id, &reviewer.id, 95))
        .await
        .unwrap();

    let view = services.ratings.for_chat(&created.chat_id).await.unwrap().unwrap();
    assert_eq!(view.rating.score, 95);
    assert_eq!(view.rater_name.as_deref(), Some("Rita"));
    assert_eq!(view.client_name.as_deref(), Some("Ann"));

    // still a single row for the operator
    let for_operator = services.ratings.for_operator(&operator.id).await.unwrap();
    assert_eq!(for_operator.len(), 1);
}

#[tokio::test]
async fn rating_an_unknown_chat_is_not_found() {
    let db = setup_test_db().await;
    let operator = create_operator(&db, "Alice", true).await;
    let services = build_services(&db);

    let err = services
        .ratings
        .rate_chat(rate("missing", &operator.id, &operator.id, 80))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn listings_cover_operator_and_global_views() {
    let db = setup_test_db().await;
    let alice = create_operator(&db, "Alice", true).await;
    let reviewer = create_operator(&db, "Rita", false).await;
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

    services
        .ratings
        .rate_chat(rate(&first.chat_id, &alice.id, &reviewer.id, 80))
        .await
        .unwrap();
    services
        .ratings
        .rate_chat(rate(&second.chat_id, &alice.id, &reviewer.id, 90))
        .await
        .unwrap();

    assert_eq!(services.ratings.for_operator(&alice.id).await.unwrap().len(), 2);
    assert_eq!(services.ratings.all().await.unwrap().len(), 2);
    assert!(services.ratings.for_chat("nothing").await.unwrap().is_none());
}
