use chatdesk::domain::entities::{CreateStaffRequest, StaffUpdate};
use chatdesk::domain::errors::DomainError;

mod helpers;
use helpers::*;

fn staff_request(login: &str) -> CreateStaffRequest {
    CreateStaffRequest {
        login: login.to_string(),
        name: "Alice".to_string(),
        role: "operator".to_string(),
        permissions: Some(serde_json::json!({ "chats": { "closed": true } })),
    }
}

#[tokio::test]
async fn staff_are_created_off_line() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    let staff = services.staff.create_staff(staff_request("alice")).await.unwrap();
    assert!(!staff.on_line);
    assert_eq!(staff.role, "operator");

    let fetched = services.staff.get_staff(&staff.id).await.unwrap();
    assert_eq!(fetched.login, "alice");
    assert_eq!(fetched.permissions["chats"]["closed"], true);
}

#[tokio::test]
async fn duplicate_logins_are_a_conflict() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    services.staff.create_staff(staff_request("alice")).await.unwrap();
    let err = services
        .staff
        .create_staff(staff_request("alice"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)), "got {:?}", err);
}

#[tokio::test]
async fn presence_drives_pool_eligibility() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    let staff = services.staff.create_staff(staff_request("alice")).await.unwrap();

    // off line: nobody to assign
    let created = services
        .lifecycle
        .create_chat(create_chat_request("Ann", "+1555", "help"))
        .await
        .unwrap();
    assert_eq!(created.operator_id, None);

    services
        .staff
        .update_staff(
            &staff.id,
            StaffUpdate {
                on_line: Some(true),
                ..StaffUpdate::default()
            },
        )
        .await
        .unwrap();

    let created = services
        .lifecycle
        .create_chat(create_chat_request("Ben", "+1666", "hi"))
        .await
        .unwrap();
    assert_eq!(created.operator_id.as_deref(), Some(staff.id.as_str()));
}

#[tokio::test]
async fn update_requires_at_least_one_field() {
    let db = setup_test_db().await;
    let services = build_services(&db);

    let staff = services.staff.create_staff(staff_request("alice")).await.unwrap();
    let err = services
        .staff
        .update_staff(&staff.id, StaffUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)), "got {:?}", err);
}
