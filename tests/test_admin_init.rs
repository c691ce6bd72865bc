use chatdesk::bootstrap;
use chatdesk::config::Config;
use chatdesk::domain::ports::StaffRepository;

mod helpers;
use helpers::*;

fn test_config() -> Config {
    Config {
        database_url: "unused".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        admin_login: "admin".to_string(),
        admin_name: "Administrator".to_string(),
    }
}

#[tokio::test]
async fn admin_seeding_is_idempotent() {
    let db = setup_test_db().await;
    let config = test_config();

    bootstrap::initialize_admin(&db, &config).await.unwrap();
    bootstrap::initialize_admin(&db, &config).await.unwrap();

    let admin = db.get_staff_by_login("admin").await.unwrap().unwrap();
    assert_eq!(admin.role, "admin");
    assert!(!admin.on_line);
    assert_eq!(db.list_staff().await.unwrap().len(), 1);
}
