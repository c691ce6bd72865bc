use crate::domain::entities::Client;
use crate::domain::errors::DomainResult;
use crate::domain::ports::client_repository::ClientRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

fn client_from_row(row: &sqlx::any::AnyRow) -> DomainResult<Client> {
    Ok(Client {
        id: row.try_get("id")?,
        phone: row.try_get("phone")?,
        name: row.try_get("name")?,
        session_id: row.try_get("session_id").ok(),
        last_interaction: row.try_get("last_interaction")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl ClientRepository for Database {
    async fn get_client_by_phone(&self, phone: &str) -> DomainResult<Option<Client>> {
        let row = sqlx::query(
            "SELECT id, phone, name, session_id, last_interaction, created_at
             FROM clients WHERE phone = ?",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(client_from_row).transpose()
    }

    async fn list_clients(&self) -> DomainResult<Vec<Client>> {
        let rows = sqlx::query(
            "SELECT id, phone, name, session_id, last_interaction, created_at
             FROM clients ORDER BY last_interaction DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(client_from_row).collect()
    }
}
