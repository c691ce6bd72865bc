use crate::domain::entities::{Staff, StaffUpdate};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::staff_repository::StaffRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

const STAFF_COLUMNS: &str = "id, login, name, role, permissions, on_line, created_at, updated_at";

fn staff_from_row(row: &sqlx::any::AnyRow) -> DomainResult<Staff> {
    let permissions_raw: String = row.try_get("permissions")?;
    Ok(Staff {
        id: row.try_get("id")?,
        login: row.try_get("login")?,
        name: row.try_get("name")?,
        role: row.try_get("role")?,
        permissions: serde_json::from_str(&permissions_raw)
            .unwrap_or_else(|_| serde_json::json!({})),
        on_line: row.try_get::<i64, _>("on_line")? != 0,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl StaffRepository for Database {
    async fn create_staff(&self, staff: &Staff) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO staff (id, login, name, role, permissions, on_line, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&staff.id)
        .bind(&staff.login)
        .bind(&staff.name)
        .bind(&staff.role)
        .bind(staff.permissions.to_string())
        .bind(staff.on_line)
        .bind(&staff.created_at)
        .bind(&staff.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_staff_by_id(&self, id: &str) -> DomainResult<Option<Staff>> {
        let row = sqlx::query(&format!("SELECT {} FROM staff WHERE id = ?", STAFF_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(staff_from_row).transpose()
    }

    async fn get_staff_by_login(&self, login: &str) -> DomainResult<Option<Staff>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM staff WHERE login = ?",
            STAFF_COLUMNS
        ))
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(staff_from_row).transpose()
    }

    async fn list_staff(&self) -> DomainResult<Vec<Staff>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM staff ORDER BY created_at DESC",
            STAFF_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(staff_from_row).collect()
    }

    async fn list_online_staff(&self) -> DomainResult<Vec<Staff>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM staff WHERE on_line = ? ORDER BY login",
            STAFF_COLUMNS
        ))
        .bind(true)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(staff_from_row).collect()
    }

    async fn update_staff(&self, id: &str, update: &StaffUpdate) -> DomainResult<Staff> {
        let now = chrono::Utc::now().to_rfc3339();
        let permissions = update.permissions.as_ref().map(|p| p.to_string());

        let result = sqlx::query(
            "UPDATE staff
             SET name = COALESCE(?, name),
                 role = COALESCE(?, role),
                 permissions = COALESCE(?, permissions),
                 on_line = COALESCE(?, on_line),
                 updated_at = ?
             WHERE id = ?",
        )
        .bind(&update.name)
        .bind(&update.role)
        .bind(&permissions)
        .bind(update.on_line)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("Staff {} not found", id)));
        }

        self.get_staff_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Store(format!("Staff {} disappeared after update", id)))
    }
}
