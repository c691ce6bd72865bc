use crate::domain::entities::{WorkSession, WorkTimeEntry};
use crate::domain::errors::DomainResult;
use crate::domain::ports::work_session_repository::WorkSessionRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

fn session_from_row(row: &sqlx::any::AnyRow) -> DomainResult<WorkSession> {
    Ok(WorkSession {
        id: row.try_get("id")?,
        staff_id: row.try_get("staff_id")?,
        status: row.try_get("status")?,
        session_date: row.try_get("session_date")?,
        started_at: row.try_get("started_at")?,
        ended_at: row.try_get("ended_at").ok(),
        duration_minutes: row.try_get::<i64, _>("duration_minutes").ok(),
    })
}

#[async_trait]
impl WorkSessionRepository for Database {
    async fn switch_status(&self, staff_id: &str, status: &str) -> DomainResult<WorkSession> {
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        let mut tx = self.pool.begin().await?;

        let open = sqlx::query(
            "SELECT id, started_at FROM work_sessions
             WHERE staff_id = ? AND ended_at IS NULL
             ORDER BY started_at DESC LIMIT 1",
        )
        .bind(staff_id)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(row) = open {
            let open_id: String = row.try_get("id")?;
            let started_at: String = row.try_get("started_at")?;
            let elapsed_minutes = DateTime::parse_from_rfc3339(&started_at)
                .map(|started| (now - started.with_timezone(&Utc)).num_minutes().max(0))
                .unwrap_or(0);

            sqlx::query(
                "UPDATE work_sessions SET ended_at = ?, duration_minutes = ? WHERE id = ?",
            )
            .bind(&now_str)
            .bind(elapsed_minutes)
            .bind(&open_id)
            .execute(&mut *tx)
            .await?;
        }

        let session = WorkSession {
            id: Uuid::new_v4().to_string(),
            staff_id: staff_id.to_string(),
            status: status.to_string(),
            session_date: now.date_naive().to_string(),
            started_at: now_str,
            ended_at: None,
            duration_minutes: None,
        };

        sqlx::query(
            "INSERT INTO work_sessions (id, staff_id, status, session_date, started_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&session.id)
        .bind(&session.staff_id)
        .bind(&session.status)
        .bind(&session.session_date)
        .bind(&session.started_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(session)
    }

    async fn get_open_session(&self, staff_id: &str) -> DomainResult<Option<WorkSession>> {
        let row = sqlx::query(
            "SELECT id, staff_id, status, session_date, started_at, ended_at, duration_minutes
             FROM work_sessions
             WHERE staff_id = ? AND ended_at IS NULL
             ORDER BY started_at DESC LIMIT 1",
        )
        .bind(staff_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(session_from_row).transpose()
    }

    async fn report(
        &self,
        staff_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> DomainResult<Vec<WorkTimeEntry>> {
        let rows = sqlx::query(
            "SELECT session_date, status, SUM(duration_minutes) AS total_minutes
             FROM work_sessions
             WHERE staff_id = ? AND session_date >= ? AND session_date <= ?
               AND ended_at IS NOT NULL
             GROUP BY session_date, status
             ORDER BY session_date DESC, status",
        )
        .bind(staff_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(WorkTimeEntry {
                session_date: row.try_get("session_date")?,
                status: row.try_get("status")?,
                total_minutes: row.try_get::<i64, _>("total_minutes").unwrap_or(0),
            });
        }
        Ok(entries)
    }
}
