use crate::domain::entities::{
    Chat, ChatStatus, ChatSummary, ChatUpdate, CloseOutcome, NewChat, QcStatus, Resolution,
    StatsOutcome,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::chat_repository::ChatRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

const CHAT_COLUMNS: &str = "id, client_name, client_phone, client_id, operator_id, session_id, \
     status, resolution, resolution_comment, scheduled_for, handling_time, qc_status, \
     timer_expires_at, timer_extended_count, created_at, started_at, closed_at";

fn chat_from_row(row: &sqlx::any::AnyRow) -> DomainResult<Chat> {
    Ok(Chat {
        id: row.try_get("id")?,
        client_name: row.try_get("client_name")?,
        client_phone: row.try_get("client_phone")?,
        client_id: row.try_get("client_id")?,
        operator_id: row.try_get("operator_id").ok(),
        session_id: row.try_get("session_id").ok(),
        status: ChatStatus::from(row.try_get::<String, _>("status")?),
        resolution: Resolution::from(row.try_get::<String, _>("resolution")?),
        resolution_comment: row.try_get("resolution_comment").ok(),
        scheduled_for: row.try_get("scheduled_for").ok(),
        handling_time: row.try_get::<i64, _>("handling_time").ok(),
        qc_status: row
            .try_get::<String, _>("qc_status")
            .ok()
            .map(QcStatus::from),
        timer_expires_at: row.try_get("timer_expires_at").ok(),
        timer_extended_count: row.try_get("timer_extended_count")?,
        created_at: row.try_get("created_at")?,
        started_at: row.try_get("started_at").ok(),
        closed_at: row.try_get("closed_at").ok(),
    })
}

#[async_trait]
impl ChatRepository for Database {
    async fn create_chat(&self, record: &NewChat) -> DomainResult<Chat> {
        let mut tx = self.pool.begin().await?;

        // Upsert the client by phone, refreshing name, session and
        // last-interaction on conflict.
        sqlx::query(
            "INSERT INTO clients (id, phone, name, session_id, last_interaction, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(phone) DO UPDATE SET
                 name = excluded.name,
                 session_id = excluded.session_id,
                 last_interaction = excluded.last_interaction",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&record.client_phone)
        .bind(&record.client_name)
        .bind(&record.session_id)
        .bind(&record.created_at)
        .bind(&record.created_at)
        .execute(&mut *tx)
        .await?;

        let client_row = sqlx::query("SELECT id FROM clients WHERE phone = ?")
            .bind(&record.client_phone)
            .fetch_one(&mut *tx)
            .await?;
        let client_id: String = client_row.try_get("id")?;

        sqlx::query(
            "INSERT INTO chats (id, client_name, client_phone, client_id, operator_id, session_id,
                                status, resolution, timer_expires_at, timer_extended_count,
                                created_at, started_at)
             VALUES (?, ?, ?, ?, ?, ?, 'active', 'none', ?, 0, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.client_name)
        .bind(&record.client_phone)
        .bind(&client_id)
        .bind(&record.operator_id)
        .bind(&record.session_id)
        .bind(&record.timer_expires_at)
        .bind(&record.created_at)
        .bind(&record.created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO messages (id, chat_id, sender_type, sender_name, sender_id, content, created_at)
             VALUES (?, ?, 'client', ?, NULL, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&record.id)
        .bind(&record.client_name)
        .bind(&record.first_message)
        .bind(&record.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get_chat_by_id(&record.id).await?.ok_or_else(|| {
            DomainError::Store(format!("Chat {} disappeared after creation", record.id))
        })
    }

    async fn get_chat_by_id(&self, id: &str) -> DomainResult<Option<Chat>> {
        let row = sqlx::query(&format!("SELECT {} FROM chats WHERE id = ?", CHAT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(chat_from_row).transpose()
    }

    async fn get_chat_by_session(&self, session_id: &str) -> DomainResult<Option<Chat>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM chats WHERE session_id = ? ORDER BY created_at DESC LIMIT 1",
            CHAT_COLUMNS
        ))
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(chat_from_row).transpose()
    }

    async fn list_chats(
        &self,
        status: ChatStatus,
        operator_id: Option<&str>,
    ) -> DomainResult<Vec<ChatSummary>> {
        let base = "SELECT c.id, c.client_name, c.client_phone, c.operator_id,
                           s.name AS operator_name, c.status, c.resolution, c.created_at,
                           c.closed_at, COUNT(m.id) AS message_count
                    FROM chats c
                    LEFT JOIN staff s ON c.operator_id = s.id
                    LEFT JOIN messages m ON c.id = m.chat_id";

        let rows = match operator_id {
            Some(op) => {
                sqlx::query(&format!(
                    "{} WHERE c.status = ? AND c.operator_id = ?
                     GROUP BY c.id, s.name ORDER BY c.created_at DESC",
                    base
                ))
                .bind(status.to_string())
                .bind(op)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "{} WHERE c.status = ?
                     GROUP BY c.id, s.name ORDER BY c.created_at DESC",
                    base
                ))
                .bind(status.to_string())
                .fetch_all(&self.pool)
                .await?
            }
        };

        let mut summaries = Vec::with_capacity(rows.len());
        for row in rows {
            summaries.push(ChatSummary {
                id: row.try_get("id")?,
                client_name: row.try_get("client_name")?,
                client_phone: row.try_get("client_phone")?,
                operator_id: row.try_get("operator_id").ok(),
                operator_name: row.try_get("operator_name").ok(),
                status: ChatStatus::from(row.try_get::<String, _>("status")?),
                resolution: Resolution::from(row.try_get::<String, _>("resolution")?),
                created_at: row.try_get("created_at")?,
                closed_at: row.try_get("closed_at").ok(),
                message_count: row.try_get("message_count")?,
            });
        }
        Ok(summaries)
    }

    async fn extend_chat_timer(&self, id: &str, new_expiry: &str) -> DomainResult<Chat> {
        let result = sqlx::query(
            "UPDATE chats
             SET timer_expires_at = ?, timer_extended_count = timer_extended_count + 1
             WHERE id = ? AND status = 'active'",
        )
        .bind(new_expiry)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict(format!("Chat {} is not active", id)));
        }

        self.get_chat_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Store(format!("Chat {} disappeared after update", id)))
    }

    async fn reassign_chat(
        &self,
        id: &str,
        operator_id: &str,
        new_expiry: &str,
    ) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE chats SET operator_id = ?, timer_expires_at = ?
             WHERE id = ? AND status = 'active'",
        )
        .bind(operator_id)
        .bind(new_expiry)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict(format!("Chat {} is not active", id)));
        }
        Ok(())
    }

    async fn escalate_chat(
        &self,
        id: &str,
        target_operator_id: &str,
        comment: &str,
        handling_time: i64,
        new_expiry: &str,
        stat_date: &str,
    ) -> DomainResult<Chat> {
        let mut tx = self.pool.begin().await?;

        // The departing operator is whoever holds the chat at commit time.
        let row = sqlx::query("SELECT operator_id, status FROM chats WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Chat {} not found", id)))?;
        let charged_operator: Option<String> = row.try_get("operator_id").ok();
        let status: String = row.try_get("status")?;
        if status == "closed" {
            return Err(DomainError::Conflict(format!("Chat {} is already closed", id)));
        }

        sqlx::query(
            "UPDATE chats
             SET operator_id = ?, status = 'active', resolution = 'escalated',
                 resolution_comment = ?, handling_time = ?, timer_expires_at = ?,
                 qc_status = NULL, closed_at = NULL
             WHERE id = ?",
        )
        .bind(target_operator_id)
        .bind(comment)
        .bind(handling_time)
        .bind(new_expiry)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        match &charged_operator {
            Some(operator) => {
                self.record_outcome_internal(
                    &mut *tx,
                    operator,
                    stat_date,
                    StatsOutcome::Escalated,
                    None,
                )
                .await?;
            }
            None => {
                tracing::warn!("Escalated chat {} had no operator to charge", id);
            }
        }

        tx.commit().await?;

        self.get_chat_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Store(format!("Chat {} disappeared after update", id)))
    }

    async fn close_chat(&self, id: &str, outcome: &CloseOutcome) -> DomainResult<Chat> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("SELECT operator_id FROM chats WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Chat {} not found", id)))?;
        let operator_id: Option<String> = row.try_get("operator_id").ok();

        let result = sqlx::query(
            "UPDATE chats
             SET status = ?, resolution = ?, resolution_comment = ?, scheduled_for = ?,
                 handling_time = ?, closed_at = ?
             WHERE id = ? AND status = 'active'",
        )
        .bind(outcome.final_status.to_string())
        .bind(outcome.resolution.to_string())
        .bind(&outcome.resolution_comment)
        .bind(&outcome.scheduled_for)
        .bind(outcome.handling_time)
        .bind(&outcome.closed_at)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict(format!("Chat {} is not active", id)));
        }

        match &operator_id {
            Some(operator) => {
                let (stats_outcome, handling) = match outcome.resolution {
                    Resolution::Resolved => {
                        (StatsOutcome::Resolved, Some(outcome.handling_time))
                    }
                    Resolution::Postponed => (StatsOutcome::Postponed, None),
                    _ => (StatsOutcome::Plain, None),
                };
                self.record_outcome_internal(
                    &mut *tx,
                    operator,
                    &outcome.stat_date,
                    stats_outcome,
                    handling,
                )
                .await?;
            }
            None => {
                tracing::warn!("Closed chat {} had no operator to credit", id);
            }
        }

        tx.commit().await?;

        self.get_chat_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Store(format!("Chat {} disappeared after update", id)))
    }

    async fn set_qc_status(
        &self,
        id: &str,
        qc_status: QcStatus,
        closed_at: Option<&str>,
    ) -> DomainResult<Chat> {
        let result = match closed_at {
            Some(ts) => {
                sqlx::query(
                    "UPDATE chats SET qc_status = ?, status = 'closed', closed_at = ?
                     WHERE id = ? AND status = 'qc'",
                )
                .bind(qc_status.to_string())
                .bind(ts)
                .bind(id)
                .execute(&self.pool)
                .await?
            }
            None => {
                sqlx::query("UPDATE chats SET qc_status = ? WHERE id = ? AND status = 'qc'")
                    .bind(qc_status.to_string())
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
        };

        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict(format!(
                "Chat {} is not awaiting quality control",
                id
            )));
        }

        self.get_chat_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Store(format!("Chat {} disappeared after update", id)))
    }

    async fn update_chat_fields(&self, id: &str, update: &ChatUpdate) -> DomainResult<Chat> {
        // closed_at follows the status: set when forcing closed, cleared when
        // forcing anything else.
        match (&update.status, &update.operator_id) {
            (Some(status), Some(operator)) => {
                let closed_at = closed_at_for(*status);
                sqlx::query(
                    "UPDATE chats SET status = ?, operator_id = ?, closed_at = ? WHERE id = ?",
                )
                .bind(status.to_string())
                .bind(operator)
                .bind(closed_at)
                .bind(id)
                .execute(&self.pool)
                .await?;
            }
            (Some(status), None) => {
                let closed_at = closed_at_for(*status);
                sqlx::query("UPDATE chats SET status = ?, closed_at = ? WHERE id = ?")
                    .bind(status.to_string())
                    .bind(closed_at)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
            }
            (None, Some(operator)) => {
                sqlx::query("UPDATE chats SET operator_id = ? WHERE id = ?")
                    .bind(operator)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
            }
            (None, None) => {
                return Err(DomainError::Validation(
                    "No updatable fields supplied".to_string(),
                ));
            }
        }

        self.get_chat_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Store(format!("Chat {} disappeared after update", id)))
    }
}

fn closed_at_for(status: ChatStatus) -> Option<String> {
    match status {
        ChatStatus::Closed => Some(chrono::Utc::now().to_rfc3339()),
        _ => None,
    }
}
