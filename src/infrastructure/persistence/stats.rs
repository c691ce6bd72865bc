use crate::domain::entities::{OperatorChatStats, StatsOutcome};
use crate::domain::errors::DomainResult;
use crate::domain::ports::stats_repository::StatsRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

// Internal helpers
impl Database {
    /// One-statement conditional upsert. Every right-hand side of the DO
    /// UPDATE evaluates against the pre-update row, so the running mean is
    /// weighted by the pre-increment total and concurrent increments from
    /// different chats cannot lose updates.
    pub(crate) async fn record_outcome_internal<'e, E>(
        &self,
        executor: E,
        operator_id: &str,
        stat_date: &str,
        outcome: StatsOutcome,
        handling_time: Option<i64>,
    ) -> DomainResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Any>,
    {
        let resolved = matches!(outcome, StatsOutcome::Resolved) as i64;
        let postponed = matches!(outcome, StatsOutcome::Postponed) as i64;
        let escalated = matches!(outcome, StatsOutcome::Escalated) as i64;
        let handling_seed = if resolved == 1 {
            handling_time.unwrap_or(0) as f64
        } else {
            0.0
        };

        sqlx::query(
            "INSERT INTO operator_chat_stats
                 (operator_id, stat_date, total_chats, resolved, postponed, escalated, avg_handling_time)
             VALUES (?, ?, 1, ?, ?, ?, ?)
             ON CONFLICT(operator_id, stat_date) DO UPDATE SET
                 avg_handling_time = CASE WHEN excluded.resolved > 0
                     THEN (operator_chat_stats.avg_handling_time * operator_chat_stats.total_chats
                           + excluded.avg_handling_time)
                          / (operator_chat_stats.total_chats + 1)
                     ELSE operator_chat_stats.avg_handling_time END,
                 total_chats = operator_chat_stats.total_chats + 1,
                 resolved = operator_chat_stats.resolved + excluded.resolved,
                 postponed = operator_chat_stats.postponed + excluded.postponed,
                 escalated = operator_chat_stats.escalated + excluded.escalated",
        )
        .bind(operator_id)
        .bind(stat_date)
        .bind(resolved)
        .bind(postponed)
        .bind(escalated)
        .bind(handling_seed)
        .execute(executor)
        .await?;

        Ok(())
    }
}

fn stats_from_row(row: &sqlx::any::AnyRow) -> DomainResult<OperatorChatStats> {
    Ok(OperatorChatStats {
        operator_id: row.try_get("operator_id")?,
        stat_date: row.try_get("stat_date")?,
        total_chats: row.try_get("total_chats")?,
        resolved: row.try_get("resolved")?,
        postponed: row.try_get("postponed")?,
        escalated: row.try_get("escalated")?,
        avg_handling_time: row.try_get("avg_handling_time")?,
    })
}

const STATS_COLUMNS: &str =
    "operator_id, stat_date, total_chats, resolved, postponed, escalated, avg_handling_time";

#[async_trait]
impl StatsRepository for Database {
    async fn record_outcome(
        &self,
        operator_id: &str,
        stat_date: &str,
        outcome: StatsOutcome,
        handling_time: Option<i64>,
    ) -> DomainResult<()> {
        self.record_outcome_internal(&self.pool, operator_id, stat_date, outcome, handling_time)
            .await
    }

    async fn get_stats(
        &self,
        operator_id: &str,
        stat_date: &str,
    ) -> DomainResult<Option<OperatorChatStats>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM operator_chat_stats WHERE operator_id = ? AND stat_date = ?",
            STATS_COLUMNS
        ))
        .bind(operator_id)
        .bind(stat_date)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(stats_from_row).transpose()
    }

    async fn list_stats_for_operator(
        &self,
        operator_id: &str,
    ) -> DomainResult<Vec<OperatorChatStats>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM operator_chat_stats WHERE operator_id = ? ORDER BY stat_date DESC",
            STATS_COLUMNS
        ))
        .bind(operator_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(stats_from_row).collect()
    }

    async fn list_stats_for_date(&self, stat_date: &str) -> DomainResult<Vec<OperatorChatStats>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM operator_chat_stats WHERE stat_date = ? ORDER BY operator_id",
            STATS_COLUMNS
        ))
        .bind(stat_date)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(stats_from_row).collect()
    }
}
