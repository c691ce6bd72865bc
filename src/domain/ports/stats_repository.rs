use crate::domain::entities::{OperatorChatStats, StatsOutcome};
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait StatsRepository: Send + Sync {
    /// Atomic conditional upsert of one outcome into the (operator, date)
    /// row. handling_time feeds the running mean for resolved outcomes only.
    async fn record_outcome(
        &self,
        operator_id: &str,
        stat_date: &str,
        outcome: StatsOutcome,
        handling_time: Option<i64>,
    ) -> DomainResult<()>;

    async fn get_stats(
        &self,
        operator_id: &str,
        stat_date: &str,
    ) -> DomainResult<Option<OperatorChatStats>>;

    async fn list_stats_for_operator(
        &self,
        operator_id: &str,
    ) -> DomainResult<Vec<OperatorChatStats>>;

    async fn list_stats_for_date(&self, stat_date: &str) -> DomainResult<Vec<OperatorChatStats>>;
}
