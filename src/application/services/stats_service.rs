use std::sync::Arc;

use crate::domain::entities::{OperatorChatStats, StatsOutcome};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::StatsRepository;

/// Read/record façade over the per-(operator, day) counters. The lifecycle
/// transitions feed the same upsert from inside their transactions; this
/// service covers standalone recording and the reporting reads.
#[derive(Clone)]
pub struct StatsService {
    stats_repo: Arc<dyn StatsRepository>,
}

impl StatsService {
    pub fn new(stats_repo: Arc<dyn StatsRepository>) -> Self {
        Self { stats_repo }
    }

    /// Record one outcome. A conflicting concurrent upsert is retried once
    /// before surfacing.
    pub async fn record(
        &self,
        operator_id: &str,
        stat_date: &str,
        outcome: StatsOutcome,
        handling_time: Option<i64>,
    ) -> DomainResult<()> {
        match self
            .stats_repo
            .record_outcome(operator_id, stat_date, outcome, handling_time)
            .await
        {
            Err(DomainError::Conflict(msg)) => {
                tracing::info!(
                    "Conflict recording stats for operator {}, retrying once: {}",
                    operator_id,
                    msg
                );
                self.stats_repo
                    .record_outcome(operator_id, stat_date, outcome, handling_time)
                    .await
            }
            other => other,
        }
    }

    pub async fn get(
        &self,
        operator_id: &str,
        stat_date: &str,
    ) -> DomainResult<Option<OperatorChatStats>> {
        self.stats_repo.get_stats(operator_id, stat_date).await
    }

    pub async fn for_operator(&self, operator_id: &str) -> DomainResult<Vec<OperatorChatStats>> {
        self.stats_repo.list_stats_for_operator(operator_id).await
    }

    pub async fn for_date(&self, stat_date: &str) -> DomainResult<Vec<OperatorChatStats>> {
        self.stats_repo.list_stats_for_date(stat_date).await
    }
}
