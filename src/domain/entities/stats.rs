use serde::{Deserialize, Serialize};

/// Which counter a terminal transition feeds, alongside the unconditional
/// total_chats increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsOutcome {
    Resolved,
    Postponed,
    Escalated,
    Plain,
}

/// Per-(operator, day) rolling counters. avg_handling_time is a running mean
/// weighted by the row's total_chats before the increment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorChatStats {
    pub operator_id: String,
    pub stat_date: String,
    pub total_chats: i64,
    pub resolved: i64,
    pub postponed: i64,
    pub escalated: i64,
    pub avg_handling_time: f64,
}
