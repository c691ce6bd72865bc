use serde::{Deserialize, Serialize};

/// A work-status session for one staff member. Switching status closes the
/// open session and opens a new one; at most one open session per staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkSession {
    pub id: String,
    pub staff_id: String,
    pub status: String,
    pub session_date: String,
    pub started_at: String,
    pub ended_at: Option<String>,
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwitchStatusRequest {
    pub staff_id: String,
    pub status: String,
}

/// Aggregated minutes per (date, status) over closed sessions.
#[derive(Debug, Clone, Serialize)]
pub struct WorkTimeEntry {
    pub session_date: String,
    pub status: String,
    pub total_minutes: i64,
}
