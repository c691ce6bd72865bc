use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operator rating for a single chat, written by a reviewer. One rating per
/// chat; a second submission replaces the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRating {
    pub id: String,
    pub chat_id: String,
    pub operator_id: String,
    pub rated_by: String,
    pub score: i64,
    pub comment: String,
    pub created_at: String,
}

impl ChatRating {
    pub fn new(
        chat_id: String,
        operator_id: String,
        rated_by: String,
        score: i64,
        comment: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chat_id,
            operator_id,
            rated_by,
            score,
            comment,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateChatRequest {
    pub chat_id: String,
    pub operator_id: String,
    pub rated_by: String,
    pub score: i64,
    #[serde(default)]
    pub comment: String,
}

/// Rating joined with rater/chat context for listings.
#[derive(Debug, Clone, Serialize)]
pub struct RatingView {
    #[serde(flatten)]
    pub rating: ChatRating,
    pub rater_name: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
}
