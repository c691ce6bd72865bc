use serde::{Deserialize, Serialize};

/// A support client, identified by phone number. Upserted on every new chat
/// from the same phone; never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub phone: String,
    pub name: String,
    pub session_id: Option<String>,
    pub last_interaction: String,
    pub created_at: String,
}
