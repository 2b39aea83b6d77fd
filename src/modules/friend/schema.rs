use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(type_name = "friend_request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    Pending,
    Accepted,
}

/// Directed friendship edge. A row is created when a request is sent
/// (`pending`) and flips to `accepted` when the receiver approves it.
/// Denial and unfriending delete the row; no history is kept.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FriendRequestEntity {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub receiver_id: Uuid,
    pub status: FriendRequestStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
