use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::modules::friend::schema::FriendRequestEntity;
use crate::modules::user::schema::UserEntity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FriendSummary {
    pub id: Uuid,
    pub username: String,
    pub profile_picture: Option<String>,
    pub best_score: i64,
}

impl From<UserEntity> for FriendSummary {
    fn from(user: UserEntity) -> Self {
        FriendSummary {
            id: user.id,
            username: user.username,
            profile_picture: user.profile_picture,
            best_score: user.best_score,
        }
    }
}

/// A pending edge joined with the counterpart user, so clients render
/// request lists without per-row lookups.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PendingRequestView {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub receiver_id: Uuid,
    pub counterpart_username: String,
    pub counterpart_profile_picture: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct PendingRequests {
    pub sent: Vec<PendingRequestView>,
    pub received: Vec<PendingRequestView>,
}

/// Result of a by-username request. An unknown username is informational
/// for the client, not a failure.
pub enum SendRequestOutcome {
    Sent(FriendRequestEntity),
    UnknownUser,
}

#[derive(Deserialize)]
pub struct FriendRequestBody {
    pub receiver_id: Uuid,
}

#[derive(Deserialize, Validate)]
pub struct FriendRequestByUsernameBody {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
}
