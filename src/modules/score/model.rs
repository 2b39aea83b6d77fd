use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::score::schema::ScoreEntity;
use crate::modules::user::schema::UserEntity;

#[derive(Deserialize, Validate)]
pub struct SubmitScoreBody {
    #[validate(range(min = 0, message = "Score cannot be negative"))]
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ScoreEntity> for ScoreView {
    fn from(entity: ScoreEntity) -> Self {
        ScoreView { score: entity.score, created_at: entity.created_at }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub username: String,
    pub best_score: i64,
    pub profile_picture: Option<String>,
}

impl From<UserEntity> for LeaderboardEntry {
    fn from(user: UserEntity) -> Self {
        LeaderboardEntry {
            id: user.id,
            username: user.username,
            best_score: user.best_score,
            profile_picture: user.profile_picture,
        }
    }
}
