use sqlx::prelude::FromRow;
use uuid::Uuid;

#[allow(unused)]
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub hash_password: String,
    pub best_score: i64,
    pub profile_picture: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
