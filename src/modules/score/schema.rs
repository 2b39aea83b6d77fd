use sqlx::prelude::FromRow;
use uuid::Uuid;

/// Append-only score log entry.
#[allow(unused)]
#[derive(Debug, Clone, FromRow)]
pub struct ScoreEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub score: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
