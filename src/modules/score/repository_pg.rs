use uuid::Uuid;

use crate::{
    api::error,
    modules::score::{repository::ScoreRepository, schema::ScoreEntity},
};

#[derive(Clone)]
pub struct ScoreRepositoryPg {
    pool: sqlx::PgPool,
}

impl ScoreRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ScoreRepository for ScoreRepositoryPg {
    async fn submit_score(
        &self,
        user_id: &Uuid,
        score: i64,
    ) -> Result<(), error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let best_score: i64 = sqlx::query_scalar(
            "SELECT best_score FROM users WHERE id = $1 FOR UPDATE",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| error::SystemError::not_found("User not found"))?;

        sqlx::query("INSERT INTO scores (id, user_id, score) VALUES ($1, $2, $3)")
            .bind(Uuid::now_v7())
            .bind(user_id)
            .bind(score)
            .execute(&mut *tx)
            .await?;

        if score > best_score {
            sqlx::query("UPDATE users SET best_score = $1 WHERE id = $2")
                .bind(score)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn find_for_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<ScoreEntity>, error::SystemError> {
        let scores = sqlx::query_as::<_, ScoreEntity>(
            "SELECT * FROM scores WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(scores)
    }
}
