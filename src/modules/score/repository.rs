use uuid::Uuid;

use crate::api::error;
use crate::modules::score::schema::ScoreEntity;

#[async_trait::async_trait]
pub trait ScoreRepository {
    /// Appends a score row and raises the user's best score when exceeded,
    /// both inside one transaction. Fails with `NotFound` for an unknown
    /// user.
    async fn submit_score(
        &self,
        user_id: &Uuid,
        score: i64,
    ) -> Result<(), error::SystemError>;

    async fn find_for_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<ScoreEntity>, error::SystemError>;
}
