use uuid::Uuid;

use crate::{
    api::error, modules::user::model::InsertUser, modules::user::schema::UserEntity,
};

/// User directory consumed by the friend and score services for existence
/// checks, identity resolution and leaderboard reads.
#[async_trait::async_trait]
pub trait UserRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<UserEntity>, error::SystemError>;
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError>;
    async fn find_by_email(&self, email: &str)
    -> Result<Option<UserEntity>, error::SystemError>;
    async fn find_many_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<UserEntity>, error::SystemError>;
    async fn create(&self, user: &InsertUser) -> Result<Uuid, error::SystemError>;
    async fn top_by_best_score(&self, limit: i64)
    -> Result<Vec<UserEntity>, error::SystemError>;
}
