use std::sync::Arc;

use uuid::Uuid;

use crate::api::error;
use crate::modules::score::model::{LeaderboardEntry, ScoreView};
use crate::modules::score::repository::ScoreRepository;
use crate::modules::user::repository::UserRepository;

const TOP_SCORES_LIMIT: i64 = 10;
const TOP_PLAYERS_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct ScoreService<S, U>
where
    S: ScoreRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    score_repo: Arc<S>,
    user_repo: Arc<U>,
}

impl<S, U> ScoreService<S, U>
where
    S: ScoreRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    pub fn with_dependencies(score_repo: Arc<S>, user_repo: Arc<U>) -> Self {
        ScoreService { score_repo, user_repo }
    }

    pub async fn submit_score(
        &self,
        user_id: Uuid,
        score: i64,
    ) -> Result<(), error::SystemError> {
        self.score_repo.submit_score(&user_id, score).await
    }

    pub async fn history(&self, user_id: Uuid) -> Result<Vec<ScoreView>, error::SystemError> {
        let scores = self.score_repo.find_for_user(&user_id).await?;
        Ok(scores.into_iter().map(ScoreView::from).collect())
    }

    pub async fn top_scores(&self) -> Result<Vec<LeaderboardEntry>, error::SystemError> {
        let users = self.user_repo.top_by_best_score(TOP_SCORES_LIMIT).await?;
        Ok(users.into_iter().map(LeaderboardEntry::from).collect())
    }

    pub async fn top_players(&self) -> Result<Vec<LeaderboardEntry>, error::SystemError> {
        let users = self.user_repo.top_by_best_score(TOP_PLAYERS_LIMIT).await?;
        Ok(users.into_iter().map(LeaderboardEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::ScoreService;
    use crate::api::error::SystemError;
    use crate::test::{InMemoryScoreRepository, InMemoryUserRepository};

    type Svc = ScoreService<InMemoryScoreRepository, InMemoryUserRepository>;

    fn service() -> (Svc, Arc<InMemoryUserRepository>) {
        let users = Arc::new(InMemoryUserRepository::default());
        let scores = Arc::new(InMemoryScoreRepository::new(users.clone()));
        (ScoreService::with_dependencies(scores, users.clone()), users)
    }

    #[tokio::test]
    async fn submit_score_appends_and_bumps_best_score() {
        let (svc, users) = service();
        let alice = users.seed_user("alice", "alice@example.com");

        svc.submit_score(alice.id, 120).await.unwrap();
        assert_eq!(users.best_score_of(&alice.id), Some(120));

        // a lower score is logged but does not lower the best
        svc.submit_score(alice.id, 80).await.unwrap();
        assert_eq!(users.best_score_of(&alice.id), Some(120));

        let history = svc.history(alice.id).await.unwrap();
        assert_eq!(history.len(), 2);
    }

    #[tokio::test]
    async fn submit_score_for_unknown_user_is_not_found() {
        let (svc, _users) = service();
        let err = svc.submit_score(uuid::Uuid::now_v7(), 10).await.unwrap_err();
        assert!(matches!(err, SystemError::NotFound(_)));
    }

    #[tokio::test]
    async fn leaderboards_order_by_best_score() {
        let (svc, users) = service();
        for i in 0..12 {
            let user = users.seed_user(&format!("player{i}"), &format!("p{i}@example.com"));
            svc.submit_score(user.id, i * 10).await.unwrap();
        }

        let top = svc.top_scores().await.unwrap();
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].best_score, 110);
        assert!(top.windows(2).all(|w| w[0].best_score >= w[1].best_score));

        let players = svc.top_players().await.unwrap();
        assert_eq!(players.len(), 5);
    }
}
