//! In-memory repository implementations backing the service tests.

use std::sync::{Arc, LazyLock, Mutex};

use uuid::Uuid;

use crate::api::error;
use crate::modules::friend::model::PendingRequestView;
use crate::modules::friend::repository::FriendRepository;
use crate::modules::friend::schema::{FriendRequestEntity, FriendRequestStatus};
use crate::modules::score::repository::ScoreRepository;
use crate::modules::score::schema::ScoreEntity;
use crate::modules::user::model::InsertUser;
use crate::modules::user::repository::UserRepository;
use crate::modules::user::schema::UserEntity;

/// Points ENV at test values before anything touches the static.
pub fn init_test_env() {
    std::env::set_var("SECRET_KEY", "test-secret");
    std::env::set_var("DATABASE_URL", "postgres://localhost/unused");
    LazyLock::force(&crate::ENV);
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<UserEntity>>,
}

impl InMemoryUserRepository {
    pub fn seed_user(&self, username: &str, email: &str) -> UserEntity {
        let user = UserEntity {
            id: Uuid::now_v7(),
            username: username.to_string(),
            email: email.to_string(),
            hash_password: String::new(),
            best_score: 0,
            profile_picture: None,
            created_at: chrono::Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn best_score_of(&self, id: &Uuid) -> Option<i64> {
        self.users.lock().unwrap().iter().find(|u| u.id == *id).map(|u| u.best_score)
    }

    fn set_best_score(&self, id: &Uuid, score: i64) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == *id) {
            user.best_score = score;
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<UserEntity>, error::SystemError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserEntity>, error::SystemError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn find_many_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<UserEntity>, error::SystemError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn create(&self, user: &InsertUser) -> Result<Uuid, error::SystemError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == user.username) {
            return Err(error::SystemError::duplicate("Username already exists"));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(error::SystemError::duplicate("Email already exists"));
        }

        let id = Uuid::now_v7();
        users.push(UserEntity {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            hash_password: user.hash_password.clone(),
            best_score: 0,
            profile_picture: None,
            created_at: chrono::Utc::now(),
        });

        Ok(id)
    }

    async fn top_by_best_score(
        &self,
        limit: i64,
    ) -> Result<Vec<UserEntity>, error::SystemError> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by(|a, b| b.best_score.cmp(&a.best_score));
        users.truncate(limit as usize);
        Ok(users)
    }
}

pub struct InMemoryFriendRepository {
    edges: Mutex<Vec<FriendRequestEntity>>,
    users: Arc<InMemoryUserRepository>,
}

impl InMemoryFriendRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self { edges: Mutex::new(Vec::new()), users }
    }

    fn counterpart_view(
        &self,
        edge: &FriendRequestEntity,
        counterpart_id: &Uuid,
    ) -> PendingRequestView {
        let users = self.users.users.lock().unwrap();
        let counterpart = users
            .iter()
            .find(|u| u.id == *counterpart_id)
            .expect("counterpart user must exist");

        PendingRequestView {
            id: edge.id,
            requester_id: edge.requester_id,
            receiver_id: edge.receiver_id,
            counterpart_username: counterpart.username.clone(),
            counterpart_profile_picture: counterpart.profile_picture.clone(),
            created_at: edge.created_at,
        }
    }
}

#[async_trait::async_trait]
impl FriendRepository for InMemoryFriendRepository {
    async fn create_request(
        &self,
        requester_id: &Uuid,
        receiver_id: &Uuid,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        let edge = FriendRequestEntity {
            id: Uuid::now_v7(),
            requester_id: *requester_id,
            receiver_id: *receiver_id,
            status: FriendRequestStatus::Pending,
            created_at: chrono::Utc::now(),
        };
        self.edges.lock().unwrap().push(edge.clone());
        Ok(edge)
    }

    async fn find_request_between(
        &self,
        user_id_a: &Uuid,
        user_id_b: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .iter()
            .find(|e| {
                (e.requester_id == *user_id_a && e.receiver_id == *user_id_b)
                    || (e.requester_id == *user_id_b && e.receiver_id == *user_id_a)
            })
            .cloned())
    }

    async fn accept_request(
        &self,
        request_id: &Uuid,
        actor_id: &Uuid,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        let mut edges = self.edges.lock().unwrap();

        let edge = edges
            .iter_mut()
            .find(|e| e.id == *request_id)
            .ok_or_else(|| error::SystemError::not_found("Friend request not found"))?;

        if edge.receiver_id != *actor_id {
            return Err(error::SystemError::forbidden(
                "Not authorized to accept this request",
            ));
        }

        edge.status = FriendRequestStatus::Accepted;
        Ok(edge.clone())
    }

    async fn delete_received_request(
        &self,
        request_id: &Uuid,
        actor_id: &Uuid,
    ) -> Result<bool, error::SystemError> {
        let mut edges = self.edges.lock().unwrap();
        let before = edges.len();
        edges.retain(|e| !(e.id == *request_id && e.receiver_id == *actor_id));
        Ok(edges.len() < before)
    }

    async fn delete_friendship(
        &self,
        user_id_a: &Uuid,
        user_id_b: &Uuid,
    ) -> Result<bool, error::SystemError> {
        let mut edges = self.edges.lock().unwrap();
        let before = edges.len();
        edges.retain(|e| {
            !(e.status == FriendRequestStatus::Accepted
                && ((e.requester_id == *user_id_a && e.receiver_id == *user_id_b)
                    || (e.requester_id == *user_id_b && e.receiver_id == *user_id_a)))
        });
        Ok(edges.len() < before)
    }

    async fn find_friendship(
        &self,
        user_id_a: &Uuid,
        user_id_b: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .iter()
            .find(|e| {
                e.status == FriendRequestStatus::Accepted
                    && ((e.requester_id == *user_id_a && e.receiver_id == *user_id_b)
                        || (e.requester_id == *user_id_b && e.receiver_id == *user_id_a))
            })
            .cloned())
    }

    async fn find_accepted_edges(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|e| {
                e.status == FriendRequestStatus::Accepted
                    && (e.requester_id == *user_id || e.receiver_id == *user_id)
            })
            .cloned()
            .collect())
    }

    async fn find_pending_sent(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<PendingRequestView>, error::SystemError> {
        let edges: Vec<FriendRequestEntity> = self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|e| {
                e.status == FriendRequestStatus::Pending && e.requester_id == *user_id
            })
            .cloned()
            .collect();

        Ok(edges.iter().map(|e| self.counterpart_view(e, &e.receiver_id)).collect())
    }

    async fn find_pending_received(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<PendingRequestView>, error::SystemError> {
        let edges: Vec<FriendRequestEntity> = self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|e| {
                e.status == FriendRequestStatus::Pending && e.receiver_id == *user_id
            })
            .cloned()
            .collect();

        Ok(edges.iter().map(|e| self.counterpart_view(e, &e.requester_id)).collect())
    }
}

pub struct InMemoryScoreRepository {
    scores: Mutex<Vec<ScoreEntity>>,
    users: Arc<InMemoryUserRepository>,
}

impl InMemoryScoreRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self { scores: Mutex::new(Vec::new()), users }
    }
}

#[async_trait::async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn submit_score(
        &self,
        user_id: &Uuid,
        score: i64,
    ) -> Result<(), error::SystemError> {
        let best_score = self
            .users
            .best_score_of(user_id)
            .ok_or_else(|| error::SystemError::not_found("User not found"))?;

        self.scores.lock().unwrap().push(ScoreEntity {
            id: Uuid::now_v7(),
            user_id: *user_id,
            score,
            created_at: chrono::Utc::now(),
        });

        if score > best_score {
            self.users.set_best_score(user_id, score);
        }

        Ok(())
    }

    async fn find_for_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<ScoreEntity>, error::SystemError> {
        Ok(self
            .scores
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user_id == *user_id)
            .cloned()
            .collect())
    }
}
