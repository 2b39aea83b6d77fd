use std::sync::Arc;

use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        friend::{
            model::{FriendSummary, PendingRequests, SendRequestOutcome},
            repository::FriendRepository,
            schema::{FriendRequestEntity, FriendRequestStatus},
        },
        user::repository::UserRepository,
    },
};

#[derive(Clone)]
pub struct FriendService<R, U>
where
    R: FriendRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    friend_repo: Arc<R>,
    user_repo: Arc<U>,
}

impl<R, U> FriendService<R, U>
where
    R: FriendRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    pub fn with_dependencies(friend_repo: Arc<R>, user_repo: Arc<U>) -> Self {
        FriendService { friend_repo, user_repo }
    }

    /// Creates a pending edge from requester to receiver. A single edge is
    /// allowed per pair of users, no matter which side initiated it.
    pub async fn send_request(
        &self,
        requester_id: Uuid,
        receiver_id: Uuid,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        if requester_id == receiver_id {
            return Err(error::SystemError::bad_request(
                "Cannot send a friend request to yourself",
            ));
        }

        if self.user_repo.find_by_id(&receiver_id).await?.is_none() {
            return Err(error::SystemError::not_found("User not found"));
        }

        if let Some(existing) =
            self.friend_repo.find_request_between(&requester_id, &receiver_id).await?
        {
            return Err(match existing.status {
                FriendRequestStatus::Pending => {
                    error::SystemError::duplicate("Friend request already sent")
                }
                FriendRequestStatus::Accepted => {
                    error::SystemError::duplicate("Users are already friends")
                }
            });
        }

        let request = self.friend_repo.create_request(&requester_id, &receiver_id).await?;

        Ok(request)
    }

    /// By-username variant. An unknown username is reported as a soft
    /// outcome instead of an error, everything else delegates to
    /// [`Self::send_request`].
    pub async fn send_request_by_username(
        &self,
        requester_id: Uuid,
        username: &str,
    ) -> Result<SendRequestOutcome, error::SystemError> {
        let receiver = match self.user_repo.find_by_username(username).await? {
            Some(user) => user,
            None => return Ok(SendRequestOutcome::UnknownUser),
        };

        let request = self.send_request(requester_id, receiver.id).await?;
        Ok(SendRequestOutcome::Sent(request))
    }

    /// Only the receiver may accept; the check-and-flip is one atomic unit
    /// in the store.
    pub async fn accept_request(
        &self,
        request_id: Uuid,
        actor_id: Uuid,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        self.friend_repo.accept_request(&request_id, &actor_id).await
    }

    /// Deletes a received request. The lookup is filtered by receiver, so
    /// denying an edge that exists but belongs to someone else reports
    /// `NotFound` rather than `Forbidden`.
    pub async fn deny_request(
        &self,
        request_id: Uuid,
        actor_id: Uuid,
    ) -> Result<(), error::SystemError> {
        let deleted =
            self.friend_repo.delete_received_request(&request_id, &actor_id).await?;

        if !deleted {
            return Err(error::SystemError::not_found("Friend request not found"));
        }

        Ok(())
    }

    /// Removes the accepted edge between the two users, whichever side
    /// initiated it.
    pub async fn unfriend(
        &self,
        actor_id: Uuid,
        other_id: Uuid,
    ) -> Result<(), error::SystemError> {
        let deleted = self.friend_repo.delete_friendship(&actor_id, &other_id).await?;

        if !deleted {
            return Err(error::SystemError::not_found("Friendship not found"));
        }

        Ok(())
    }

    pub async fn list_pending_requests(
        &self,
        user_id: Uuid,
    ) -> Result<PendingRequests, error::SystemError> {
        let (sent, received) = tokio::try_join!(
            self.friend_repo.find_pending_sent(&user_id),
            self.friend_repo.find_pending_received(&user_id),
        )?;

        Ok(PendingRequests { sent, received })
    }

    /// Accepted edges touching the user, mapped to the other party and
    /// batch-resolved through the user directory. Order follows the
    /// directory and is not guaranteed.
    pub async fn list_friends(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FriendSummary>, error::SystemError> {
        let edges = self.friend_repo.find_accepted_edges(&user_id).await?;

        let friend_ids: Vec<Uuid> = edges
            .iter()
            .map(|edge| {
                if edge.requester_id == user_id { edge.receiver_id } else { edge.requester_id }
            })
            .collect();

        if friend_ids.is_empty() {
            return Ok(Vec::new());
        }

        let friends = self.user_repo.find_many_by_ids(&friend_ids).await?;

        Ok(friends.into_iter().map(FriendSummary::from).collect())
    }

    pub async fn is_friend(
        &self,
        user_id: Uuid,
        other_id: Uuid,
    ) -> Result<bool, error::SystemError> {
        let friendship = self.friend_repo.find_friendship(&user_id, &other_id).await?;
        Ok(friendship.is_some())
    }
}
