use uuid::Uuid;

use crate::api::error;
use crate::modules::friend::model::PendingRequestView;
use crate::modules::friend::schema::FriendRequestEntity;

/// Storage for the directed friendship edges. Relationships are symmetric
/// once accepted, so every pair lookup matches either column order.
#[async_trait::async_trait]
pub trait FriendRepository {
    /// Inserts a new pending edge from requester to receiver.
    async fn create_request(
        &self,
        requester_id: &Uuid,
        receiver_id: &Uuid,
    ) -> Result<FriendRequestEntity, error::SystemError>;

    /// Any edge between the two users, in either direction, any status.
    async fn find_request_between(
        &self,
        user_id_a: &Uuid,
        user_id_b: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError>;

    /// Flips the edge to accepted. The lookup, the receiver check and the
    /// mutation happen as one atomic unit against the store; fails with
    /// `NotFound` when the edge is absent and `Forbidden` when the actor
    /// is not the receiver.
    async fn accept_request(
        &self,
        request_id: &Uuid,
        actor_id: &Uuid,
    ) -> Result<FriendRequestEntity, error::SystemError>;

    /// Deletes the edge only when the actor is its receiver; the combined
    /// filter means callers cannot tell a missing row from someone else's
    /// row. Returns whether a row was removed.
    async fn delete_received_request(
        &self,
        request_id: &Uuid,
        actor_id: &Uuid,
    ) -> Result<bool, error::SystemError>;

    /// Deletes the accepted edge between the two users, in either
    /// direction. Returns whether a row was removed.
    async fn delete_friendship(
        &self,
        user_id_a: &Uuid,
        user_id_b: &Uuid,
    ) -> Result<bool, error::SystemError>;

    /// The accepted edge between the two users, in either direction.
    async fn find_friendship(
        &self,
        user_id_a: &Uuid,
        user_id_b: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError>;

    /// All accepted edges touching the user, from either side.
    async fn find_accepted_edges(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError>;

    async fn find_pending_sent(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<PendingRequestView>, error::SystemError>;

    async fn find_pending_received(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<PendingRequestView>, error::SystemError>;
}
