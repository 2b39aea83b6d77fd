use uuid::Uuid;

use crate::{
    api::error,
    modules::friend::{
        model::PendingRequestView,
        repository::FriendRepository,
        schema::FriendRequestEntity,
    },
};

#[derive(Clone)]
pub struct FriendRepositoryPg {
    pool: sqlx::PgPool,
}

impl FriendRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FriendRepository for FriendRepositoryPg {
    async fn create_request(
        &self,
        requester_id: &Uuid,
        receiver_id: &Uuid,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        let request = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            INSERT INTO friend_requests (id, requester_id, receiver_id, status)
            VALUES ($1, $2, $3, 'pending')
            RETURNING *
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(requester_id)
        .bind(receiver_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    async fn find_request_between(
        &self,
        user_id_a: &Uuid,
        user_id_b: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        let request = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            SELECT *
            FROM friend_requests
            WHERE
                (requester_id = $1 AND receiver_id = $2)
            OR (requester_id = $2 AND receiver_id = $1)
            "#,
        )
        .bind(user_id_a)
        .bind(user_id_b)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    async fn accept_request(
        &self,
        request_id: &Uuid,
        actor_id: &Uuid,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let request = sqlx::query_as::<_, FriendRequestEntity>(
            "SELECT * FROM friend_requests WHERE id = $1 FOR UPDATE",
        )
        .bind(request_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| error::SystemError::not_found("Friend request not found"))?;

        if request.receiver_id != *actor_id {
            tx.rollback().await?;
            return Err(error::SystemError::forbidden(
                "Not authorized to accept this request",
            ));
        }

        let accepted = sqlx::query_as::<_, FriendRequestEntity>(
            "UPDATE friend_requests SET status = 'accepted' WHERE id = $1 RETURNING *",
        )
        .bind(request_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(accepted)
    }

    async fn delete_received_request(
        &self,
        request_id: &Uuid,
        actor_id: &Uuid,
    ) -> Result<bool, error::SystemError> {
        let result =
            sqlx::query("DELETE FROM friend_requests WHERE id = $1 AND receiver_id = $2")
                .bind(request_id)
                .bind(actor_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_friendship(
        &self,
        user_id_a: &Uuid,
        user_id_b: &Uuid,
    ) -> Result<bool, error::SystemError> {
        let result = sqlx::query(
            r#"
            DELETE FROM friend_requests
            WHERE status = 'accepted'
            AND (
                (requester_id = $1 AND receiver_id = $2)
                OR (requester_id = $2 AND receiver_id = $1)
            )
            "#,
        )
        .bind(user_id_a)
        .bind(user_id_b)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_friendship(
        &self,
        user_id_a: &Uuid,
        user_id_b: &Uuid,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        let friendship = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            SELECT *
            FROM friend_requests
            WHERE status = 'accepted'
            AND (
                (requester_id = $1 AND receiver_id = $2)
                OR (requester_id = $2 AND receiver_id = $1)
            )
            "#,
        )
        .bind(user_id_a)
        .bind(user_id_b)
        .fetch_optional(&self.pool)
        .await?;

        Ok(friendship)
    }

    async fn find_accepted_edges(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError> {
        let edges = sqlx::query_as::<_, FriendRequestEntity>(
            r#"
            SELECT *
            FROM friend_requests
            WHERE status = 'accepted'
            AND (requester_id = $1 OR receiver_id = $1)
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(edges)
    }

    async fn find_pending_sent(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<PendingRequestView>, error::SystemError> {
        let rows = sqlx::query_as::<_, PendingRequestView>(
            r#"
            SELECT
                fr.id,
                fr.requester_id,
                fr.receiver_id,
                u.username AS counterpart_username,
                u.profile_picture AS counterpart_profile_picture,
                fr.created_at
            FROM friend_requests fr
            JOIN users u
                ON fr.receiver_id = u.id
            WHERE fr.requester_id = $1 AND fr.status = 'pending'
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_pending_received(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<PendingRequestView>, error::SystemError> {
        let rows = sqlx::query_as::<_, PendingRequestView>(
            r#"
            SELECT
                fr.id,
                fr.requester_id,
                fr.receiver_id,
                u.username AS counterpart_username,
                u.profile_picture AS counterpart_profile_picture,
                fr.created_at
            FROM friend_requests fr
            JOIN users u
                ON fr.requester_id = u.id
            WHERE fr.receiver_id = $1 AND fr.status = 'pending'
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
