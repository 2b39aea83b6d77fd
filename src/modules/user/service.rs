use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::user::model::{InsertUser, SignInModel, SignUpModel, UserResponse};
use crate::modules::user::repository::UserRepository;
use crate::utils::{hash_password, verify_password, Claims};
use crate::ENV;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo }
    }

    pub async fn sign_up(&self, user: SignUpModel) -> Result<Uuid, error::SystemError> {
        let hash_password = hash_password(&user.password)?;

        let new_user =
            InsertUser { username: user.username, email: user.email, hash_password };

        // Duplicate username/email surface as unique-constraint conflicts.
        let user_id = self.repo.create(&new_user).await?;
        Ok(user_id)
    }

    pub async fn sign_in(&self, credentials: SignInModel) -> Result<String, error::SystemError> {
        let user_entity = self
            .repo
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| error::SystemError::unauthorized("Invalid credentials"))?;

        let valid = verify_password(&user_entity.hash_password, &credentials.password)?;
        if !valid {
            return Err(error::SystemError::unauthorized("Invalid credentials"));
        }

        let access_token =
            Claims::new(&user_entity.id, &user_entity.username, ENV.access_token_expiration)
                .encode(ENV.jwt_secret.as_ref())?;

        Ok(access_token)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponse, error::SystemError> {
        let user = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("User not found"))?;

        Ok(UserResponse::from(user))
    }
}
