use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::modules::friend::model::FriendSummary;
use crate::modules::score::model::ScoreView;
use crate::modules::user::schema::UserEntity;

fn contains_uppercase(password: &str) -> Result<(), ValidationError> {
    if password.chars().any(|c| c.is_uppercase()) {
        return Ok(());
    }
    Err(ValidationError::new("uppercase")
        .with_message("Password must contain at least one uppercase letter".into()))
}

#[derive(Deserialize, Validate)]
pub struct SignUpModel {
    #[validate(length(min = 3, message = "Username must be at least 3 characters long"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters long"),
        custom(function = contains_uppercase)
    )]
    pub password: String,
    #[validate(must_match(other = password, message = "Passwords do not match"))]
    pub verify_password: String,
}

#[derive(Deserialize, Validate)]
pub struct SignInModel {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

pub struct InsertUser {
    pub username: String,
    pub email: String,
    pub hash_password: String,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    pub id: uuid::Uuid,
}

#[derive(Serialize)]
pub struct SignInResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
    pub best_score: i64,
    pub profile_picture: Option<String>,
}

impl From<UserEntity> for UserResponse {
    fn from(entity: UserEntity) -> Self {
        UserResponse {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            best_score: entity.best_score,
            profile_picture: entity.profile_picture,
        }
    }
}

/// Full profile view: account data plus friends, score history and,
/// when viewed by someone else, whether the viewer is a friend.
#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
    pub best_score: i64,
    pub profile_picture: Option<String>,
    pub friends: Vec<FriendSummary>,
    pub is_friend: Option<bool>,
    pub scores: Vec<ScoreView>,
}

impl ProfileResponse {
    pub fn new(
        user: UserResponse,
        friends: Vec<FriendSummary>,
        is_friend: Option<bool>,
        scores: Vec<ScoreView>,
    ) -> Self {
        ProfileResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            best_score: user.best_score,
            profile_picture: user.profile_picture,
            friends,
            is_friend,
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignUpModel {
        SignUpModel {
            username: "player1".to_string(),
            email: "player1@example.com".to_string(),
            password: "Password1".to_string(),
            verify_password: "Password1".to_string(),
        }
    }

    #[test]
    fn signup_accepts_valid_input() {
        assert!(valid_signup().validate().is_ok());
    }

    #[test]
    fn signup_rejects_short_password() {
        let mut model = valid_signup();
        model.password = "Short1".to_string();
        model.verify_password = "Short1".to_string();
        assert!(model.validate().is_err());
    }

    #[test]
    fn signup_rejects_password_without_uppercase() {
        let mut model = valid_signup();
        model.password = "alllowercase1".to_string();
        model.verify_password = "alllowercase1".to_string();
        assert!(model.validate().is_err());
    }

    #[test]
    fn signup_rejects_mismatched_passwords() {
        let mut model = valid_signup();
        model.verify_password = "Password2".to_string();
        assert!(model.validate().is_err());
    }

    #[test]
    fn signup_rejects_invalid_email() {
        let mut model = valid_signup();
        model.email = "not-an-email".to_string();
        assert!(model.validate().is_err());
    }
}
