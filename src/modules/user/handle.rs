use actix_web::{get, post, web, HttpRequest};
use uuid::Uuid;

use crate::middlewares::get_claims;
use crate::modules::friend::handle::FriendSvc;
use crate::modules::score::handle::ScoreSvc;
use crate::modules::user::model::{
    ProfileResponse, SignInModel, SignInResponse, SignUpModel, SignUpResponse,
};
use crate::modules::user::service::UserService;
use crate::utils::ValidatedJson;
use crate::{
    api::{error, success},
};

#[post("/signup")]
pub async fn sign_up(
    user_service: web::Data<UserService>,
    user_data: ValidatedJson<SignUpModel>,
) -> Result<success::Success<SignUpResponse>, error::Error> {
    let user_id = user_service.sign_up(user_data.0).await?;
    Ok(success::Success::created(Some(SignUpResponse { id: user_id }))
        .message("User created successfully"))
}

#[post("/signin")]
pub async fn sign_in(
    user_service: web::Data<UserService>,
    user_data: ValidatedJson<SignInModel>,
) -> Result<success::Success<SignInResponse>, error::Error> {
    let access_token = user_service.sign_in(user_data.0).await?;
    Ok(success::Success::ok(Some(SignInResponse { access_token }))
        .message("Signin successful"))
}

#[get("/profile")]
pub async fn get_profile(
    user_service: web::Data<UserService>,
    friend_service: web::Data<FriendSvc>,
    score_service: web::Data<ScoreSvc>,
    req: HttpRequest,
) -> Result<success::Success<ProfileResponse>, error::Error> {
    let id = get_claims(&req)?.sub;

    let user = user_service.get_by_id(id).await?;
    let friends = friend_service.list_friends(id).await?;
    let scores = score_service.history(id).await?;

    Ok(success::Success::ok(Some(ProfileResponse::new(user, friends, None, scores)))
        .message("Profile retrieved successfully"))
}

#[get("/{id:[0-9a-fA-F-]{36}}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    friend_service: web::Data<FriendSvc>,
    score_service: web::Data<ScoreSvc>,
    user_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<ProfileResponse>, error::Error> {
    let viewer_id = get_claims(&req)?.sub;
    let id = user_id.into_inner();

    let user = user_service.get_by_id(id).await?;
    let friends = friend_service.list_friends(id).await?;
    let scores = score_service.history(id).await?;
    let is_friend = friend_service.is_friend(viewer_id, id).await?;

    Ok(success::Success::ok(Some(ProfileResponse::new(
        user,
        friends,
        Some(is_friend),
        scores,
    )))
    .message("User retrieved successfully"))
}
