use actix_web::{delete, get, post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        friend::{
            model::{
                FriendRequestBody, FriendRequestByUsernameBody, FriendSummary,
                PendingRequests, SendRequestOutcome,
            },
            repository_pg::FriendRepositoryPg,
            schema::FriendRequestEntity,
            service::FriendService,
        },
        user::repository_pg::UserRepositoryPg,
    },
    utils::ValidatedJson,
};

pub type FriendSvc = FriendService<FriendRepositoryPg, UserRepositoryPg>;

#[post("/requests")]
pub async fn send_friend_request(
    friend_service: web::Data<FriendSvc>,
    body: web::Json<FriendRequestBody>,
    req: HttpRequest,
) -> Result<success::Success<FriendRequestEntity>, error::Error> {
    let requester_id = get_claims(&req)?.sub;
    let request = friend_service.send_request(requester_id, body.receiver_id).await?;

    Ok(success::Success::created(Some(request)).message("Friend request sent successfully"))
}

#[post("/requests/by-username")]
pub async fn send_friend_request_by_username(
    friend_service: web::Data<FriendSvc>,
    body: ValidatedJson<FriendRequestByUsernameBody>,
    req: HttpRequest,
) -> Result<success::Success<FriendRequestEntity>, error::Error> {
    let requester_id = get_claims(&req)?.sub;
    let outcome =
        friend_service.send_request_by_username(requester_id, &body.0.username).await?;

    match outcome {
        SendRequestOutcome::Sent(request) => Ok(success::Success::created(Some(request))
            .message("Friend request sent successfully")),
        SendRequestOutcome::UnknownUser => Ok(success::Success::ok(None)
            .message(format!("User with username '{}' not found.", body.0.username))),
    }
}

#[post("/requests/{request_id}/accept")]
pub async fn accept_friend_request(
    friend_service: web::Data<FriendSvc>,
    request_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<FriendRequestEntity>, error::Error> {
    let actor_id = get_claims(&req)?.sub;
    let request = friend_service.accept_request(*request_id, actor_id).await?;

    Ok(success::Success::ok(Some(request)).message("Friend request accepted"))
}

#[delete("/requests/{request_id}")]
pub async fn deny_friend_request(
    friend_service: web::Data<FriendSvc>,
    request_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let actor_id = get_claims(&req)?.sub;
    friend_service.deny_request(*request_id, actor_id).await?;
    Ok(success::Success::no_content())
}

#[get("/requests")]
pub async fn list_friend_requests(
    friend_service: web::Data<FriendSvc>,
    req: HttpRequest,
) -> Result<success::Success<PendingRequests>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let requests = friend_service.list_pending_requests(user_id).await?;

    Ok(success::Success::ok(Some(requests)).message("Friend requests retrieved successfully"))
}

#[get("/")]
pub async fn list_friends(
    friend_service: web::Data<FriendSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<FriendSummary>>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let friends = friend_service.list_friends(user_id).await?;

    Ok(success::Success::ok(Some(friends)).message("Friends retrieved successfully"))
}

#[delete("/{friend_id}")]
pub async fn unfriend(
    friend_service: web::Data<FriendSvc>,
    friend_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    friend_service.unfriend(user_id, *friend_id).await?;
    Ok(success::Success::no_content())
}
