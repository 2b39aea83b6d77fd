use crate::modules::friend::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/friends")
            .service(send_friend_request)
            .service(send_friend_request_by_username)
            .service(accept_friend_request)
            .service(deny_friend_request)
            .service(list_friend_requests)
            .service(list_friends)
            .service(unfriend),
    );
}
