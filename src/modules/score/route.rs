use crate::modules::score::handle::*;
use actix_web::web::ServiceConfig;

pub fn public_api_configure(cfg: &mut ServiceConfig) {
    cfg.service(top_scores).service(top_players);
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(submit_score);
}
