use actix_web::{get, post, web, HttpRequest};

use crate::middlewares::get_claims;
use crate::modules::score::model::{LeaderboardEntry, SubmitScoreBody};
use crate::modules::score::repository_pg::ScoreRepositoryPg;
use crate::modules::score::service::ScoreService;
use crate::modules::user::repository_pg::UserRepositoryPg;
use crate::utils::ValidatedJson;
use crate::{
    api::{error, success},
};

pub type ScoreSvc = ScoreService<ScoreRepositoryPg, UserRepositoryPg>;

#[post("/scores")]
pub async fn submit_score(
    score_service: web::Data<ScoreSvc>,
    body: ValidatedJson<SubmitScoreBody>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    score_service.submit_score(user_id, body.0.score).await?;

    Ok(success::Success::ok(None).message("Score recorded"))
}

#[get("/leaderboard/top-scores")]
pub async fn top_scores(
    score_service: web::Data<ScoreSvc>,
) -> Result<success::Success<Vec<LeaderboardEntry>>, error::Error> {
    let entries = score_service.top_scores().await?;
    Ok(success::Success::ok(Some(entries)))
}

#[get("/leaderboard/top-players")]
pub async fn top_players(
    score_service: web::Data<ScoreSvc>,
) -> Result<success::Success<Vec<LeaderboardEntry>>, error::Error> {
    let entries = score_service.top_players().await?;
    Ok(success::Success::ok(Some(entries)))
}
