use actix_cors::Cors;
use actix_web::{
    self, App, HttpServer,
    middleware::{Logger, from_fn},
    web,
};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::connect_database,
    middlewares::authentication,
    modules::{
        friend::{repository_pg::FriendRepositoryPg, service::FriendService},
        score::{repository_pg::ScoreRepositoryPg, service::ScoreService},
        user::{repository_pg::UserRepositoryPg, service::UserService},
    },
};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    let user_repo = UserRepositoryPg::new(db_pool.clone());
    let friend_repo = FriendRepositoryPg::new(db_pool.clone());
    let score_repo = ScoreRepositoryPg::new(db_pool.clone());

    let user_service = UserService::with_dependencies(Arc::new(user_repo.clone()));
    let friend_service =
        FriendService::with_dependencies(Arc::new(friend_repo), Arc::new(user_repo.clone()));
    let score_service =
        ScoreService::with_dependencies(Arc::new(score_repo), Arc::new(user_repo));

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(ENV.frontend_url.as_str())
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(friend_service.clone()))
            .app_data(web::Data::new(score_service.clone()))
            .service(health_check)
            .service(
                web::scope("/api")
                    .configure(modules::user::route::public_api_configure)
                    .configure(modules::score::route::public_api_configure)
                    .service(
                        web::scope("")
                            .wrap(from_fn(authentication))
                            .configure(modules::user::route::configure)
                            .configure(modules::friend::route::configure)
                            .configure(modules::score::route::configure),
                    ),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
