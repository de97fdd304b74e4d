use std::io::Error;
use std::sync::Arc;

use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;
use sqlx::postgres::PgPoolOptions;
use tokio::main;

use crate::{
    application::usecases::{
        create_user::{CreateUserConfig, CreateUserUseCase},
        delete_user::DeleteUserUseCase,
        list_users_by_birth_date::ListUsersByBirthDateUseCase,
        update_user::UpdateUserUseCase,
    },
    config::Config,
    infrastructure::repositories::postgres::PostgresUserRepository,
    presentation::http::endpoints::{
        health::HealthEndpoints, root::ApiState, users::UserEndpoints,
    },
};

mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().init();

    let config = Config::try_parse().map_err(Error::other)?;

    let pool = PgPoolOptions::new()
        .connect(&config.database_url)
        .await
        .map_err(Error::other)?;
    sqlx::migrate!().run(&pool).await.map_err(Error::other)?;
    tracing::info!("database migrations applied");

    let repository = PostgresUserRepository::new(pool);
    let state = Arc::new(ApiState {
        create_user_usecase: Arc::new(CreateUserUseCase::new(
            repository.clone(),
            CreateUserConfig {
                minimum_adult_age: config.minimum_adult_age,
            },
        )),
        update_user_usecase: Arc::new(UpdateUserUseCase::new(repository.clone())),
        list_users_usecase: Arc::new(ListUsersByBirthDateUseCase::new(repository.clone())),
        delete_user_usecase: Arc::new(DeleteUserUseCase::new(repository)),
    });

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);

    tracing::info!("starting server at {server_url}");

    let api_service = OpenApiService::new(
        (HealthEndpoints, UserEndpoints::new(state)),
        "Users API",
        "0.1.0",
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let app = Route::new().nest("/api", api_service).nest("/", ui);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}
