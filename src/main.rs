#[macro_use]
extern crate diesel;

mod comment;
mod config;
mod database;
mod error;
mod models;
mod protocol;
mod schema;
mod status;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;

use crate::{config::Config, database::Database};

fn app_config(cfg: &mut web::ServiceConfig) {
    status::config(cfg);
    cfg.service(
        web::scope("/api/comments")
            .app_data(comment::json_config())
            .configure(comment::config),
    );
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.default_log_level()),
    )
    .init();

    let db = Database::new(config.database_url.clone());
    db.initialize_schema()?;
    log::info!("Using comment store at {}", db.url());

    let (host, port) = config.bind_addr();
    log::info!("Listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .data(db.clone())
            .configure(app_config)
    })
    .bind((host, port))
    .with_context(|| format!("Failed to bind {}:{}", host, port))?
    .run()
    .await
    .context("Server error")
}
