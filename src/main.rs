mod api;
mod config;
mod database;
mod middleware;
mod models;
mod repositories;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::repositories::{InMemoryUserRepository, MongoUserRepository, UserRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("❌ {}", e);
        e
    })?;

    log::info!("🚀 Starting User CRUD Service...");

    let repo: Arc<dyn UserRepository> = match config.storage {
        StorageBackend::MongoDB => {
            log::info!("📊 Database: {}", config.database_url);
            let db = database::MongoDB::new(&config.database_url)
                .await
                .map_err(|e| {
                    log::error!("❌ Failed to connect to MongoDB: {}", e);
                    std::io::Error::other(e.to_string())
                })?;
            log::info!("✅ MongoDB connected successfully");
            Arc::new(MongoUserRepository::new(db))
        }
        StorageBackend::Memory => {
            log::warn!("⚠️  Using in-memory storage, data is lost on restart");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    let repo_data = web::Data::from(repo);

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", config.host, config.port);

    let bind_addr = (config.host.clone(), config.port);
    let cors_origins = config.cors_allowed_origins;

    // Start HTTP server
    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .app_data(repo_data.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
