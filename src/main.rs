// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use config::Config;
use dotenv::dotenv;
use serde_json::json;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        // Use configured log level or default
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting travel-catalog-api...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection
    let database = match config::init_database(&config).await {
        Ok(database) => database,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    HttpServer::new(move || {
        // Malformed JSON bodies get the same envelope as every other error
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let detail = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(json!({
                    "success": false,
                    "error": "Invalid request body",
                    "message": detail,
                })),
            )
            .into()
        });

        App::new()
            // Application state (database handle and config)
            .app_data(web::Data::new(database.clone()))
            .app_data(web::Data::new(config_clone.clone()))
            .app_data(json_config)
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::destinations_config)
            .configure(handlers::hotels_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
