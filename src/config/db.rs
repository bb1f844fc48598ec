// src/config/db.rs
// DOCUMENTATION: MongoDB client initialization
// PURPOSE: Setup and verify the database handle shared by all handlers

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::config::Config;

/// Initialize the MongoDB client and select the catalog database
/// DOCUMENTATION: Called once during application startup in main.rs
/// Returns the Database handle used for all collection access
pub async fn init_database(config: &Config) -> Result<Database, mongodb::error::Error> {
    log::info!("Connecting to MongoDB: {}", config.mongodb_uri);

    let mut options = ClientOptions::parse(&config.mongodb_uri).await?;
    options.app_name = Some("travel-catalog-api".to_string());
    options.max_pool_size = Some(config.db_max_pool_size);
    options.server_selection_timeout = Some(Duration::from_secs(config.db_connection_timeout));
    options.connect_timeout = Some(Duration::from_secs(config.db_connection_timeout));

    let client = Client::with_options(options)?;
    let database = client.database(&config.database_name);

    // Verify connection works before serving traffic
    database.run_command(doc! { "ping": 1 }).await?;

    log::info!(
        "MongoDB connection established (database: {})",
        config.database_name
    );
    Ok(database)
}
