use tracing::info;

use eduboard::web::{AppState, WebServer};
use eduboard::{Config, Database};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = eduboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        eduboard::logging::init_console_only(&config.logging.level);
    }

    info!("eduboard - course community bulletin board");

    // Open the database
    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {e}");
            std::process::exit(1);
        }
    };

    // Wire stores, services, and the access policy
    let state = AppState::assemble(config.auth.clone(), db);

    let server = WebServer::new(&config.server, state);
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {e}");
        std::process::exit(1);
    }
}
