use tracing::info;

use kartei::{bootstrap, Config, Database};

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
    if let Err(e) = kartei::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        kartei::logging::init_console_only(&config.logging.level);
    }

    info!("KARTEI - record management core");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to open database at {}: {e}", config.database.path);
            std::process::exit(1);
        }
    };

    match bootstrap::ensure_admin(&db, &config.bootstrap).await {
        Ok(Some(admin)) => info!("Bootstrap administrator {} created", admin.code),
        Ok(None) => info!("Bootstrap administrator already present"),
        Err(e) => {
            eprintln!("Bootstrap failed: {e}");
            std::process::exit(1);
        }
    }
}
