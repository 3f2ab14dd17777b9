//! Shared helpers for KARTEI integration tests.

use std::time::Duration;

use kartei::config::BootstrapConfig;
use kartei::{bootstrap, Database, Identity, Role, SessionManager};

/// Signing secret used by integration tests.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Open a fresh in-memory database.
pub async fn setup_db() -> Database {
    Database::open_in_memory().await.unwrap()
}

/// Open a fresh in-memory database with the bootstrap administrator in place.
///
/// Returns the database and the bootstrap configuration (whose password is
/// needed to log in as the administrator).
#[allow(dead_code)]
pub async fn bootstrapped_db() -> (Database, BootstrapConfig) {
    let db = setup_db().await;
    let config = BootstrapConfig::default();
    bootstrap::ensure_admin(&db, &config).await.unwrap();
    (db, config)
}

/// A session manager with the test signing secret and a 24h window.
#[allow(dead_code)]
pub fn session_manager() -> SessionManager {
    SessionManager::new(TEST_SECRET, Duration::from_secs(24 * 60 * 60))
}

/// An admin identity that doesn't need a backing row.
#[allow(dead_code)]
pub fn admin_identity() -> Identity {
    Identity {
        id: 1000,
        code: "EMP999".to_string(),
        role: Role::Admin,
    }
}

/// A standard identity that doesn't need a backing row.
#[allow(dead_code)]
pub fn standard_identity(id: i64) -> Identity {
    Identity {
        id,
        code: format!("EMP{id:03}"),
        role: Role::Standard,
    }
}
