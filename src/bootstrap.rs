//! First-run bootstrap for KARTEI.
//!
//! Guarantees at least one administrator exists the first time the store
//! is initialized. The reserved bootstrap code lives outside the generated
//! sequence, so `EMP001` stays free for the first regular staff record.

use tracing::{debug, info};

use crate::auth::hash_password;
use crate::config::BootstrapConfig;
use crate::db::{EmployeeProfile, EmployeeRepository, NewEmployee, Role};
use crate::{Database, Result};

/// Reserved record code for the bootstrap administrator.
pub const BOOTSTRAP_ADMIN_CODE: &str = "EMP000";

/// Ensure the bootstrap administrator exists.
///
/// Idempotent: if a record with the reserved code already exists, nothing
/// happens and `None` is returned. Otherwise the administrator is created
/// from the bootstrap configuration and returned.
pub async fn ensure_admin(
    db: &Database,
    config: &BootstrapConfig,
) -> Result<Option<EmployeeProfile>> {
    let repo = EmployeeRepository::new(db.pool());

    if repo.get_by_code(BOOTSTRAP_ADMIN_CODE).await?.is_some() {
        debug!("bootstrap administrator already present");
        return Ok(None);
    }

    let password_hash = hash_password(&config.admin_password)?;

    let new_admin = NewEmployee::new(
        BOOTSTRAP_ADMIN_CODE,
        &config.admin_name,
        &config.admin_email,
        password_hash,
    )
    .with_role(Role::Admin);

    let admin = repo.create(&new_admin).await?;
    info!("created bootstrap administrator {}", admin.code);

    Ok(Some(admin.into_profile()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CredentialVerifier;
    use crate::KarteiError;

    #[tokio::test]
    async fn test_ensure_admin_creates_on_empty_store() {
        let db = Database::open_in_memory().await.unwrap();
        let config = BootstrapConfig::default();

        let created = ensure_admin(&db, &config).await.unwrap();

        let admin = created.expect("admin should be created");
        assert_eq!(admin.code, BOOTSTRAP_ADMIN_CODE);
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.name, config.admin_name);
    }

    #[tokio::test]
    async fn test_ensure_admin_is_idempotent() {
        let db = Database::open_in_memory().await.unwrap();
        let config = BootstrapConfig::default();

        assert!(ensure_admin(&db, &config).await.unwrap().is_some());
        assert!(ensure_admin(&db, &config).await.unwrap().is_none());
        assert!(ensure_admin(&db, &config).await.unwrap().is_none());

        let repo = EmployeeRepository::new(db.pool());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_bootstrap_admin_can_authenticate() {
        let db = Database::open_in_memory().await.unwrap();
        let config = BootstrapConfig::default();
        ensure_admin(&db, &config).await.unwrap();

        let verifier = CredentialVerifier::new(db.pool());
        let identity = verifier
            .verify(BOOTSTRAP_ADMIN_CODE, &config.admin_password)
            .await
            .unwrap();

        assert_eq!(identity.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_ensure_admin_rejects_short_password() {
        let db = Database::open_in_memory().await.unwrap();
        let config = BootstrapConfig {
            admin_password: "short".to_string(),
            ..BootstrapConfig::default()
        };

        let result = ensure_admin(&db, &config).await;
        assert!(matches!(result, Err(KarteiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_bootstrap_does_not_consume_sequence() {
        use crate::db::{CodeGenerator, Collection};

        let db = Database::open_in_memory().await.unwrap();
        ensure_admin(&db, &BootstrapConfig::default()).await.unwrap();

        let generator = CodeGenerator::new(db.pool());
        assert_eq!(
            generator.next_code(Collection::Employees).await.unwrap(),
            "EMP001"
        );
    }
}
