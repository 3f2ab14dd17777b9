//! Credential verification for KARTEI.

use sqlx::SqlitePool;

use super::password::verify_password;
use crate::db::{EmployeeRepository, Role};
use crate::{KarteiError, Result};

/// Generic message for every credential failure.
///
/// Lookup misses and hash mismatches must be indistinguishable to the
/// caller, so user enumeration is not possible.
const GENERIC_FAILURE: &str = "invalid code or password";

/// An authenticated caller, with the secret hash stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Employee ID.
    pub id: i64,
    /// Employee record code.
    pub code: String,
    /// Role for permission decisions.
    pub role: Role,
}

/// Verifies submitted code + password pairs against the employee store.
pub struct CredentialVerifier<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CredentialVerifier<'a> {
    /// Create a new CredentialVerifier with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Verify a code + password pair.
    ///
    /// Returns the caller's [`Identity`] on success. Both an unknown code
    /// and a wrong password fail with the same generic reason; storage
    /// failures are surfaced as storage errors, not authentication ones.
    pub async fn verify(&self, code: &str, password: &str) -> Result<Identity> {
        let repo = EmployeeRepository::new(self.pool);

        let employee = repo
            .get_by_code(code)
            .await?
            .ok_or_else(|| KarteiError::Authentication(GENERIC_FAILURE.to_string()))?;

        verify_password(password, &employee.password)
            .map_err(|_| KarteiError::Authentication(GENERIC_FAILURE.to_string()))?;

        Ok(Identity {
            id: employee.id,
            code: employee.code,
            role: employee.role,
        })
    }
}
