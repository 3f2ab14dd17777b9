//! Login facade for KARTEI.
//!
//! Composes the credential verifier and the session issuer into the two
//! entry points the page layer consumes.

use tracing::debug;

use super::credentials::{CredentialVerifier, Identity};
use super::session::SessionManager;
use crate::{Database, KarteiError, Result};

/// A successful login: the signed token plus the verified identity.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed session token, to be carried in the session cookie.
    pub token: String,
    /// The verified identity.
    pub identity: Identity,
}

/// Verify credentials and mint a session token.
///
/// Empty inputs are a validation error; credential failures share one
/// generic authentication reason.
pub async fn login(
    db: &Database,
    sessions: &SessionManager,
    code: &str,
    password: &str,
) -> Result<LoginOutcome> {
    if code.is_empty() || password.is_empty() {
        return Err(KarteiError::Validation(
            "code and password are required".to_string(),
        ));
    }

    let verifier = CredentialVerifier::new(db.pool());
    let identity = verifier.verify(code, password).await?;

    let token = sessions.issue(&identity)?;
    debug!("session issued for {}", identity.code);

    Ok(LoginOutcome { token, identity })
}

/// Recover the identity carried by a session token, if it is valid.
pub fn current_identity(sessions: &SessionManager, token: &str) -> Option<Identity> {
    sessions.verify(token).ok()
}
