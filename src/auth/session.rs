//! Session token issuance and verification for KARTEI.
//!
//! Sessions are stateless signed tokens: no server-side session table is
//! consulted. The only shared state is the signing secret, loaded once at
//! startup and read-only for the process lifetime.

use std::time::Duration;

use cookie::{Cookie, SameSite};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::credentials::Identity;
use crate::config::SessionConfig;
use crate::db::Role;
use crate::{KarteiError, Result};

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (employee ID).
    pub sub: i64,
    /// Employee record code.
    pub code: String,
    /// Role tag.
    pub role: String,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// Token ID (unique identifier).
    pub jti: String,
}

/// Issues and verifies signed session tokens.
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    cookie_name: String,
}

impl SessionManager {
    /// Create a new SessionManager with the given signing secret and
    /// validity window.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
            cookie_name: "kartei_session".to_string(),
        }
    }

    /// Create a SessionManager from the session configuration section.
    pub fn from_config(config: &SessionConfig) -> Self {
        let mut manager = Self::new(
            &config.secret,
            Duration::from_secs(config.ttl_hours * 60 * 60),
        );
        manager.cookie_name = config.cookie_name.clone();
        manager
    }

    /// The configured validity window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a signed token for an identity.
    pub fn issue(&self, identity: &Identity) -> Result<String> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = SessionClaims {
            sub: identity.id,
            code: identity.code.clone(),
            role: identity.role.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| KarteiError::Storage(format!("failed to sign session token: {e}")))
    }

    /// Verify a token and recover the identity it carries.
    ///
    /// Fails when the signature does not match, the token is malformed, or
    /// the validity window has passed.
    pub fn verify(&self, token: &str) -> Result<Identity> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!("session token rejected: {}", e);
                KarteiError::Authentication("invalid or expired session".to_string())
            })?;

        Ok(Identity {
            id: data.claims.sub,
            code: data.claims.code,
            role: data.claims.role.parse().unwrap_or(Role::Standard),
        })
    }

    /// Build the attribute-restricted cookie carrying a session token.
    ///
    /// HttpOnly (not readable by page scripts), SameSite=Strict (sent only
    /// to the issuing origin), Path=/ (whole site), Max-Age = validity
    /// window.
    pub fn cookie(&self, token: impl Into<String>) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), token.into()))
            .http_only(true)
            .same_site(SameSite::Strict)
            .path("/")
            .max_age(cookie::time::Duration::seconds(self.ttl.as_secs() as i64))
            .build()
    }
}
