//! Session tokens and the identities they carry

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{BackstageError, Result};

/// How long an issued session stays valid (five days)
pub const SESSION_TTL_SECS: i64 = 5 * 24 * 60 * 60;

/// The caller identity attached to back-office requests.
///
/// `is_admin` is the single authorization gate: there are no finer-grained
/// roles, and every privileged action checks this one flag.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminIdentity {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub is_admin: bool,
}

impl AdminIdentity {
    /// A full administrator identity
    pub fn admin(uid: &str, email: &str, display_name: &str) -> Self {
        Self {
            uid: uid.to_string(),
            email: email.to_string(),
            display_name: display_name.to_string(),
            is_admin: true,
        }
    }

    /// An authenticated identity without admin rights
    pub fn viewer(uid: &str, email: &str) -> Self {
        Self {
            uid: uid.to_string(),
            email: email.to_string(),
            display_name: String::new(),
            is_admin: false,
        }
    }
}

/// Claims carried inside a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user id)
    pub sub: String,
    pub email: String,
    pub name: String,
    pub admin: bool,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Verifies bearer session tokens into identities
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    /// Returns the identity for a valid token, `None` otherwise
    async fn verify(&self, token: &str) -> Option<AdminIdentity>;
}

/// HS256-signed session tokens sharing one secret across the deployment
#[derive(Clone)]
pub struct JwtSessions {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtSessions {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a session token for an authenticated user
    pub fn issue(&self, uid: &str, email: &str, name: &str, admin: bool) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: uid.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            admin,
            iat: now,
            exp: now + SESSION_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| BackstageError::Auth(format!("Failed to issue session: {}", e)))
    }

    /// Decode and validate a token, returning its claims
    pub fn decode_claims(&self, token: &str) -> Result<SessionClaims> {
        let data = decode::<SessionClaims>(token, &self.decoding, &Validation::default())
            .map_err(|e| BackstageError::Auth(format!("Invalid session token: {}", e)))?;
        Ok(data.claims)
    }
}

#[async_trait]
impl SessionVerifier for JwtSessions {
    async fn verify(&self, token: &str) -> Option<AdminIdentity> {
        match self.decode_claims(token) {
            Ok(claims) => Some(AdminIdentity {
                uid: claims.sub,
                email: claims.email,
                display_name: claims.name,
                is_admin: claims.admin,
            }),
            Err(e) => {
                warn!("Session verification failed: {}", e);
                None
            }
        }
    }
}

/// Fixed token-to-identity table for tests and local tooling
#[derive(Default)]
pub struct StaticSessions {
    identities: HashMap<String, AdminIdentity>,
}

impl StaticSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(mut self, token: &str, identity: AdminIdentity) -> Self {
        self.identities.insert(token.to_string(), identity);
        self
    }
}

#[async_trait]
impl SessionVerifier for StaticSessions {
    async fn verify(&self, token: &str) -> Option<AdminIdentity> {
        self.identities.get(token).cloned()
    }
}
