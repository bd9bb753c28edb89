//! Signed session tokens for the persisted session

use crate::auth::models::SessionUser;
use crate::config::AuthConfig;
use crate::error::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims: the public session projection plus timestamps
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(flatten)]
    pub user: SessionUser,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, valid for `ttl_hours`
    pub fn for_user(user: &SessionUser, ttl_hours: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            user: user.clone(),
            iat: now,
            exp: now.saturating_add(ttl_hours.saturating_mul(3600)),
        }
    }
}

/// Signs and checks persisted sessions with an HMAC key
#[derive(Clone)]
pub struct SessionSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_hours: i64,
}

impl SessionSigner {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.secret, config.session_ttl_hours)
    }

    /// Create a token for the user
    pub fn sign(&self, user: &SessionUser) -> Result<String> {
        let claims = Claims::for_user(user, self.ttl_hours);
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Validate a token and return the user it carries
    pub fn verify(&self, token: &str) -> Result<SessionUser> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims.user)
    }
}

impl std::fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSigner")
            .field("ttl_hours", &self.ttl_hours)
            .finish_non_exhaustive()
    }
}
