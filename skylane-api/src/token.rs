use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use skylane_core::IdentityClaim;

/// Claims carried inside a bearer token: the user's id, their email, and
/// the expiry timestamp.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub exp: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token required")]
    Missing,

    #[error("Invalid token")]
    Invalid,
}

/// Stateless signer and verifier for bearer tokens.
#[derive(Clone)]
pub struct TokenAuthenticator {
    secret: String,
    expiration_seconds: u64,
}

impl TokenAuthenticator {
    pub fn new(secret: String, expiration_seconds: u64) -> Self {
        Self {
            secret,
            expiration_seconds,
        }
    }

    /// Produce a signed, time-limited token for an identity claim.
    pub fn issue(&self, claim: &IdentityClaim) -> anyhow::Result<String> {
        let claims = Claims {
            sub: claim.id,
            email: claim.email.clone(),
            exp: (Utc::now() + Duration::seconds(self.expiration_seconds as i64)).timestamp()
                as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Resolve a presented token back to its claims. Fails if the signature
    /// does not verify or the token has expired.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| TokenError::Invalid)
    }
}
