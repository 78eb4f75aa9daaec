//! Bearer token issuing and validation.
//!
//! Tokens are HS256-signed JWTs carrying the user id (`sub`) and issue time
//! (`iat`). They do not expire and cannot be revoked.

use gardenspace_core::types::DbId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for token signing and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
}

/// Why a presented token was rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    /// Bad signature, wrong algorithm, or not a JWT at all.
    #[error("Invalid token")]
    InvalidToken,

    /// Correctly signed, but the claims carry no usable user id.
    #[error("Malformed token claims")]
    MalformedToken,
}

/// Issue a token for the given user.
pub fn issue_token(user_id: DbId, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        iat: chrono::Utc::now().timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate a token and return the user id it was issued for.
///
/// The signature is checked before the claims are inspected, so
/// [`AuthError::MalformedToken`] is only reported for tokens this server signed.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<DbId, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<serde_json::Value>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AuthError::InvalidToken)?;

    data.claims
        .get("sub")
        .and_then(serde_json::Value::as_i64)
        .ok_or(AuthError::MalformedToken)
}
