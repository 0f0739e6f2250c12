use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// Claims embedded in an end-user token
#[derive(Debug, Serialize, Deserialize)]
pub struct UserClaims {
    pub user_id: i64,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    pub fn new(user_id: i64) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.token_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            user_id,
            exp,
            iat: now.timestamp(),
        }
    }
}

/// Claims embedded in a trusted-service token (serverToken header)
#[derive(Debug, Serialize, Deserialize)]
pub struct ServerClaims {
    pub service: String,
    pub exp: i64,
    pub iat: i64,
}

impl ServerClaims {
    pub fn new(service: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.token_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            service: service.into(),
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token generation error: {0}")]
    Generation(String),
    #[error("token validation error: {0}")]
    Validation(String),
    #[error("token secret not configured")]
    InvalidSecret,
}

/// Issue a signed token for an end user
pub fn generate_user_token(user_id: i64) -> Result<String, TokenError> {
    let secret = &config::config().security.user_token_secret;
    sign(&UserClaims::new(user_id), secret)
}

/// Issue a signed token for a trusted internal service
pub fn generate_server_token(service: &str) -> Result<String, TokenError> {
    let secret = &config::config().security.server_token_secret;
    sign(&ServerClaims::new(service), secret)
}

/// Validate an end-user token and return its claims
pub fn verify_user_token(token: &str) -> Result<UserClaims, TokenError> {
    let secret = &config::config().security.user_token_secret;
    verify(token, secret)
}

/// Validate a trusted-service token and return its claims
pub fn verify_server_token(token: &str) -> Result<ServerClaims, TokenError> {
    let secret = &config::config().security.server_token_secret;
    verify(token, secret)
}

fn sign<C: Serialize>(claims: &C, secret: &str) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| TokenError::Generation(e.to_string()))
}

fn verify<C: serde::de::DeserializeOwned>(token: &str, secret: &str) -> Result<C, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    decode::<C>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| TokenError::Validation(e.to_string()))
}
