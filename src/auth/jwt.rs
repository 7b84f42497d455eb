//! JWT token generation and validation
//! Single token kind, signed with HS256, fixed lifetime from config

use crate::{config::AppConfig, error::AppError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims
///
/// Deliberately a typed struct rather than a dynamic claim map; decoding
/// validates the full shape at the boundary.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Username
    pub username: String,

    /// Admin flag
    pub admin: bool,

    /// Issued at
    pub iat: i64,

    /// Expiration
    pub exp: i64,
}

/// JWT service
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_exp_secs: u64,
}

impl JwtService {
    /// Create JWT service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let secret = config.security.jwt_secret.expose_secret();

        // Ensure secret is at least 32 bytes for HS256
        if secret.len() < 32 {
            return Err(AppError::Config("JWT secret too short (min 32 chars)".to_string()));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_exp_secs: config.security.token_exp_secs,
        })
    }

    /// Issue a signed token for the given user
    pub fn issue(&self, user_id: &Uuid, username: &str, admin: bool) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.token_exp_secs as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            admin,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode token: {:?}", e);
            AppError::Internal(format!("Failed to encode token: {}", e))
        })
    }

    /// Validate signature and expiry, and decode the claims
    ///
    /// There is no revocation: a token stays valid for its full lifetime.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token validation failed: {:?}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::Unauthorized,
                }
            })
    }
}
