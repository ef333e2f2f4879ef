use crate::error::{AppError, AppResult};
use axum::http::StatusCode;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

pub const INVALID_CREDENTIALS: &str = "invalidCredentials";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Username or user UUID
    #[serde(default)]
    pub roles: Vec<String>, // Granted authorities, e.g. "ADMIN" or "UUID:<id>"
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

pub struct JwtManager {
    secret: String,
}

impl JwtManager {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Validate an HS256 token and extract its claims
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            AppError::request(
                StatusCode::UNAUTHORIZED,
                INVALID_CREDENTIALS,
                format!("Invalid token: {}", e),
            )
        })
    }
}
