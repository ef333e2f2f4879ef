use axum::http::StatusCode;
use uuid::Uuid;

use crate::error::{AppError, FieldViolation};

pub const USER_ALREADY_EXISTS: &str = "userAlreadyExists";

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("invalid input: {} violation(s)", .0.len())]
    Invalid(Vec<FieldViolation>),
    #[error("user {0} already exists")]
    AlreadyExists(Uuid),
    #[error("user {0} not found")]
    NotFound(Uuid),
    #[error("password hashing failed: {0}")]
    Hashing(String),
    /// Repository failures travel unchanged so constraint details survive
    #[error(transparent)]
    Repository(#[from] AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::Invalid(violations) => AppError::Validation(violations),
            UserServiceError::AlreadyExists(id) => AppError::request(
                StatusCode::CONFLICT,
                USER_ALREADY_EXISTS,
                format!("User {} already exists", id),
            )
            .with_message_args([id.to_string()]),
            UserServiceError::NotFound(id) => AppError::NotFound(format!("User {} not found", id)),
            UserServiceError::Hashing(msg) => AppError::Internal(msg),
            UserServiceError::Repository(e) => e,
            UserServiceError::Other(e) => AppError::Other(e),
        }
    }
}
