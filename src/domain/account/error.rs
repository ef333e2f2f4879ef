use axum::http::StatusCode;

use crate::error::AppError;

pub const AUTHENTICATION_REQUIRED: &str = "authenticationRequired";

#[derive(Debug, thiserror::Error)]
pub enum AccountServiceError {
    #[error("authentication required")]
    Unauthenticated,
    #[error("{subject} lacks role {role}")]
    Forbidden { subject: String, role: &'static str },
}

impl From<AccountServiceError> for AppError {
    fn from(err: AccountServiceError) -> Self {
        match err {
            AccountServiceError::Unauthenticated => AppError::request(
                StatusCode::UNAUTHORIZED,
                AUTHENTICATION_REQUIRED,
                "Authentication required",
            ),
            forbidden @ AccountServiceError::Forbidden { .. } => {
                AppError::AccessDenied(forbidden.to_string())
            }
        }
    }
}
