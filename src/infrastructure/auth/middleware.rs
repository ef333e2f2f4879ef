use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::JwtManager;
use crate::error::AppError;
use crate::infrastructure::config::Config;

const UUID_AUTHORITY_PREFIX: &str = "UUID:";

/// Authenticated caller injected into request extensions.
/// Handlers receive it explicitly; there is no ambient security context.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub subject: String,
    pub roles: Vec<String>,
}

impl AuthUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Identifier written to audit columns: the subject when it is already a
    /// UUID, otherwise a `UUID:<id>` authority, otherwise the plain subject.
    pub fn auditor(&self) -> String {
        if Uuid::parse_str(&self.subject).is_ok() {
            return self.subject.clone();
        }

        self.roles
            .iter()
            .find_map(|role| role.strip_prefix(UUID_AUTHORITY_PREFIX))
            .map(str::to_string)
            .unwrap_or_else(|| self.subject.clone())
    }
}

/// Optional bearer authentication. Requests without an `Authorization`
/// header pass through anonymously; a present but bad token is rejected.
pub async fn auth_middleware(
    State(config): State<Arc<Config>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());

    let Some(auth_header) = auth_header else {
        return Ok(next.run(request).await);
    };

    // Check Bearer token format
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::request(
            axum::http::StatusCode::UNAUTHORIZED,
            crate::domain::auth::jwt::INVALID_CREDENTIALS,
            "Invalid authorization format",
        )
    })?;

    let jwt_manager = JwtManager::new(config.jwt_secret.clone());
    let claims = jwt_manager.validate_token(token)?;

    tracing::debug!(subject = %claims.sub, roles = ?claims.roles, "Authenticated request");

    request.extensions_mut().insert(AuthUser {
        subject: claims.sub,
        roles: claims.roles,
    });

    Ok(next.run(request).await)
}
