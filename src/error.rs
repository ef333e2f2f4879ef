use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::{ValidationErrors, ValidationErrorsKind};

/// A single field-level failure collected while validating input.
/// `field` is `None` for whole-object errors (e.g. an unreadable body).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Option<String>,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn whole_object(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// API-defined failure with an explicit status and an i18n message key
    #[error("Request failed ({status}): {message}")]
    Request {
        status: StatusCode,
        message: String,
        message_key: Option<String>,
        message_args: Vec<String>,
        errors: Vec<FieldViolation>,
    },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Build an API-defined failure whose client-facing text comes from `message_key`
    pub fn request(status: StatusCode, message_key: &str, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: message.into(),
            message_key: Some(message_key.to_string()),
            message_args: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Attach positional arguments for the message key (`{0}`, `{1}`...)
    pub fn with_message_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Self::Request { message_args, .. } = &mut self {
            message_args.extend(args.into_iter().map(Into::into));
        }
        self
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AccessDenied(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) | Self::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Self::Request { status, .. } => *status,
            Self::Database(_) | Self::Internal(_) | Self::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(field_violations(&errors))
    }
}

/// Violations reported by `validator`, one per failed rule
pub fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    collect_violations(errors, None, &mut violations);
    violations
}

/// Flatten nested validator output into dotted/indexed field paths.
/// Struct-level (`__all__`) errors become whole-object violations.
fn collect_violations(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    out: &mut Vec<FieldViolation>,
) {
    for (key, kind) in errors.errors() {
        let key = key.to_string();
        let path = match prefix {
            Some(prefix) if key == "__all__" => Some(prefix.to_string()),
            Some(prefix) => Some(format!("{}.{}", prefix, key)),
            None if key == "__all__" => None,
            None => Some(key),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(FieldViolation {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_violations(nested, path.as_deref(), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let indexed = format!("{}[{}]", path.as_deref().unwrap_or_default(), index);
                    collect_violations(nested, Some(&indexed), out);
                }
            }
        }
    }
}

/// Fault carried out of a handler in the response extensions.
/// The problem boundary middleware turns it into a problem report.
#[derive(Debug, Clone)]
pub struct CapturedFault(pub Arc<AppError>);

/// Handlers never render errors themselves: the response is a placeholder
/// that the problem boundary replaces with a localized problem report.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = self.status_code().into_response();
        response
            .extensions_mut()
            .insert(CapturedFault(Arc::new(self)));
        response
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
