use std::sync::Arc;

use axum::http::StatusCode;

use super::persistence::{constraint_detail, constraint_message};
use super::report::{FieldErrorEntry, ProblemReport};
use crate::domain::i18n::{Locale, MessageCatalog};
use crate::error::{AppError, FieldViolation};

pub const API_DEFAULT_ERROR_MESSAGE: &str = "apiDefaultErrorMessage";
pub const API_DEFAULT_REQUEST_FAILED_MESSAGE: &str = "apiDefaultRequestFailedMessage";
pub const VALIDATION_FIELDS_FAILED: &str = "validationOfFieldsFailed";
pub const RECORD_NOT_FOUND: &str = "recordNotFound";
pub const ACCESS_DENIED: &str = "accessDenied";

/// Turns any `AppError` into a localized `ProblemReport`.
///
/// Client faults (validation, access denied) log at debug, everything else
/// at error; each log line carries the report's `error_id`.
#[derive(Clone)]
pub struct ErrorTranslator {
    messages: Arc<MessageCatalog>,
}

impl ErrorTranslator {
    pub fn new(messages: Arc<MessageCatalog>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    pub fn translate(&self, fault: &AppError, locale: &Locale) -> ProblemReport {
        let report = match fault {
            AppError::Validation(violations) => ProblemReport::new(
                StatusCode::BAD_REQUEST,
                self.messages.message(VALIDATION_FIELDS_FAILED, locale),
                entries(violations),
            ),
            AppError::AccessDenied(_) => ProblemReport::new(
                StatusCode::FORBIDDEN,
                self.messages.message(ACCESS_DENIED, locale),
                Vec::new(),
            ),
            AppError::NotFound(_) | AppError::Database(sqlx::Error::RowNotFound) => {
                ProblemReport::new(
                    StatusCode::NOT_FOUND,
                    self.messages.message(RECORD_NOT_FOUND, locale),
                    Vec::new(),
                )
            }
            AppError::Database(error) => ProblemReport::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                self.persistence_detail(error, locale),
                Vec::new(),
            ),
            AppError::Request {
                status,
                message_key,
                message_args,
                errors,
                ..
            } => {
                let detail = match message_key.as_deref().filter(|key| !key.trim().is_empty()) {
                    Some(key) => {
                        let args: Vec<&str> = message_args.iter().map(String::as_str).collect();
                        self.messages.message_with_args(key, &args, locale)
                    }
                    None => self.messages.message(API_DEFAULT_REQUEST_FAILED_MESSAGE, locale),
                };
                ProblemReport::new(*status, detail, entries(errors))
            }
            AppError::Internal(_) | AppError::Other(_) => ProblemReport::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                self.messages.message(API_DEFAULT_ERROR_MESSAGE, locale),
                Vec::new(),
            ),
        };

        log_translation(fault, &report);
        report
    }

    fn persistence_detail(&self, error: &sqlx::Error, locale: &Locale) -> String {
        constraint_message(error)
            .and_then(|message| constraint_detail(&message))
            .unwrap_or_else(|| self.messages.message(API_DEFAULT_ERROR_MESSAGE, locale))
    }
}

fn entries(violations: &[FieldViolation]) -> Vec<FieldErrorEntry> {
    violations.iter().map(FieldErrorEntry::from).collect()
}

fn log_translation(fault: &AppError, report: &ProblemReport) {
    match fault {
        AppError::Validation(_) | AppError::AccessDenied(_) => tracing::debug!(
            error_id = %report.error_id,
            status = report.status,
            error = %fault,
            "Error ID: {} - {}", report.error_id, fault
        ),
        _ => tracing::error!(
            error_id = %report.error_id,
            status = report.status,
            error = ?fault,
            "Error ID: {} - {}", report.error_id, fault
        ),
    }
}
