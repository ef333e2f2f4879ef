use axum::http::StatusCode;
use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FieldViolation;

pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Structured error body returned to callers (`application/problem+json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemReport {
    pub status: u16,
    pub title: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorEntry>,
    pub timestamp: String,
    pub error_id: Uuid,
}

/// One field-level failure. `pointer` is omitted for whole-object errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    pub reason: String,
}

impl From<&FieldViolation> for FieldErrorEntry {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            pointer: violation.field.clone(),
            reason: violation.message.clone(),
        }
    }
}

impl ProblemReport {
    /// New report with a fresh correlation id and the current local time
    pub fn new(status: StatusCode, detail: String, errors: Vec<FieldErrorEntry>) -> Self {
        Self {
            status: status.as_u16(),
            title: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
            detail,
            instance: None,
            errors,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            error_id: Uuid::new_v4(),
        }
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
