use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::infrastructure::auth::AuthUser;

/// Who/when columns shared by audited tables
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditColumns {
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub modified_by: Option<String>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl AuditColumns {
    /// Columns for a row about to be inserted
    pub fn created(auditor: impl Into<String>) -> Self {
        Self {
            created_by: auditor.into(),
            created_at: Utc::now(),
            modified_by: None,
            modified_at: None,
        }
    }
}

/// Auditor for a change: the caller when authenticated, the application
/// itself otherwise.
pub fn current_auditor(caller: Option<&AuthUser>, app_name: &str) -> String {
    caller
        .map(AuthUser::auditor)
        .unwrap_or_else(|| app_name.to_string())
}
