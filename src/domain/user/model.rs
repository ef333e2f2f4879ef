use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::dto::RegisterUserCommand;
use crate::domain::shared::AuditColumns;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[sqlx(rename = "user_id")]
    pub id: Uuid,
    pub realname: Option<String>,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone_numbers: Vec<String>,
    pub role_code: Option<String>,
    pub version: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditColumns,
    pub deleted: bool,
}

impl User {
    /// New, not yet persisted user built from a validated command
    pub fn register(command: RegisterUserCommand, password_hash: String, auditor: &str) -> Self {
        Self {
            id: command.id,
            realname: command.realname,
            username: command.username,
            email: command.email,
            password_hash,
            phone_numbers: command.phone_numbers,
            role_code: None,
            version: 0,
            audit: AuditColumns::created(auditor),
            deleted: false,
        }
    }
}
