use crate::infrastructure::db::DbPool;
use crate::{domain::user::User, error::AppResult};
use std::sync::Arc;
use uuid::Uuid;

pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Find a live (not soft-deleted) user by ID
    pub async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM mi.users WHERE user_id = $1 AND deleted = FALSE",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Insert a new user. Unique violations on username or email surface as
    /// `AppError::Database` carrying the Postgres constraint detail.
    pub async fn insert(&self, user: &User) -> AppResult<User> {
        let pool = self.pool.as_ref();
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO mi.users (
                user_id, realname, username, email, password_hash, phone_numbers,
                role_code, version, created_by, created_at, modified_by, modified_at, deleted
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&user.realname)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.phone_numbers)
        .bind(&user.role_code)
        .bind(user.version)
        .bind(&user.audit.created_by)
        .bind(user.audit.created_at)
        .bind(&user.audit.modified_by)
        .bind(user.audit.modified_at)
        .bind(user.deleted)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }
}
