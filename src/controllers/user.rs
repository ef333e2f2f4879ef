use axum::{
    extract::State,
    http::{header, StatusCode},
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::shared::current_auditor,
    domain::user::{RegisterUserCommand, User, UserService, UserServiceApi},
    error::AppResult,
    infrastructure::auth::AuthUser,
    infrastructure::http::extract::{AppJson, AppPath},
};

pub struct UserController {
    user_service: Arc<UserService>,
    app_name: String,
}

impl UserController {
    pub fn new(user_service: Arc<UserService>, app_name: String) -> Self {
        Self {
            user_service,
            app_name,
        }
    }

    /// POST /api/users - Register a user
    pub async fn register(
        State(controller): State<Arc<UserController>>,
        caller: Option<Extension<AuthUser>>,
        AppJson(command): AppJson<RegisterUserCommand>,
    ) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<User>)> {
        let auditor = current_auditor(
            caller.as_ref().map(|Extension(user)| user),
            &controller.app_name,
        );
        let user = controller.user_service.register(command, &auditor).await?;

        Ok((
            StatusCode::CREATED,
            [(header::LOCATION, format!("/api/users/{}", user.id))],
            Json(user),
        ))
    }

    /// GET /api/users/{id}
    pub async fn get_user(
        State(controller): State<Arc<UserController>>,
        AppPath(user_id): AppPath<Uuid>,
    ) -> AppResult<Json<User>> {
        let user = controller.user_service.find_user(user_id).await?;
        Ok(Json(user))
    }
}
