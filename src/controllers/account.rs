use axum::{extract::State, http::StatusCode, Extension};
use std::sync::Arc;

use crate::{
    domain::account::{AccountService, AccountServiceApi, UpdateAccountCommand},
    error::AppResult,
    infrastructure::auth::AuthUser,
    infrastructure::http::extract::{AppPath, ValidatedJson},
};

pub struct AccountController {
    account_service: Arc<AccountService>,
}

impl AccountController {
    pub fn new(account_service: Arc<AccountService>) -> Self {
        Self { account_service }
    }

    /// PUT /api/accounts - Update an account
    pub async fn update_account(
        State(controller): State<Arc<AccountController>>,
        ValidatedJson(command): ValidatedJson<UpdateAccountCommand>,
    ) -> AppResult<StatusCode> {
        controller.account_service.update_account(command).await?;
        Ok(StatusCode::OK)
    }

    /// DELETE /api/accounts/{number} - Admins only
    pub async fn delete_account(
        State(controller): State<Arc<AccountController>>,
        caller: Option<Extension<AuthUser>>,
        AppPath(account_number): AppPath<String>,
    ) -> AppResult<StatusCode> {
        controller
            .account_service
            .delete_account(&account_number, caller.as_ref().map(|Extension(user)| user))
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
