use async_trait::async_trait;

use super::error::AccountServiceError;
use super::UpdateAccountCommand;
use crate::infrastructure::auth::AuthUser;

pub const ADMIN_ROLE: &str = "ADMIN";

#[derive(Default)]
pub struct AccountService;

impl AccountService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
pub trait AccountServiceApi: Send + Sync {
    /// Apply an already validated update
    async fn update_account(&self, command: UpdateAccountCommand) -> Result<(), AccountServiceError>;

    /// Remove an account; only administrators may do this
    async fn delete_account(
        &self,
        account_number: &str,
        caller: Option<&AuthUser>,
    ) -> Result<(), AccountServiceError>;
}

#[async_trait]
impl AccountServiceApi for AccountService {
    async fn update_account(&self, command: UpdateAccountCommand) -> Result<(), AccountServiceError> {
        tracing::info!(
            account_number = %command.account_number,
            currency = %command.currency,
            balance = ?command.balance,
            "Account updated"
        );
        Ok(())
    }

    async fn delete_account(
        &self,
        account_number: &str,
        caller: Option<&AuthUser>,
    ) -> Result<(), AccountServiceError> {
        let caller = caller.ok_or(AccountServiceError::Unauthenticated)?;

        if !caller.has_role(ADMIN_ROLE) {
            return Err(AccountServiceError::Forbidden {
                subject: caller.subject.clone(),
                role: ADMIN_ROLE,
            });
        }

        tracing::info!(account_number = %account_number, deleted_by = %caller.auditor(), "Account deleted");
        Ok(())
    }
}
