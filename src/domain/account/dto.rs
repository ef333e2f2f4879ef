use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Body of `PUT /api/accounts`. Missing strings deserialize as blank so
/// they are reported as field violations rather than an unreadable body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountCommand {
    #[serde(default)]
    pub account_number: String,
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub currency: String,
    pub status: Option<String>,
    pub account_type: Option<String>,
    pub date_of_creation: Option<NaiveDate>,
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

impl Validate for UpdateAccountCommand {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.account_number.trim().is_empty() {
            errors.add("accountNumber", violation("blank", "Account number is required"));
        }
        if self.currency.trim().is_empty() {
            errors.add("currency", violation("blank", "Currency is required"));
        }
        if self.balance.is_some_and(|balance| balance < Decimal::ZERO) {
            errors.add("balance", violation("negative", "Balance cannot be negative"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
