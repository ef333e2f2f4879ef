use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{field_violations, FieldViolation};

pub const INVALID_PHONE_NUMBER: &str = "Invalid phone number";

static PHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ]{6,20}$").expect("phone number pattern is valid"));

/// Body of `POST /api/users`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserCommand {
    pub id: Uuid,
    pub realname: Option<String>,
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must have at least 8 characters"))]
    pub password: String,
    #[serde(rename = "phoneNumbers", default)]
    pub phone_numbers: Vec<String>,
}

impl RegisterUserCommand {
    /// All violations of the command, field rules first, then one entry per
    /// bad phone number pointing at its index.
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = self
            .validate()
            .err()
            .map(|errors| field_violations(&errors))
            .unwrap_or_default();

        violations.extend(
            self.phone_numbers
                .iter()
                .enumerate()
                .filter(|(_, number)| !PHONE_NUMBER.is_match(number))
                .map(|(index, _)| {
                    FieldViolation::new(format!("phoneNumbers[{}]", index), INVALID_PHONE_NUMBER)
                }),
        );

        violations
    }
}
