pub mod dto;
pub mod error;
pub mod service;

pub use dto::UpdateAccountCommand;
pub use error::AccountServiceError;
pub use service::{AccountService, AccountServiceApi, ADMIN_ROLE};
