pub mod dto;
pub mod error;
pub mod model;
pub mod password;
pub mod service;

pub use dto::RegisterUserCommand;
pub use error::UserServiceError;
pub use model::User;
pub use service::{UserService, UserServiceApi};
