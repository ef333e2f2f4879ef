pub mod account;
pub mod health;
pub mod language;
pub mod user;

pub use account::AccountController;
pub use user::UserController;
