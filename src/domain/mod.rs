pub mod account;
pub mod auth;
pub mod i18n;
pub mod problem;
pub mod shared;
pub mod user;
