pub mod catalog;
pub mod locale;

pub use catalog::{CatalogError, MessageCatalog};
pub use locale::Locale;
