pub mod audit;

pub use audit::{current_auditor, AuditColumns};
