pub mod persistence;
pub mod report;
pub mod translator;

pub use report::{FieldErrorEntry, ProblemReport, APPLICATION_PROBLEM_JSON};
pub use translator::ErrorTranslator;
