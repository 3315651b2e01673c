//! Input validation at the command line boundary.

mod validate;

pub use validate::{quick_validate, validate_job, ValidationResult};
