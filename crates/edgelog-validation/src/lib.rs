//! # edgelog-validation
//!
//! Aggregated validation for edgelog configuration. Checks record problems
//! into an ordered, non-empty [`ValidationErrors`] so that an operator sees
//! every defect at once instead of one per run.

pub mod error;
pub mod traits;

pub use error::{append, ValidationError, ValidationErrors, ValidationResult};
pub use traits::Validate;
