//! Core validation traits

use crate::error::ValidationResult;

/// Validation of a whole value, reporting every problem found.
///
/// Implementations must run all of their checks and must not stop at the
/// first failure. They are expected to be pure: no I/O, no logging, no
/// mutation of `self`.
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;

    /// Shorthand for `validate().is_ok()`
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> ValidationResult<()> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> ValidationResult<()> {
        (**self).validate()
    }
}
