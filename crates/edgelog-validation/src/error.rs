//! Validation error types and aggregation

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result of a multi-check validation.
///
/// `Ok(())` means no problem was found. `Err` always carries at least one
/// problem, so "no failures" never needs a placeholder value.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// A single problem found while validating a value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field
    pub field: String,
    /// Human-readable error message
    pub message: String,
    /// Error code for programmatic handling
    pub code: String,
    /// Additional context or hints
    pub context: Option<serde_json::Value>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: "validation_failed".to_string(),
            context: None,
        }
    }

    /// Create a validation error with a specific code
    pub fn with_code(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
            context: None,
        }
    }

    /// Set the error code
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Set additional context
    pub fn context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered, non-empty collection of validation problems.
///
/// Problems keep the order in which they were recorded. The only ways to
/// obtain a value are [`ValidationErrors::from_error`], [`ValidationErrors::check`]
/// and [`append`], all of which guarantee at least one entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

#[allow(clippy::len_without_is_empty)]
impl ValidationErrors {
    /// Create ValidationErrors from a single error
    pub fn from_error(error: impl Into<ValidationError>) -> Self {
        Self {
            errors: vec![error.into()],
        }
    }

    /// Turn a list of recorded problems into an outcome.
    ///
    /// An empty list is success; anything else fails with every problem in
    /// the order given.
    pub fn check<I, E>(problems: I) -> ValidationResult<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<ValidationError>,
    {
        let errors: Vec<ValidationError> = problems.into_iter().map(Into::into).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self { errors })
        }
    }

    /// Add a single validation error at the end
    pub fn push(&mut self, error: impl Into<ValidationError>) {
        self.errors.push(error.into());
    }

    /// Append every problem of another collection, keeping both orders
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Total number of problems
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// All problems in recording order
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// The human-readable messages, in recording order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Get errors for a specific field
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Check if a specific field has errors
    pub fn has_field_errors(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Number of problems carrying the given code
    pub fn count_code(&self, code: &str) -> usize {
        self.errors.iter().filter(|e| e.code == code).count()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Convert to a JSON-serializable report
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": "validation_failed",
                "message": "Validation failed",
                "problems": self.errors
            }
        })
    }
}

/// Append a problem onto an existing outcome.
///
/// `Ok(())` becomes a one-problem failure; an existing failure grows by one
/// entry at the end.
pub fn append<E>(result: ValidationResult<()>, error: E) -> ValidationResult<()>
where
    E: Into<ValidationError>,
{
    match result {
        Ok(()) => Err(ValidationErrors::from_error(error)),
        Err(mut errors) => {
            errors.push(error);
            Err(errors)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed with {} problem(s):", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::from_error(error)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let error = ValidationError::new("logs.endpoint", "an endpoint must be specified");
        assert_eq!(error.field, "logs.endpoint");
        assert_eq!(error.message, "an endpoint must be specified");
        assert_eq!(error.code, "validation_failed");
        assert!(error.context.is_none());
        assert_eq!(
            error.to_string(),
            "logs.endpoint: an endpoint must be specified"
        );
    }

    #[test]
    fn test_validation_error_with_code() {
        let error = ValidationError::with_code("port", "must be numeric", "invalid_port")
            .context(serde_json::json!({ "value": "http" }));
        assert_eq!(error.code, "invalid_port");
        assert_eq!(error.context.unwrap()["value"], "http");
    }

    #[test]
    fn test_check_empty_is_success() {
        let problems: Vec<ValidationError> = Vec::new();
        assert!(ValidationErrors::check(problems).is_ok());
    }

    #[test]
    fn test_check_keeps_order() {
        let errors = ValidationErrors::check(vec![
            ValidationError::new("b", "second field, first problem"),
            ValidationError::new("a", "first field, second problem"),
            ValidationError::new("b", "third"),
        ])
        .unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.messages(),
            vec!["second field, first problem", "first field, second problem", "third"]
        );
        assert_eq!(errors.get_field_errors("b").len(), 2);
        assert!(errors.has_field_errors("a"));
        assert!(!errors.has_field_errors("c"));
    }

    #[test]
    fn test_append_turns_success_into_failure() {
        let result = append(Ok(()), ValidationError::new("x", "first"));
        let result = append(result, ValidationError::new("y", "second"));

        let errors = result.unwrap_err();
        assert_eq!(errors.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_merge_and_count_code() {
        let mut errors = ValidationErrors::from_error(ValidationError::with_code("a", "one", "tls"));
        let other = ValidationErrors::from_error(ValidationError::with_code("b", "two", "tls"));
        errors.merge(other);
        errors.push(ValidationError::new("c", "three"));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.count_code("tls"), 2);
        assert_eq!(errors.count_code("validation_failed"), 1);
    }

    #[test]
    fn test_display_lists_every_problem() {
        let errors = ValidationErrors::check(vec![
            ValidationError::new("a", "one"),
            ValidationError::new("b", "two"),
        ])
        .unwrap_err();

        let rendered = errors.to_string();
        assert!(rendered.starts_with("Validation failed with 2 problem(s):"));
        assert!(rendered.contains("\n  a: one"));
        assert!(rendered.contains("\n  b: two"));
    }

    #[test]
    fn test_to_json_report() {
        let errors = ValidationErrors::from_error(ValidationError::with_code(
            "logs.endpoint",
            "an endpoint must be specified",
            "missing_endpoint",
        ));
        let json = errors.to_json();
        assert_eq!(json["error"]["code"], "validation_failed");
        assert_eq!(json["error"]["problems"][0]["code"], "missing_endpoint");
        assert_eq!(json["error"]["problems"][0]["field"], "logs.endpoint");
    }
}
