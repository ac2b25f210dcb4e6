use crate::config::{ConfigError, ConfigSource};
use std::collections::HashMap;
use std::env;

/// Loading contract for receiver configuration
pub trait AppConfigTrait: Sized {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self, ConfigError>;

    /// Get configuration source information for debugging
    fn config_sources(&self) -> HashMap<String, ConfigSource>;
}

/// Read an environment variable, treating "not set" as `None`.
///
/// A variable that is set but not valid unicode is an error rather than
/// silently ignored.
pub fn env_var(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::environment_error(format!(
            "{} is set but is not valid unicode",
            key
        ))),
    }
}

/// Read an environment variable or fall back to `default`
pub fn env_or_default(key: &str, default: &str) -> Result<String, ConfigError> {
    Ok(env_var(key)?.unwrap_or_else(|| {
        tracing::trace!(key, default, "environment variable not set, using default");
        default.to_string()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_unset_is_none() {
        env::remove_var("EDGELOG_CORE_TEST_UNSET");
        assert_eq!(env_var("EDGELOG_CORE_TEST_UNSET").unwrap(), None);
        assert_eq!(
            env_or_default("EDGELOG_CORE_TEST_UNSET", ".").unwrap(),
            "."
        );
    }

    #[test]
    #[serial]
    fn test_env_var_set() {
        env::set_var("EDGELOG_CORE_TEST_SET", "0.0.0.0:4318");
        assert_eq!(
            env_var("EDGELOG_CORE_TEST_SET").unwrap().as_deref(),
            Some("0.0.0.0:4318")
        );
        assert_eq!(
            env_or_default("EDGELOG_CORE_TEST_SET", "unused").unwrap(),
            "0.0.0.0:4318"
        );
        env::remove_var("EDGELOG_CORE_TEST_SET");
    }
}
