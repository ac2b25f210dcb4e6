//! Startup gate
//!
//! The embedding process calls into this module before binding a listener.
//! Validation itself stays silent; this is where its outcome is logged and
//! turned into a [`ConfigError`] that aborts startup.

use crate::config::ReceiverConfig;
use edgelog_core::ConfigError;
use edgelog_validation::Validate;
use std::path::Path;
use tracing::{error, info};

/// Validate `config`, logging every problem when it is invalid.
///
/// All problems are logged individually and returned together in
/// [`ConfigError::Invalid`].
pub fn ensure_valid<V>(config: &V) -> Result<(), ConfigError>
where
    V: Validate + ?Sized,
{
    match config.validate() {
        Ok(()) => {
            info!("receiver configuration is valid");
            Ok(())
        }
        Err(errors) => {
            for problem in &errors {
                error!(
                    field = %problem.field,
                    code = %problem.code,
                    "{}",
                    problem.message
                );
            }
            error!(
                problems = errors.len(),
                "receiver configuration is invalid, refusing to start"
            );
            Err(ConfigError::Invalid(errors))
        }
    }
}

/// Load a YAML configuration file and pass it through [`ensure_valid`]
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ReceiverConfig, ConfigError> {
    let config = ReceiverConfig::from_yaml_file(path)?;
    ensure_valid(&config)?;
    Ok(config)
}
