//! # edgelog-receiver
//!
//! Configuration for an HTTP(S) endpoint receiving Cloudflare Logpush
//! batches, and the gate that checks it before the endpoint starts.
//!
//! ```no_run
//! use edgelog_receiver::{load_and_validate, init_logging, LoggingConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     init_logging(LoggingConfig::production())?;
//!     let config = load_and_validate("receiver.yaml")?;
//!     println!("listening on {}", config.logs.endpoint);
//!     Ok(())
//! }
//! ```
//!
//! Validation reports every problem at once:
//!
//! ```
//! use edgelog_receiver::{LogsConfig, TlsServerConfig, Validate};
//!
//! let config = LogsConfig {
//!     endpoint: "localhost:4318".to_string(),
//!     tls: Some(TlsServerConfig::default()),
//!     ..LogsConfig::default()
//! };
//! let errors = config.validate().unwrap_err();
//! assert_eq!(
//!     errors.messages(),
//!     vec![
//!         "tls was configured, but no key file was specified",
//!         "tls was configured, but no cert file was specified",
//!     ]
//! );
//! ```

pub mod config;
pub mod logging;
pub mod startup;

pub use config::{
    split_host_port, validate_logs_config, AddrParseError, ConfigProblem, HostPort, LogsConfig,
    LogsConfigBuilder, ReceiverConfig, ReceiverDefaults, TimestampFormat, TlsServerConfig,
};
pub use logging::{init_logging, log_startup_info, LoggingConfig, LoggingConfigBuilder};
pub use startup::{ensure_valid, load_and_validate};

pub use edgelog_core::{AppConfigTrait, ConfigError, ConfigSource};
pub use edgelog_validation::{Validate, ValidationError, ValidationErrors, ValidationResult};
