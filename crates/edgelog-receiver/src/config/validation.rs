//! Startup validation of the receiver configuration
//!
//! Every check runs on every call and each failure is recorded, so a single
//! pass reports all defects of a configuration. Validation is pure: it reads
//! nothing but its argument and does not log.

use super::{split_host_port, AddrParseError, LogsConfig, ReceiverConfig, TimestampFormat};
use edgelog_validation::{append, Validate, ValidationError, ValidationResult};
use serde_json::json;
use thiserror::Error;

/// One configuration defect
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigProblem {
    #[error("an endpoint must be specified")]
    MissingEndpoint,

    #[error(
        "invalid timestamp_format {value:?}, must be one of: {}",
        TimestampFormat::allowed_names()
    )]
    InvalidTimestampFormat { value: String },

    #[error("tls was configured, but no key file was specified")]
    MissingTlsKeyFile,

    #[error("tls was configured, but no cert file was specified")]
    MissingTlsCertFile,

    #[error("failed to split endpoint {endpoint:?} into 'host:port' pair: {source}")]
    MalformedEndpoint {
        endpoint: String,
        #[source]
        source: AddrParseError,
    },
}

impl ConfigProblem {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigProblem::MissingEndpoint => "missing_endpoint",
            ConfigProblem::InvalidTimestampFormat { .. } => "invalid_timestamp_format",
            ConfigProblem::MissingTlsKeyFile | ConfigProblem::MissingTlsCertFile => {
                "incomplete_tls"
            }
            ConfigProblem::MalformedEndpoint { .. } => "malformed_endpoint",
        }
    }

    /// Path of the offending field in the configuration file
    pub fn field(&self) -> &'static str {
        match self {
            ConfigProblem::MissingEndpoint | ConfigProblem::MalformedEndpoint { .. } => {
                "logs.endpoint"
            }
            ConfigProblem::InvalidTimestampFormat { .. } => "logs.timestamp_format",
            ConfigProblem::MissingTlsKeyFile => "logs.tls.key_file",
            ConfigProblem::MissingTlsCertFile => "logs.tls.cert_file",
        }
    }
}

impl From<ConfigProblem> for ValidationError {
    fn from(problem: ConfigProblem) -> Self {
        let error = ValidationError::with_code(problem.field(), problem.to_string(), problem.code());
        match problem {
            ConfigProblem::InvalidTimestampFormat { value } => error.context(json!({
                "value": value,
                "allowed": TimestampFormat::ALL.map(|f| f.as_str()),
            })),
            ConfigProblem::MalformedEndpoint { endpoint, source } => error.context(json!({
                "endpoint": endpoint,
                "reason": source.to_string(),
            })),
            _ => error,
        }
    }
}

impl LogsConfig {
    /// Every problem with this configuration, in check order.
    ///
    /// 1. endpoint presence
    /// 2. timestamp format
    /// 3. TLS key file, then TLS cert file
    /// 4. endpoint syntax (skipped when the endpoint is empty)
    pub fn problems(&self) -> Vec<ConfigProblem> {
        let mut problems = Vec::new();

        if self.endpoint.is_empty() {
            problems.push(ConfigProblem::MissingEndpoint);
        }

        if !self.timestamp_format.is_empty()
            && self.timestamp_format.parse::<TimestampFormat>().is_err()
        {
            problems.push(ConfigProblem::InvalidTimestampFormat {
                value: self.timestamp_format.clone(),
            });
        }

        if let Some(tls) = &self.tls {
            if tls.key_file.is_empty() {
                problems.push(ConfigProblem::MissingTlsKeyFile);
            }
            if tls.cert_file.is_empty() {
                problems.push(ConfigProblem::MissingTlsCertFile);
            }
        }

        if !self.endpoint.is_empty() {
            if let Err(source) = split_host_port(&self.endpoint) {
                problems.push(ConfigProblem::MalformedEndpoint {
                    endpoint: self.endpoint.clone(),
                    source,
                });
            }
        }

        problems
    }
}

/// Validate one receiver configuration
pub fn validate_logs_config(config: &LogsConfig) -> ValidationResult<()> {
    config.problems().into_iter().fold(Ok(()), append)
}

impl Validate for LogsConfig {
    fn validate(&self) -> ValidationResult<()> {
        validate_logs_config(self)
    }
}

impl Validate for ReceiverConfig {
    fn validate(&self) -> ValidationResult<()> {
        validate_logs_config(&self.logs)
    }
}
