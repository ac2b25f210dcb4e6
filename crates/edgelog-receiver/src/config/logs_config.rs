//! Receiver configuration
//!
//! Describes how the Logpush endpoint listens and how incoming records are
//! mapped. The model is plain data: it is loaded once before startup,
//! checked by [`crate::config::validate_logs_config`], then only read.
//! Empty optional fields are left empty here; consumers substitute the
//! [`ReceiverDefaults`] values, available through the `effective_*`
//! accessors.

use super::defaults::ReceiverDefaults;
use super::{split_host_port, AddrParseError, HostPort, TimestampFormat, TlsServerConfig};
use super::timestamp::UnknownTimestampFormat;
use crate::startup::ensure_valid;
use edgelog_core::{env_or_default, env_var, AppConfigTrait, ConfigError, ConfigSource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const ENV_ENDPOINT: &str = "EDGELOG_ENDPOINT";
pub const ENV_SECRET: &str = "EDGELOG_SECRET";
pub const ENV_TLS_CERT_FILE: &str = "EDGELOG_TLS_CERT_FILE";
pub const ENV_TLS_KEY_FILE: &str = "EDGELOG_TLS_KEY_FILE";
pub const ENV_ATTRIBUTES: &str = "EDGELOG_ATTRIBUTES";
pub const ENV_TIMESTAMP_FIELD: &str = "EDGELOG_TIMESTAMP_FIELD";
pub const ENV_TIMESTAMP_FORMAT: &str = "EDGELOG_TIMESTAMP_FORMAT";
pub const ENV_SEPARATOR: &str = "EDGELOG_SEPARATOR";

/// Settings of the Logpush HTTP endpoint
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    /// `host:port` the listener binds
    pub endpoint: String,

    /// Shared secret expected in the `X-CF-Secret` header
    pub secret: String,

    /// Serve HTTPS with this material when present
    pub tls: Option<TlsServerConfig>,

    /// Provider field name to output attribute name
    pub attributes: HashMap<String, String>,

    /// Provider field holding the record timestamp
    pub timestamp_field: String,

    /// One of `unix`, `unixnano`, `rfc3339`
    pub timestamp_format: String,

    /// Joins nested field path segments when flattening attributes
    pub separator: String,
}

impl fmt::Debug for LogsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.secret.is_empty() { "" } else { "[REDACTED]" };
        f.debug_struct("LogsConfig")
            .field("endpoint", &self.endpoint)
            .field("secret", &secret)
            .field("tls", &self.tls)
            .field("attributes", &self.attributes)
            .field("timestamp_field", &self.timestamp_field)
            .field("timestamp_format", &self.timestamp_format)
            .field("separator", &self.separator)
            .finish()
    }
}

impl LogsConfig {
    pub fn builder() -> LogsConfigBuilder {
        LogsConfigBuilder::default()
    }

    /// Timestamp field a consumer reads, falling back to `EdgeStartTimestamp`
    pub fn effective_timestamp_field(&self) -> &str {
        if self.timestamp_field.is_empty() {
            ReceiverDefaults::TIMESTAMP_FIELD
        } else {
            &self.timestamp_field
        }
    }

    /// Timestamp format a consumer applies; empty means `rfc3339`
    pub fn effective_timestamp_format(&self) -> Result<TimestampFormat, UnknownTimestampFormat> {
        if self.timestamp_format.is_empty() {
            Ok(ReceiverDefaults::TIMESTAMP_FORMAT)
        } else {
            self.timestamp_format.parse()
        }
    }

    pub fn effective_separator(&self) -> &str {
        if self.separator.is_empty() {
            ReceiverDefaults::SEPARATOR
        } else {
            &self.separator
        }
    }

    pub fn has_tls(&self) -> bool {
        self.tls.is_some()
    }

    pub fn host_port(&self) -> Result<HostPort<'_>, AddrParseError> {
        split_host_port(&self.endpoint)
    }

    fn field_is_set(&self, field: &str) -> bool {
        match field {
            "endpoint" => !self.endpoint.is_empty(),
            "secret" => !self.secret.is_empty(),
            "tls.cert_file" => self.tls.as_ref().is_some_and(|t| !t.cert_file.is_empty()),
            "tls.key_file" => self.tls.as_ref().is_some_and(|t| !t.key_file.is_empty()),
            "attributes" => !self.attributes.is_empty(),
            "timestamp_field" => !self.timestamp_field.is_empty(),
            "timestamp_format" => !self.timestamp_format.is_empty(),
            "separator" => !self.separator.is_empty(),
            _ => false,
        }
    }
}

/// Step-by-step construction of a [`LogsConfig`].
///
/// Only the endpoint is required; every other field starts empty.
#[derive(Clone, Default)]
pub struct LogsConfigBuilder {
    endpoint: Option<String>,
    secret: Option<String>,
    tls: Option<TlsServerConfig>,
    attributes: HashMap<String, String>,
    timestamp_field: Option<String>,
    timestamp_format: Option<String>,
    separator: Option<String>,
}

impl LogsConfigBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    pub fn tls(mut self, tls: Option<TlsServerConfig>) -> Self {
        self.tls = tls;
        self
    }

    /// Serve HTTPS with the given certificate and key
    pub fn tls_files(self, cert_file: impl Into<String>, key_file: impl Into<String>) -> Self {
        self.tls(Some(TlsServerConfig::new(cert_file, key_file)))
    }

    /// Replace the whole attribute mapping
    pub fn attributes(mut self, attributes: HashMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Map one provider field onto an output attribute
    pub fn attribute(mut self, provider_field: impl Into<String>, output: impl Into<String>) -> Self {
        self.attributes.insert(provider_field.into(), output.into());
        self
    }

    pub fn timestamp_field(mut self, field: impl Into<String>) -> Self {
        self.timestamp_field = Some(field.into());
        self
    }

    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    pub fn format(self, format: TimestampFormat) -> Self {
        self.timestamp_format(format.as_str())
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Build the configuration; fails only when no endpoint was given.
    ///
    /// The result is not validated.
    pub fn build(self) -> Result<LogsConfig, ConfigError> {
        let endpoint = self.endpoint.ok_or_else(|| {
            ConfigError::missing_required("endpoint", "set an endpoint on the builder")
        })?;

        Ok(LogsConfig {
            endpoint,
            secret: self.secret.unwrap_or_default(),
            tls: self.tls,
            attributes: self.attributes,
            timestamp_field: self.timestamp_field.unwrap_or_default(),
            timestamp_format: self.timestamp_format.unwrap_or_default(),
            separator: self.separator.unwrap_or_default(),
        })
    }
}

impl AppConfigTrait for LogsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let cert_file = env_var(ENV_TLS_CERT_FILE)?;
        let key_file = env_var(ENV_TLS_KEY_FILE)?;
        let tls = if cert_file.is_some() || key_file.is_some() {
            Some(TlsServerConfig::new(
                cert_file.unwrap_or_default(),
                key_file.unwrap_or_default(),
            ))
        } else {
            None
        };

        let attributes = match env_var(ENV_ATTRIBUTES)? {
            Some(raw) => parse_attributes(&raw)?,
            None => HashMap::new(),
        };

        let config = LogsConfig {
            endpoint: env_or_default(ENV_ENDPOINT, "")?,
            secret: env_or_default(ENV_SECRET, "")?,
            tls,
            attributes,
            timestamp_field: env_or_default(ENV_TIMESTAMP_FIELD, "")?,
            timestamp_format: env_or_default(ENV_TIMESTAMP_FORMAT, "")?,
            separator: env_or_default(ENV_SEPARATOR, "")?,
        };

        ensure_valid(&config)?;
        Ok(config)
    }

    fn config_sources(&self) -> HashMap<String, ConfigSource> {
        source_fields()
            .into_iter()
            .map(|(field, var, default)| {
                let source = if std::env::var_os(var).is_some() {
                    ConfigSource::EnvVar(var.to_string())
                } else {
                    ConfigSource::Default(default.to_string())
                };
                (field.to_string(), source)
            })
            .collect()
    }
}

/// Reported fields with their environment variable and consumer default
fn source_fields() -> [(&'static str, &'static str, &'static str); 8] {
    [
        ("endpoint", ENV_ENDPOINT, "none"),
        ("secret", ENV_SECRET, "empty"),
        ("tls.cert_file", ENV_TLS_CERT_FILE, "tls disabled"),
        ("tls.key_file", ENV_TLS_KEY_FILE, "tls disabled"),
        ("attributes", ENV_ATTRIBUTES, "empty mapping"),
        (
            "timestamp_field",
            ENV_TIMESTAMP_FIELD,
            ReceiverDefaults::TIMESTAMP_FIELD,
        ),
        (
            "timestamp_format",
            ENV_TIMESTAMP_FORMAT,
            ReceiverDefaults::TIMESTAMP_FORMAT.as_str(),
        ),
        ("separator", ENV_SEPARATOR, ReceiverDefaults::SEPARATOR),
    ]
}

/// Parse `provider=output` pairs separated by commas
pub fn parse_attributes(raw: &str) -> Result<HashMap<String, String>, ConfigError> {
    let mut attributes = HashMap::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match pair.split_once('=') {
            Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
                attributes.insert(from.trim().to_string(), to.trim().to_string());
            }
            _ => {
                return Err(ConfigError::invalid_value(
                    "attributes",
                    pair,
                    "comma-separated provider_field=attribute pairs",
                ))
            }
        }
    }
    Ok(attributes)
}

/// Top-level configuration document; the receiver settings live under `logs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiverConfig {
    pub logs: LogsConfig,
}

impl ReceiverConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML configuration file. The result is not validated.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading receiver configuration");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Where each `logs` field came from after loading `path`.
    ///
    /// Non-empty fields are attributed to the file; empty ones fall back to
    /// the consumer default.
    pub fn file_sources(&self, path: impl AsRef<Path>) -> HashMap<String, ConfigSource> {
        let path = path.as_ref().display().to_string();
        source_fields()
            .into_iter()
            .map(|(field, _, default)| {
                let source = if self.logs.field_is_set(field) {
                    ConfigSource::File(path.clone())
                } else {
                    ConfigSource::Default(default.to_string())
                };
                (field.to_string(), source)
            })
            .collect()
    }
}
