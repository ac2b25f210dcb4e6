//! # Logging setup
//!
//! `tracing` subscriber initialisation for processes embedding the receiver,
//! with plain text or JSON output.

use crate::config::LogsConfig;
use serde_json::json;
use service_builder::builder;
use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
#[builder]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "warn")
    #[builder(getter, default = "\"info\".to_string()")]
    pub level: String,
    /// Enable JSON structured logging (vs plain text)
    #[builder(getter, default)]
    pub json_format: bool,
    /// Include file and line number information
    #[builder(default)]
    pub include_location: bool,
    /// Environment filter (e.g. "edgelog_receiver=debug")
    #[builder(optional)]
    pub env_filter: Option<String>,
    /// Service name to include in the initialization record
    #[builder(getter, optional)]
    pub service_name: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            include_location: false,
            env_filter: None,
            service_name: None,
        }
    }
}

impl LoggingConfig {
    /// Create production logging configuration
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            json_format: true,
            include_location: false,
            env_filter: Some("edgelog_receiver=info,edgelog_core=warn".to_string()),
            service_name: None,
        }
    }

    /// Create development logging configuration
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            json_format: false,
            include_location: true,
            env_filter: Some("edgelog_receiver=debug,edgelog_core=debug".to_string()),
            service_name: None,
        }
    }

    pub fn with_service(mut self, name: &str) -> Self {
        self.service_name = Some(name.to_string());
        self
    }

    /// Set environment filter
    pub fn with_env_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn filter_directives(&self) -> &str {
        self.env_filter.as_deref().unwrap_or(&self.level)
    }

    fn init_record(&self) -> serde_json::Value {
        let mut record = json!({
            "message": "Logging initialized",
            "config": {
                "level": self.level,
                "json_format": self.json_format,
                "include_location": self.include_location,
            }
        });
        if let Some(name) = &self.service_name {
            record["service_name"] = json!(name);
        }
        record
    }
}

impl LoggingConfigBuilder {
    /// Filter directives replacing the plain level, e.g. `edgelog_receiver=trace`
    pub fn directives(self, filter: impl Into<String>) -> Self {
        self.env_filter(Some(filter.into()))
    }

    pub fn service(self, name: impl Into<String>) -> Self {
        self.service_name(Some(name.into()))
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Fails if a global
/// subscriber is already set.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(config.filter_directives()))?;

    let layer = Layer::new()
        .with_writer(io::stdout)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    if config.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()?;
    }

    tracing::info!(target: "edgelog::logging", "{}", config.init_record());

    Ok(())
}

/// Log the settings the receiver is about to start with. The secret is never logged.
pub fn log_startup_info(service_name: &str, config: &LogsConfig) {
    let startup_info = json!({
        "event": "receiver_startup",
        "service": service_name,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoint": config.endpoint,
        "tls": config.has_tls(),
        "attributes": config.attributes.len(),
        "timestamp_field": config.effective_timestamp_field(),
        "timestamp_format": config.effective_timestamp_format().map(|f| f.as_str()).unwrap_or("invalid"),
        "pid": std::process::id(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    tracing::info!("{}", startup_info);
}
