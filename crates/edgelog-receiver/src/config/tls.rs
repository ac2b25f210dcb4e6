use serde::{Deserialize, Serialize};

/// TLS material for the HTTPS listener.
///
/// Only the file references are held here; nothing is read or checked on disk.
/// An empty string means "not specified".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsServerConfig {
    /// PEM certificate chain presented by the listener
    pub cert_file: String,
    /// PEM private key matching `cert_file`
    pub key_file: String,
    /// CA bundle used to verify the server chain
    pub ca_file: Option<String>,
    /// CA bundle used to verify client certificates (enables mTLS)
    pub client_ca_file: Option<String>,
    /// Lowest accepted protocol version, e.g. `"1.2"`
    pub min_version: Option<String>,
}

impl TlsServerConfig {
    pub fn new(cert_file: impl Into<String>, key_file: impl Into<String>) -> Self {
        Self {
            cert_file: cert_file.into(),
            key_file: key_file.into(),
            ..Self::default()
        }
    }

    pub fn with_client_ca(mut self, client_ca_file: impl Into<String>) -> Self {
        self.client_ca_file = Some(client_ca_file.into());
        self
    }

    pub fn with_min_version(mut self, min_version: impl Into<String>) -> Self {
        self.min_version = Some(min_version.into());
        self
    }

    pub fn requires_client_auth(&self) -> bool {
        self.client_ca_file.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_auth_follows_client_ca() {
        let tls = TlsServerConfig::new("server.crt", "server.key");
        assert!(!tls.requires_client_auth());
        assert!(tls.min_version.is_none());

        let tls = tls.with_client_ca("clients.pem").with_min_version("1.3");
        assert!(tls.requires_client_auth());
        assert_eq!(tls.client_ca_file.as_deref(), Some("clients.pem"));
        assert_eq!(tls.min_version.as_deref(), Some("1.3"));
        assert!(tls.ca_file.is_none());
    }
}
