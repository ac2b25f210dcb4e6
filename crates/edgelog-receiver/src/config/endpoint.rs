//! `host:port` endpoint grammar
//!
//! Accepted forms:
//!
//! - `host:port`, split on the rightmost colon; `host` may not contain `:`,
//!   `[` or `]`
//! - `[host]:port`, where `host` is anything without brackets (IPv6 literals,
//!   zoned addresses such as `fe80::1%eth0`)
//!
//! The host may be empty (`:4318` listens on every interface). The port may be
//! empty, a decimal number fitting in 16 bits, or a service name: an ASCII
//! letter followed by letters, digits or `-`, not ending in `-`.

use thiserror::Error;

/// Why an endpoint could not be split into host and port
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddrParseError {
    #[error("missing port in address")]
    MissingPort,

    #[error("too many colons in address")]
    TooManyColons,

    #[error("missing ']' in address")]
    MissingBracket,

    #[error("unexpected '{0}' in address")]
    UnexpectedBracket(char),

    #[error("invalid port {0:?}")]
    InvalidPort(String),
}

/// Borrowed halves of a split endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPort<'a> {
    /// Host without brackets
    pub host: &'a str,
    pub port: &'a str,
}

impl HostPort<'_> {
    /// The numeric port, when the port is given as a number
    pub fn port_number(&self) -> Option<u16> {
        self.port.parse().ok()
    }

    /// True when the host is empty and the listener binds every interface
    pub fn is_wildcard_host(&self) -> bool {
        self.host.is_empty()
    }
}

/// Split `addr` into host and port.
pub fn split_host_port(addr: &str) -> Result<HostPort<'_>, AddrParseError> {
    let colon = addr.rfind(':').ok_or(AddrParseError::MissingPort)?;

    // Offsets from which stray brackets are rejected.
    let (host, open_from, close_from) = if addr.starts_with('[') {
        let end = addr.find(']').ok_or(AddrParseError::MissingBracket)?;
        let after = end + 1;
        if after == addr.len() {
            return Err(AddrParseError::MissingPort);
        }
        if after != colon {
            return Err(if addr.as_bytes().get(after) == Some(&b':') {
                AddrParseError::TooManyColons
            } else {
                AddrParseError::MissingPort
            });
        }
        (&addr[1..end], 1, after)
    } else {
        let host = &addr[..colon];
        if host.contains(':') {
            return Err(AddrParseError::TooManyColons);
        }
        (host, 0, 0)
    };

    if addr[open_from..].contains('[') {
        return Err(AddrParseError::UnexpectedBracket('['));
    }
    if addr[close_from..].contains(']') {
        return Err(AddrParseError::UnexpectedBracket(']'));
    }

    let port = &addr[colon + 1..];
    check_port(port)?;

    Ok(HostPort { host, port })
}

fn check_port(port: &str) -> Result<(), AddrParseError> {
    if port.is_empty() {
        return Ok(());
    }

    let valid = if port.bytes().all(|b| b.is_ascii_digit()) {
        port.parse::<u16>().is_ok()
    } else {
        is_service_name(port)
    };

    if valid {
        Ok(())
    } else {
        Err(AddrParseError::InvalidPort(port.to_string()))
    }
}

fn is_service_name(port: &str) -> bool {
    let mut bytes = port.bytes();
    let starts_with_letter = bytes.next().is_some_and(|b| b.is_ascii_alphabetic());
    starts_with_letter
        && port.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && !port.ends_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(addr: &str) -> (&str, &str) {
        let hp = split_host_port(addr).unwrap();
        (hp.host, hp.port)
    }

    #[test]
    fn test_plain_host_port() {
        assert_eq!(split("0.0.0.0:4318"), ("0.0.0.0", "4318"));
        assert_eq!(split("localhost:4318"), ("localhost", "4318"));
        assert_eq!(split("logs.example.com:443"), ("logs.example.com", "443"));
    }

    #[test]
    fn test_bracketed_ipv6() {
        assert_eq!(split("[::1]:9000"), ("::1", "9000"));
        assert_eq!(split("[::]:4318"), ("::", "4318"));
        assert_eq!(split("[fe80::1%eth0]:80"), ("fe80::1%eth0", "80"));
        assert_eq!(split("[localhost]:80"), ("localhost", "80"));
    }

    #[test]
    fn test_empty_host_and_port() {
        let hp = split_host_port(":4318").unwrap();
        assert!(hp.is_wildcard_host());
        assert_eq!(hp.port_number(), Some(4318));

        assert_eq!(split("localhost:"), ("localhost", ""));
        assert_eq!(split(":"), ("", ""));
        assert_eq!(split("[]:80"), ("", "80"));
    }

    #[test]
    fn test_service_name_port() {
        let hp = split_host_port("localhost:https").unwrap();
        assert_eq!(hp.port, "https");
        assert_eq!(hp.port_number(), None);
        assert!(split_host_port("localhost:http-alt").is_ok());
    }

    #[test]
    fn test_missing_port() {
        assert_eq!(split_host_port("badaddr"), Err(AddrParseError::MissingPort));
        assert_eq!(split_host_port("[::1]"), Err(AddrParseError::MissingPort));
        assert_eq!(split_host_port("[::1]x80"), Err(AddrParseError::MissingPort));
    }

    #[test]
    fn test_too_many_colons() {
        assert_eq!(split_host_port("::1:80"), Err(AddrParseError::TooManyColons));
        assert_eq!(
            split_host_port("[::1]::80"),
            Err(AddrParseError::TooManyColons)
        );
        assert_eq!(split_host_port("a:b:c"), Err(AddrParseError::TooManyColons));
    }

    #[test]
    fn test_bracket_errors() {
        assert_eq!(split_host_port("[::1:80"), Err(AddrParseError::MissingBracket));
        assert_eq!(
            split_host_port("host]:80"),
            Err(AddrParseError::UnexpectedBracket(']'))
        );
        assert_eq!(
            split_host_port("ho[st:80"),
            Err(AddrParseError::UnexpectedBracket('['))
        );
        assert_eq!(
            split_host_port("[[::1]:80"),
            Err(AddrParseError::UnexpectedBracket('['))
        );
    }

    #[test]
    fn test_invalid_ports() {
        assert_eq!(
            split_host_port("localhost:65536"),
            Err(AddrParseError::InvalidPort("65536".to_string()))
        );
        for port in ["4318x", "-1", "http-", "80 ", "8 0"] {
            let addr = format!("localhost:{}", port);
            assert_eq!(
                split_host_port(&addr),
                Err(AddrParseError::InvalidPort(port.to_string())),
                "port {:?} should be rejected",
                port
            );
        }
        assert!(split_host_port("localhost:65535").is_ok());
        assert!(split_host_port("localhost:0").is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AddrParseError::MissingPort.to_string(),
            "missing port in address"
        );
        assert_eq!(
            AddrParseError::InvalidPort("x!".to_string()).to_string(),
            "invalid port \"x!\""
        );
    }
}
