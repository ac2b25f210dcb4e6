//! Timestamp parsing modes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the provider timestamp field is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// Seconds since the Unix epoch
    Unix,
    /// Nanoseconds since the Unix epoch
    UnixNano,
    /// RFC 3339 date-time string
    #[default]
    Rfc3339,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown timestamp format {value:?}")]
pub struct UnknownTimestampFormat {
    pub value: String,
}

impl TimestampFormat {
    pub const ALL: [TimestampFormat; 3] = [
        TimestampFormat::Unix,
        TimestampFormat::UnixNano,
        TimestampFormat::Rfc3339,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampFormat::Unix => "unix",
            TimestampFormat::UnixNano => "unixnano",
            TimestampFormat::Rfc3339 => "rfc3339",
        }
    }

    /// Accepted names joined for error messages, e.g. `unix, unixnano, rfc3339`
    pub fn allowed_names() -> String {
        Self::ALL
            .iter()
            .map(TimestampFormat::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for TimestampFormat {
    type Err = UnknownTimestampFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unix" => Ok(TimestampFormat::Unix),
            "unixnano" => Ok(TimestampFormat::UnixNano),
            "rfc3339" => Ok(TimestampFormat::Rfc3339),
            _ => Err(UnknownTimestampFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
