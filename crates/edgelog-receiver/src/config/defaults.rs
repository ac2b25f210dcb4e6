//! Default configuration values

use super::TimestampFormat;

/// Values consumers substitute for empty configuration fields
pub struct ReceiverDefaults;

impl ReceiverDefaults {
    /// Cloudflare field holding the request start time
    pub const TIMESTAMP_FIELD: &'static str = "EdgeStartTimestamp";
    pub const TIMESTAMP_FORMAT: TimestampFormat = TimestampFormat::Rfc3339;
    pub const SEPARATOR: &'static str = ".";
}
