//! Parsed message record.
//!
//! This module provides [`MessageRecord`], the structured result of parsing
//! one `.vmg` container. Every container maps to exactly one record; fields
//! that are missing from the container take defined defaults:
//!
//! | Field | Type | Default |
//! |-------|------|---------|
//! | `telno` | `String` | `""` |
//! | `timestamp` | `DateTime<Utc>` | Unix epoch (`1970-01-01 00:00:00`) |
//! | `body` | `String` | `""` |
//!
//! The body is stored XML-escaped (see [`escape_xml`](crate::parsing::escape_xml)),
//! regardless of which output format it ends up in.
//!
//! # Examples
//!
//! ```
//! use vmgpack::MessageRecord;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2008, 5, 26, 12, 42, 32).unwrap();
//! let record = MessageRecord::new("+15551234567", "Hello &amp; welcome")
//!     .with_timestamp(ts);
//!
//! assert_eq!(record.telno(), "+15551234567");
//! assert_eq!(record.formatted_date(), "2008-05-26 12:42:32");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Date layout shared by all three output formats.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One message extracted from a `.vmg` container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Phone number digits, optionally prefixed with `+`. Empty when the
    /// container has no `TEL:` field.
    pub telno: String,

    /// When the message was sent, with seconds resolution.
    ///
    /// Set to the Unix epoch when the container has no usable date.
    pub timestamp: DateTime<Utc>,

    /// Message text with `&`, `<`, `>` and `"` already escaped.
    pub body: String,
}

impl MessageRecord {
    /// Creates a record with the given phone number and body, dated at the epoch.
    pub fn new(telno: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            telno: telno.into(),
            timestamp: DateTime::UNIX_EPOCH,
            body: body.into(),
        }
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = ts;
        self
    }

    /// Returns the phone number.
    pub fn telno(&self) -> &str {
        &self.telno
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the escaped body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp as `YYYY-MM-DD HH:MM:SS`.
    pub fn formatted_date(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }

    /// Returns `true` if the record carries a phone number.
    pub fn has_telno(&self) -> bool {
        !self.telno.is_empty()
    }

    /// Returns `true` if the timestamp is the epoch fallback.
    pub fn is_epoch(&self) -> bool {
        self.timestamp == DateTime::UNIX_EPOCH
    }
}

impl Default for MessageRecord {
    fn default() -> Self {
        Self::new("", "")
    }
}
