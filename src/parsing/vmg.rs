//! VMG container parsing utilities.
//!
//! A `.vmg` file is a vCard/vCalendar-like text blob stored as UTF-16:
//!
//! ```text
//! BEGIN:VMSG
//! VERSION:1.1
//! X-IRMC-STATUS:READ
//! X-IRMC-BOX:INBOX
//! X-NOK-DT:20080526T124232Z
//! BEGIN:VCARD
//! VERSION:3.0
//! TEL:+15551234567
//! END:VCARD
//! BEGIN:VENV
//! BEGIN:VBODY
//! Date:26.05.2008 12:42:32
//! Hello & welcome
//! END:VBODY
//! END:VENV
//! END:VMSG
//! ```
//!
//! Only three things are extracted: the `TEL:` number, the `X-NOK-DT:`
//! timestamp and the text of the `VBODY` block. Everything else is ignored.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use regex::Regex;

use crate::error::VmgError;

/// Layout of the `X-NOK-DT:` value, e.g. `20080526T124232Z`.
pub const NOKIA_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// UTF-16 LE BOM: FF FE
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
/// UTF-16 BE BOM: FE FF
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

static TEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TEL:(\+?\d+)").expect("TEL pattern is valid"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"X-NOK-DT:([\dTZ]+)").expect("X-NOK-DT pattern is valid"));

// The Date: line may use dots or slashes between day, month and year.
static BODY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)BEGIN:VBODY\s*Date:[\d./: ]+\s*(.*?)\s*END:VBODY")
        .expect("VBODY pattern is valid")
});

/// Outcome of looking for the `X-NOK-DT:` field.
///
/// Malformed and missing dates both end up as the epoch in the record, but
/// they are reported with different diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateField {
    /// The field was present and matched [`NOKIA_DATE_FORMAT`].
    Parsed(DateTime<Utc>),
    /// The field was present but its value didn't parse.
    Malformed(String),
    /// No `X-NOK-DT:` field in the container.
    Missing,
}

impl DateField {
    /// Returns the parsed timestamp, or the Unix epoch.
    pub fn or_epoch(&self) -> DateTime<Utc> {
        match self {
            DateField::Parsed(ts) => *ts,
            DateField::Malformed(_) | DateField::Missing => DateTime::UNIX_EPOCH,
        }
    }
}

/// Decodes raw container bytes as UTF-16 and trims surrounding whitespace.
///
/// A byte-order mark selects the byte order and is dropped. Without one the
/// data is read as little-endian, which is what Nokia PC Suite writes.
///
/// # Errors
///
/// Returns [`VmgError::Decode`] for an odd number of bytes or an unpaired
/// surrogate. The error carries no path; callers attach one.
pub fn decode_container(bytes: &[u8]) -> Result<String, VmgError> {
    let (encoding, data): (&'static Encoding, &[u8]) =
        if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
            (UTF_16LE, rest)
        } else if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
            (UTF_16BE, rest)
        } else {
            (UTF_16LE, bytes)
        };

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(data)
        .ok_or_else(|| {
            VmgError::decode(
                format!(
                    "invalid {} sequence ({} bytes)",
                    encoding.name(),
                    data.len()
                ),
                None,
            )
        })?;

    Ok(text.trim().to_string())
}

/// Extracts the phone number following `TEL:`.
///
/// Returns an empty string when there is no `TEL:` field.
pub fn extract_telno(text: &str) -> &str {
    TEL_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Extracts and parses the `X-NOK-DT:` timestamp.
pub fn extract_timestamp(text: &str) -> DateField {
    let Some(raw) = DATE_RE.captures(text).and_then(|caps| caps.get(1)) else {
        return DateField::Missing;
    };

    match parse_nokia_timestamp(raw.as_str()) {
        Some(ts) => DateField::Parsed(ts),
        None => DateField::Malformed(raw.as_str().to_string()),
    }
}

/// Parses a `YYYYMMDDTHHMMSSZ` value.
///
/// Seconds run from `00` to `59`; a leap second (`60`) is rejected.
pub fn parse_nokia_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, NOKIA_DATE_FORMAT)
        .ok()
        .filter(|naive| naive.nanosecond() < 1_000_000_000)
        .map(|naive| naive.and_utc())
}

/// Extracts the raw (unescaped) text of the `VBODY` block.
///
/// Whitespace between the `Date:` line and the text, and before
/// `END:VBODY`, is not part of the body. Trailing blank lines inside the
/// block are dropped too, so `"Hello\r\n\r\nEND:VBODY"` yields `"Hello"`
/// rather than keeping the line breaks.
pub fn extract_body(text: &str) -> Option<&str> {
    BODY_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Escapes `&`, `<`, `>` and `"` as XML entities.
///
/// `&` goes first so entities produced by later steps aren't escaped twice.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;"),
    )
}
