//! VMG container parser.
//!
//! [`VmgParser`] turns one container into one [`MessageRecord`]. Parsing a
//! container never fails because of its contents: a missing `TEL:` gives an
//! empty phone number, a missing or malformed `X-NOK-DT:` gives the Unix
//! epoch (and a warning), a missing `VBODY` block gives an empty body. Only
//! unreadable files and bytes that are not valid UTF-16 are errors.
//!
//! # Example
//!
//! ```rust
//! use vmgpack::parser::VmgParser;
//!
//! let text = "BEGIN:VMSG\nX-NOK-DT:20080526T124232Z\nTEL:+15551234567\n\
//!             BEGIN:VBODY\nDate:26.05.2008 12:42:32\nHello & welcome\nEND:VBODY\nEND:VMSG";
//!
//! let record = VmgParser::new().parse_str(text);
//! assert_eq!(record.telno(), "+15551234567");
//! assert_eq!(record.formatted_date(), "2008-05-26 12:42:32");
//! assert_eq!(record.body(), "Hello &amp; welcome");
//! ```

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::VmgError;
use crate::parsing::{
    DateField, decode_container, escape_xml, extract_body, extract_telno, extract_timestamp,
};
use crate::record::MessageRecord;

/// Label used in diagnostics when the container has no file name.
const IN_MEMORY_SOURCE: &str = "<memory>";

/// Parser for `.vmg` message containers.
///
/// The matchers are compiled once per process, so a parser is free to
/// create and can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct VmgParser;

impl VmgParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses raw container bytes.
    ///
    /// # Errors
    ///
    /// Returns [`VmgError::Decode`] if the bytes are not valid UTF-16.
    pub fn parse(&self, bytes: &[u8]) -> Result<MessageRecord, VmgError> {
        let text = decode_container(bytes)?;
        Ok(self.parse_text(&text, IN_MEMORY_SOURCE))
    }

    /// Parses an already-decoded container.
    pub fn parse_str(&self, text: &str) -> MessageRecord {
        self.parse_text(text.trim(), IN_MEMORY_SOURCE)
    }

    /// Reads and parses one container file.
    ///
    /// # Errors
    ///
    /// Returns [`VmgError::Read`] if the file can't be read and
    /// [`VmgError::Decode`] (carrying the path) if it isn't valid UTF-16.
    pub fn parse_file(&self, path: &Path) -> Result<MessageRecord, VmgError> {
        let bytes = fs::read(path).map_err(|e| VmgError::read(path, e))?;
        let text = decode_container(&bytes).map_err(|e| e.with_path(path))?;
        Ok(self.parse_text(&text, &path.display().to_string()))
    }

    fn parse_text(&self, text: &str, source: &str) -> MessageRecord {
        let telno = extract_telno(text).to_string();

        let date = extract_timestamp(text);
        match &date {
            DateField::Parsed(_) => {}
            DateField::Malformed(raw) => {
                warn!(file = source, value = %raw, "Invalid date format, setting date to epoch");
            }
            DateField::Missing => {
                warn!(file = source, "No date found, setting date to epoch");
            }
        }
        let timestamp = date.or_epoch();

        let body = extract_body(text)
            .map(|raw| escape_xml(raw).into_owned())
            .unwrap_or_default();

        MessageRecord {
            telno,
            timestamp,
            body,
        }
    }
}
