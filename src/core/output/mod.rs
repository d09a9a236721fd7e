//! Output format writers.
//!
//! This module provides writers for the three output formats:
//! - [`write_xml`] / [`to_xml`] / [`render_xml`] - single `<messages>` document
//! - [`write_csv`] / [`to_csv`] / [`render_csv`] - `telno,date,body` table - requires `csv-output` feature
//! - [`write_text`] / [`to_text`] / [`render_text`] - human-readable transcript
//!
//! Every writer takes an already ordered slice of records and produces its
//! artifact in one pass. `write_*` writes the file once, `to_*` returns a
//! `String`, and `render_*` writes into any [`std::io::Write`] sink.
//!
//! # Example
//!
//! ```rust
//! # fn main() -> vmgpack::Result<()> {
//! use vmgpack::core::output::{to_text, to_xml};
//! use vmgpack::MessageRecord;
//!
//! let records = vec![
//!     MessageRecord::new("+15551234567", "Hello"),
//!     MessageRecord::new("", "No number"),
//! ];
//!
//! let xml = to_xml(&records)?;
//! assert_eq!(xml.matches("<message>").count(), 2);
//!
//! // The transcript skips records without a phone number
//! let text = to_text(&records)?;
//! assert!(!text.contains("No number"));
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod text_writer;
mod xml_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, render_csv, to_csv, write_csv};
pub use text_writer::{render_text, to_text, write_text};
pub use xml_writer::{render_xml, to_xml, write_xml};
