//! # vmgpack
//!
//! A Rust library for converting Nokia `.vmg` message archives into XML, CSV,
//! and plain-text transcripts.
//!
//! ## Overview
//!
//! A `.vmg` file is a UTF-16 encoded, vCard-like container holding a single
//! SMS. vmgpack pulls three fields out of each container:
//! - **Phone number** - the `TEL:` field
//! - **Timestamp** - the `X-NOK-DT:` field (`YYYYMMDDTHHMMSSZ`)
//! - **Body** - the text of the `BEGIN:VBODY … END:VBODY` block
//!
//! Missing fields never abort a run: the number and body default to empty
//! strings, the timestamp defaults to the Unix epoch. Only unreadable files
//! and invalid UTF-16 are errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vmgpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Parse every .vmg in a directory, ordered by timestamp
//!     let records = build_collection("backup/inbox")?;
//!
//!     write_xml(&records, "output.xml")?;
//!     write_csv(&records, "output.csv")?;
//!     write_text(&records, "output.txt")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Parsing a single container
//!
//! ```rust
//! use vmgpack::parser::VmgParser;
//!
//! let bytes: Vec<u8> = "TEL:+15551234567\r\nX-NOK-DT:20080526T124232Z"
//!     .encode_utf16()
//!     .flat_map(u16::to_le_bytes)
//!     .collect();
//!
//! let record = VmgParser::new().parse(&bytes)?;
//! assert_eq!(record.telno(), "+15551234567");
//! assert_eq!(record.formatted_date(), "2008-05-26 12:42:32");
//! assert_eq!(record.body(), "");
//! # Ok::<(), vmgpack::VmgError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`VmgParser`](parser::VmgParser), one container → one record
//! - [`parsing`] - decoding, field extraction and XML escaping helpers
//! - [`record`] - [`MessageRecord`]
//! - [`core`] - collection building and output
//!   - [`core::collection`] - [`build_collection`](core::build_collection), [`convert`](core::convert)
//!   - [`core::processor`] - [`sort_by_timestamp`](core::sort_by_timestamp), [`CollectionStats`](core::CollectionStats)
//!   - [`core::output`] - XML, CSV and text writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and dispatch helpers
//! - [`config`] - [`ConvertConfig`](config::ConvertConfig)
//! - [`cli`] - CLI arguments (requires the `cli` feature)
//! - [`error`] - Unified error types ([`VmgError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{Result, VmgError};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use vmgpack::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::MessageRecord;

    // Error types
    pub use crate::error::{Result, VmgError};

    // Parsing
    pub use crate::parser::VmgParser;

    // Configuration
    pub use crate::config::ConvertConfig;

    // Collection and processing
    pub use crate::core::collection::{build_collection, convert};
    pub use crate::core::processor::{CollectionStats, sort_by_timestamp};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    pub use crate::core::output::{to_text, to_xml, write_text, write_xml};

    // Format selection
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
