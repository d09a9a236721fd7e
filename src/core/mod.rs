//! Core processing logic for vmgpack.
//!
//! This module contains:
//! - [`collection`] - Directory scanning and record aggregation
//! - [`processor`] - Timestamp ordering and statistics
//! - [`output`] - Format writers (XML, CSV, text)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vmgpack::core::{build_collection, write_xml, write_text};
//!
//! let records = build_collection("backup")?;
//! write_xml(&records, "output.xml")?;
//! write_text(&records, "output.txt")?;
//! # Ok::<(), vmgpack::VmgError>(())
//! ```

pub mod collection;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use collection::{
    build_collection, build_collection_with_extension, convert, discover_containers,
};
pub use processor::{CollectionStats, sort_by_timestamp};

// Re-export MessageRecord from the crate root
pub use crate::MessageRecord;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{render_csv, to_csv, write_csv};
pub use output::{render_text, render_xml, to_text, to_xml, write_text, write_xml};
