//! Shared parsing utilities.
//!
//! This module contains the pattern matching and text helpers used by
//! [`VmgParser`](crate::parser::VmgParser). They are exposed so callers can
//! work on already-decoded text or reuse the escaping rules.

pub mod vmg;

// Re-export commonly used items
pub use vmg::{
    DateField, NOKIA_DATE_FORMAT, decode_container, escape_xml, extract_body, extract_telno,
    extract_timestamp, parse_nokia_timestamp,
};
