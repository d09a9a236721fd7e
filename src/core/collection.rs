//! Directory aggregation.
//!
//! Reads every container in a directory, parses it, and returns the records
//! ordered by timestamp. Each output target builds its own collection; nothing
//! is cached between runs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{ConvertConfig, DEFAULT_EXTENSION};
use crate::core::processor::{CollectionStats, sort_by_timestamp};
use crate::error::VmgError;
use crate::format::{OutputFormat, write_to_format};
use crate::parser::VmgParser;
use crate::record::MessageRecord;

/// Lists the container files directly inside `dir`.
///
/// A file qualifies when its name ends with `.{extension}` (case-sensitive)
/// and doesn't start with a dot. Subdirectories are not descended into.
/// Paths are returned sorted by file name so runs are reproducible.
pub fn discover_containers(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, VmgError> {
    let suffix = format!(".{extension}");
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!(path = %path.display(), "Skipping non UTF-8 file name");
            continue;
        };
        if name.starts_with('.') || !name.ends_with(&suffix) || !path.is_file() {
            continue;
        }
        paths.push(path);
    }

    paths.sort();
    Ok(paths)
}

/// Parses every `.vmg` container in `dir` and orders the records by timestamp.
///
/// # Errors
///
/// Fails on the first container that can't be read or decoded; partial
/// results are discarded.
pub fn build_collection(dir: impl AsRef<Path>) -> Result<Vec<MessageRecord>, VmgError> {
    build_collection_with_extension(dir.as_ref(), DEFAULT_EXTENSION)
}

/// Same as [`build_collection`], for containers with another extension.
pub fn build_collection_with_extension(
    dir: &Path,
    extension: &str,
) -> Result<Vec<MessageRecord>, VmgError> {
    let parser = VmgParser::new();
    let mut records = Vec::new();

    for path in discover_containers(dir, extension)? {
        info!(file = %path.display(), "Processing file");
        let record = parser.parse_file(&path)?;
        info!(
            file = %path.display(),
            telno = %record.telno,
            date = %record.formatted_date(),
            body = %record.body,
            "Extracted data"
        );
        records.push(record);
    }

    sort_by_timestamp(&mut records);
    Ok(records)
}

/// Builds a fresh collection from the configured directory and writes it as
/// `format` to the configured path.
///
/// # Example
///
/// ```rust,no_run
/// use vmgpack::config::ConvertConfig;
/// use vmgpack::core::convert;
/// use vmgpack::format::OutputFormat;
///
/// let config = ConvertConfig::new().with_input_dir("backup");
/// let stats = convert(&config, OutputFormat::Text)?;
/// println!("{} of {} messages written", stats.written, stats.total);
/// # Ok::<(), vmgpack::VmgError>(())
/// ```
pub fn convert(config: &ConvertConfig, format: OutputFormat) -> Result<CollectionStats, VmgError> {
    let records = build_collection_with_extension(&config.input_dir, &config.extension)?;
    write_to_format(&records, config.output_path(format), format)?;
    Ok(CollectionStats::from_records(&records, format))
}
