//! Output format selection.
//!
//! [`OutputFormat`] is the tag that picks one of the three renderers in
//! [`core::output`](crate::core::output). [`write_to_format`],
//! [`to_format_string`] and [`render`] dispatch on it.
//!
//! # Example
//!
//! ```rust
//! # fn example() -> vmgpack::Result<()> {
//! use vmgpack::format::{OutputFormat, to_format_string};
//! use vmgpack::MessageRecord;
//!
//! let records = vec![MessageRecord::new("+15551234567", "Hello!")];
//!
//! let xml = to_format_string(&records, OutputFormat::Xml)?;
//! assert!(xml.starts_with("<messages>"));
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("output.txt")?;
//! assert_eq!(format, OutputFormat::Text);
//! # Ok(())
//! # }
//! ```

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VmgError;
use crate::record::MessageRecord;

/// Output format for converted archives.
///
/// - [`Xml`](OutputFormat::Xml) - one `<messages>` document
/// - [`Csv`](OutputFormat::Csv) - `telno,date,body` table
/// - [`Text`](OutputFormat::Text) - readable transcript, skips records without a number
///
/// # Example
///
/// ```rust
/// use vmgpack::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("txt").unwrap();
/// assert_eq!(format, OutputFormat::Text);
/// assert_eq!(format.default_filename(), "output.txt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// XML document with a single `<messages>` root
    #[default]
    Xml,

    /// Comma-separated values with a `telno,date,body` header
    Csv,

    /// Plain-text transcript
    #[serde(alias = "txt")]
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use vmgpack::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Xml.extension(), "xml");
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }

    /// Returns the fixed artifact name, `output.<extension>`.
    pub fn default_filename(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "output.xml",
            OutputFormat::Csv => "output.csv",
            OutputFormat::Text => "output.txt",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["xml", "csv", "text", "txt"]
    }

    /// Returns all available formats, in the order the CLI writes them.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Xml, OutputFormat::Csv, OutputFormat::Text]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "application/xml",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Text => "text/plain",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vmgpack::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("archive.xml").unwrap();
    /// assert_eq!(format, OutputFormat::Xml);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VmgError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "csv" => Ok(OutputFormat::Csv),
            "txt" | "text" => Ok(OutputFormat::Text),
            _ => Err(VmgError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: xml, csv, txt",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Xml => write!(f, "XML"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "csv" => Ok(OutputFormat::Csv),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

#[cfg(not(feature = "csv-output"))]
fn csv_unavailable() -> VmgError {
    VmgError::invalid_format(
        "output",
        "Output format CSV requires the 'csv-output' feature to be enabled",
    )
}

/// Renders records in the given format into any writer.
pub fn render<W: Write>(
    records: &[MessageRecord],
    format: OutputFormat,
    writer: W,
) -> Result<(), VmgError> {
    match format {
        OutputFormat::Xml => crate::core::output::render_xml(records, writer),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::render_csv(records, writer),
        #[cfg(not(feature = "csv-output"))]
        OutputFormat::Csv => Err(csv_unavailable()),
        OutputFormat::Text => crate::core::output::render_text(records, writer),
    }
}

/// Writes records to a file in the specified format.
///
/// # Example
///
/// ```rust,no_run
/// # fn example() -> vmgpack::Result<()> {
/// use vmgpack::format::{OutputFormat, write_to_format};
/// use vmgpack::MessageRecord;
///
/// let records = vec![MessageRecord::new("+15551234567", "Hello!")];
///
/// write_to_format(&records, "output.xml", OutputFormat::Xml)?;
/// write_to_format(&records, "output.csv", OutputFormat::Csv)?;
/// write_to_format(&records, "output.txt", OutputFormat::Text)?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    records: &[MessageRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), VmgError> {
    match format {
        OutputFormat::Xml => crate::core::output::write_xml(records, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path),
        #[cfg(not(feature = "csv-output"))]
        OutputFormat::Csv => Err(csv_unavailable()),
        OutputFormat::Text => crate::core::output::write_text(records, path),
    }
}

/// Converts records to a string in the specified format.
pub fn to_format_string(
    records: &[MessageRecord],
    format: OutputFormat,
) -> Result<String, VmgError> {
    match format {
        OutputFormat::Xml => crate::core::output::to_xml(records),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records),
        #[cfg(not(feature = "csv-output"))]
        OutputFormat::Csv => Err(csv_unavailable()),
        OutputFormat::Text => crate::core::output::to_text(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("xml").unwrap(), OutputFormat::Xml);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("XML").unwrap(), OutputFormat::Xml);
        assert!(OutputFormat::from_str("json").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Xml.to_string(), "XML");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
        assert_eq!(OutputFormat::Text.to_string(), "Text");
    }

    #[test]
    fn test_format_default_filename() {
        assert_eq!(OutputFormat::Xml.default_filename(), "output.xml");
        assert_eq!(OutputFormat::Csv.default_filename(), "output.csv");
        assert_eq!(OutputFormat::Text.default_filename(), "output.txt");
        for format in OutputFormat::all() {
            assert!(format.default_filename().ends_with(format.extension()));
        }
    }

    #[test]
    fn test_format_mime_type() {
        assert_eq!(OutputFormat::Xml.mime_type(), "application/xml");
        assert_eq!(OutputFormat::Csv.mime_type(), "text/csv");
        assert_eq!(OutputFormat::Text.mime_type(), "text/plain");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path("a.xml").unwrap(), OutputFormat::Xml);
        assert_eq!(OutputFormat::from_path("a.csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path("a.txt").unwrap(), OutputFormat::Text);
        assert_eq!(
            OutputFormat::from_path("/path/to/file.XML").unwrap(),
            OutputFormat::Xml
        );
        assert!(OutputFormat::from_path("output.json").is_err());
        assert!(OutputFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn test_format_all_order() {
        assert_eq!(
            OutputFormat::all(),
            &[OutputFormat::Xml, OutputFormat::Csv, OutputFormat::Text]
        );
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Text).unwrap();
        assert_eq!(json, "\"text\"");

        let parsed: OutputFormat = serde_json::from_str("\"txt\"").unwrap();
        assert_eq!(parsed, OutputFormat::Text);
    }

    #[test]
    fn test_to_format_string_dispatch() {
        let records = vec![MessageRecord::new("1", "hi")];
        assert!(
            to_format_string(&records, OutputFormat::Xml)
                .unwrap()
                .starts_with("<messages>")
        );
        assert!(
            to_format_string(&records, OutputFormat::Text)
                .unwrap()
                .starts_with("1 - ")
        );
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_render_csv_dispatch() {
        let mut buf = Vec::new();
        render(&[], OutputFormat::Csv, &mut buf).unwrap();
        assert_eq!(buf, b"telno,date,body\r\n");
    }
}
