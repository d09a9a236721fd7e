//! Conversion configuration.
//!
//! [`ConvertConfig`] describes where containers are read from and where the
//! three artifacts are written. It carries no CLI framework dependencies and
//! can be loaded from any serde format.
//!
//! # Example
//!
//! ```rust
//! use vmgpack::config::ConvertConfig;
//! use vmgpack::format::OutputFormat;
//!
//! let config = ConvertConfig::new()
//!     .with_input_dir("/backup/messages")
//!     .with_output(OutputFormat::Xml, "inbox.xml");
//!
//! assert_eq!(config.output_path(OutputFormat::Xml).to_str(), Some("inbox.xml"));
//! assert_eq!(config.output_path(OutputFormat::Csv).to_str(), Some("output.csv"));
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Default container extension (without dot).
pub const DEFAULT_EXTENSION: &str = "vmg";

/// Where to read containers from and where to write each artifact.
///
/// The extension only selects which files are read; it does not change how
/// their contents are parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Directory holding the containers (default: `.`)
    pub input_dir: PathBuf,

    /// Container file extension without the dot, case-sensitive (default: `vmg`)
    pub extension: String,

    /// XML artifact path (default: `output.xml`)
    pub xml_output: PathBuf,

    /// CSV artifact path (default: `output.csv`)
    pub csv_output: PathBuf,

    /// Transcript artifact path (default: `output.txt`)
    pub text_output: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            xml_output: PathBuf::from(OutputFormat::Xml.default_filename()),
            csv_output: PathBuf::from(OutputFormat::Csv.default_filename()),
            text_output: PathBuf::from(OutputFormat::Text.default_filename()),
        }
    }
}

impl ConvertConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input directory.
    #[must_use]
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Sets the container extension (without the dot).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sets the artifact path for one format.
    #[must_use]
    pub fn with_output(mut self, format: OutputFormat, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match format {
            OutputFormat::Xml => self.xml_output = path,
            OutputFormat::Csv => self.csv_output = path,
            OutputFormat::Text => self.text_output = path,
        }
        self
    }

    /// Writes every artifact into `dir`, keeping the default file names.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        for format in OutputFormat::all() {
            self = self.with_output(*format, dir.join(format.default_filename()));
        }
        self
    }

    /// Returns the artifact path for a format.
    pub fn output_path(&self, format: OutputFormat) -> &Path {
        match format {
            OutputFormat::Xml => &self.xml_output,
            OutputFormat::Csv => &self.csv_output,
            OutputFormat::Text => &self.text_output,
        }
    }
}
