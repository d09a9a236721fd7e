//! Command-line interface definition using clap.
//!
//! The CLI takes a single optional argument, the directory holding the
//! `.vmg` files, and always writes `output.xml`, `output.csv` and
//! `output.txt` into the current directory.

use clap::Parser;

use crate::config::ConvertConfig;

/// Convert a directory of Nokia .vmg messages into
/// output.xml, output.csv and output.txt.
#[derive(Parser, Debug, Clone)]
#[command(name = "vmgpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    vmgpack
    vmgpack ./backup/inbox

Set RUST_LOG=debug for more detail, RUST_LOG=warn to hide per-file output.")]
pub struct Args {
    /// Directory containing .vmg files
    #[arg(default_value = ".")]
    pub input: String,
}

impl Args {
    /// Builds the conversion configuration for these arguments.
    pub fn to_config(&self) -> ConvertConfig {
        ConvertConfig::new().with_input_dir(&self.input)
    }
}
