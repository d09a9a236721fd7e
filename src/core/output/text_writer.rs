//! Plain-text transcript writer.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::VmgError;
use crate::record::MessageRecord;

/// Writes records to a plain-text transcript.
///
/// # Format
/// ```text
/// +919900123456 - 2008-05-26 12:42:32
/// Message contents goes here
///
/// +919900123456 - 2008-05-26 12:50:32
/// Second message contents goes here
///
/// ```
///
/// Records without a phone number are skipped. XML and CSV output keep them.
pub fn write_text(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<(), VmgError> {
    let text = to_text(records)?;
    fs::write(output_path, text)?;
    Ok(())
}

/// Converts records to a transcript string.
pub fn to_text(records: &[MessageRecord]) -> Result<String, VmgError> {
    let mut buf = Vec::new();
    render_text(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Renders the transcript into any writer.
pub fn render_text<W: Write>(records: &[MessageRecord], mut writer: W) -> Result<(), VmgError> {
    for record in records.iter().filter(|r| r.has_telno()) {
        writeln!(
            writer,
            "{} - {}\n{}\n",
            record.telno,
            record.formatted_date(),
            record.body
        )?;
    }
    writer.flush()?;
    Ok(())
}
