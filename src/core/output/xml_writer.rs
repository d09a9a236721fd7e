//! XML output writer.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::VmgError;
use crate::record::MessageRecord;

/// Writes records to an XML file.
///
/// # Format
/// ```xml
/// <messages><message><tel>+15551234567</tel><date>2008-05-26 12:42:32</date><body>Hello &amp; welcome</body></message></messages>
/// ```
///
/// No XML declaration, no indentation, no trailing newline. `tel` and `body`
/// are written as stored; bodies are already escaped by the parser.
pub fn write_xml(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<(), VmgError> {
    let xml = to_xml(records)?;
    fs::write(output_path, xml)?;
    Ok(())
}

/// Converts records to an XML string.
///
/// Same format as `write_xml`, but returns a String instead of writing to file.
pub fn to_xml(records: &[MessageRecord]) -> Result<String, VmgError> {
    let mut buf = Vec::new();
    render_xml(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Renders records as XML into any writer.
pub fn render_xml<W: Write>(records: &[MessageRecord], mut writer: W) -> Result<(), VmgError> {
    writer.write_all(b"<messages>")?;
    for record in records {
        write!(
            writer,
            "<message><tel>{}</tel><date>{}</date><body>{}</body></message>",
            record.telno,
            record.formatted_date(),
            record.body
        )?;
    }
    writer.write_all(b"</messages>")?;
    writer.flush()?;
    Ok(())
}
