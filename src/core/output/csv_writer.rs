//! CSV output writer.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::VmgError;
use crate::record::MessageRecord;

/// Header row written before any record.
pub const CSV_HEADER: [&str; 3] = ["telno", "date", "body"];

/// Writes records to CSV.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `telno`, `date`, `body`
/// - Quoting: only fields containing `,`, `"`, CR or LF are quoted
/// - Row terminator: CRLF
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<(), VmgError> {
    let csv = to_csv(records)?;
    fs::write(output_path, csv)?;
    Ok(())
}

/// Converts records to a CSV string.
pub fn to_csv(records: &[MessageRecord]) -> Result<String, VmgError> {
    let mut buf = Vec::new();
    render_csv(records, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Renders records as CSV into any writer.
pub fn render_csv<W: Write>(records: &[MessageRecord], writer: W) -> Result<(), VmgError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(CSV_HEADER)?;

    for record in records {
        let date = record.formatted_date();
        writer.write_record([record.telno.as_str(), date.as_str(), record.body.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_csv_header_only() {
        assert_eq!(to_csv(&[]).unwrap(), "telno,date,body\r\n");
    }

    #[test]
    fn test_to_csv_basic() {
        let ts = Utc.with_ymd_and_hms(2008, 5, 26, 12, 42, 32).unwrap();
        let record = MessageRecord::new("+15551234567", "Hello &amp; welcome").with_timestamp(ts);

        assert_eq!(
            to_csv(&[record]).unwrap(),
            "telno,date,body\r\n+15551234567,2008-05-26 12:42:32,Hello &amp; welcome\r\n"
        );
    }

    #[test]
    fn test_to_csv_quotes_special_bodies() {
        let records = vec![
            MessageRecord::new("1", "one, two"),
            MessageRecord::new("2", "line1\nline2"),
            MessageRecord::new("3", "say &quot;hi&quot; \"raw\""),
        ];
        let csv = to_csv(&records).unwrap();
        assert!(csv.contains("\"one, two\""));
        assert!(csv.contains("\"line1\nline2\""));
        assert!(csv.contains("\"say &quot;hi&quot; \"\"raw\"\"\""));
    }

    #[test]
    fn test_to_csv_reads_back() {
        let records = vec![
            MessageRecord::new("", "no number"),
            MessageRecord::new("42", "multi\r\nline, with comma"),
        ];
        let csv = to_csv(&records).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "");
        assert_eq!(&rows[1][2], "multi\r\nline, with comma");
    }

    #[test]
    fn test_write_csv_file() {
        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&[MessageRecord::new("7", "x")], temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["telno,date,body", "7,1970-01-01 00:00:00,x"]);
    }
}
