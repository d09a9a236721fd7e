//! Tests for output writers (XML, CSV, text)

use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use tempfile::tempdir;
use vmgpack::MessageRecord;
use vmgpack::core::output::{CSV_HEADER, write_csv, write_text, write_xml};
use vmgpack::format::{OutputFormat, to_format_string, write_to_format};

fn sample_records() -> Vec<MessageRecord> {
    vec![
        MessageRecord::new("", "voicemail notice"),
        MessageRecord::new("+15551234567", "Hello &amp; welcome")
            .with_timestamp(Utc.with_ymd_and_hms(2008, 5, 26, 12, 42, 32).unwrap()),
        MessageRecord::new("5551234", "one, two\r\nthree")
            .with_timestamp(Utc.with_ymd_and_hms(2009, 1, 2, 3, 4, 5).unwrap()),
    ]
}

// ============================================================================
// XML Writer Tests
// ============================================================================

mod xml_writer_tests {
    use super::*;

    #[test]
    fn test_write_xml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.xml");

        write_xml(&sample_records(), &path).unwrap();

        let xml = fs::read_to_string(&path).unwrap();
        assert!(xml.starts_with("<messages><message><tel></tel><date>1970-01-01 00:00:00</date>"));
        assert!(xml.contains("<body>one, two\r\nthree</body>"));
        assert!(xml.ends_with("</message></messages>"));
    }

    #[test]
    fn test_xml_keeps_record_order() {
        let xml = to_format_string(&sample_records(), OutputFormat::Xml).unwrap();
        let a = xml.find("voicemail").unwrap();
        let b = xml.find("Hello").unwrap();
        let c = xml.find("one, two").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_write_xml_to_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("output.xml");
        let err = write_xml(&sample_records(), &path).unwrap_err();
        assert!(err.is_io());
    }
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_csv(&sample_records(), &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "");
        assert_eq!(&rows[0][1], "1970-01-01 00:00:00");
        assert_eq!(&rows[1][2], "Hello &amp; welcome");
        assert_eq!(&rows[2][2], "one, two\r\nthree");
    }

    #[test]
    fn test_csv_quotes_commas_and_newlines() {
        let csv = to_format_string(&sample_records(), OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("telno,date,body\r\n"));
        assert!(csv.contains("\"one, two\r\nthree\""));
    }

    #[test]
    fn test_csv_header_only_for_no_records() {
        let csv = to_format_string(&[], OutputFormat::Csv).unwrap();
        assert_eq!(csv, "telno,date,body\r\n");
    }
}

// ============================================================================
// Text Writer Tests
// ============================================================================

mod text_writer_tests {
    use super::*;

    #[test]
    fn test_write_text_skips_missing_number() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");

        write_text(&sample_records(), &path).unwrap();

        let txt = fs::read_to_string(&path).unwrap();
        assert!(!txt.contains("voicemail"));
        assert_eq!(
            txt,
            "+15551234567 - 2008-05-26 12:42:32\nHello &amp; welcome\n\n\
             5551234 - 2009-01-02 03:04:05\none, two\r\nthree\n\n"
        );
    }

    #[test]
    fn test_text_keeps_epoch_records_with_number() {
        let record = MessageRecord::new("42", "old").with_timestamp(DateTime::UNIX_EPOCH);
        let txt = to_format_string(&[record], OutputFormat::Text).unwrap();
        assert_eq!(txt, "42 - 1970-01-01 00:00:00\nold\n\n");
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

mod dispatch_tests {
    use super::*;

    #[test]
    fn test_write_to_format_matches_string_output() {
        let dir = tempdir().unwrap();
        let records = sample_records();

        for format in OutputFormat::all() {
            let path = dir.path().join(format.default_filename());
            write_to_format(&records, &path, *format).unwrap();

            let on_disk = fs::read_to_string(&path).unwrap();
            let in_memory = to_format_string(&records, *format).unwrap();
            assert_eq!(on_disk, in_memory, "mismatch for {format}");
        }
    }

    #[test]
    fn test_format_from_output_path() {
        assert_eq!(OutputFormat::from_path("out/output.xml").unwrap(), OutputFormat::Xml);
        assert_eq!(OutputFormat::from_path("output.csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path("output.txt").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_path("output.json").unwrap_err().is_invalid_format());
    }
}
