use crate::format::OutputFormat;
use crate::record::MessageRecord;

/// Orders records by timestamp, oldest first.
///
/// The sort is stable: records with equal timestamps keep the order they
/// were discovered in. Epoch-dated records therefore sort to the front.
///
/// # Example
/// Input:  [(2020-01-01, "a"), (2019-01-01, "b"), (2020-01-01, "c")]
/// Output: [(2019-01-01, "b"), (2020-01-01, "a"), (2020-01-01, "c")]
pub fn sort_by_timestamp(records: &mut [MessageRecord]) {
    records.sort_by_key(|record| record.timestamp);
}

/// Statistics about one conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionStats {
    /// Containers parsed
    pub total: usize,
    /// Records without a `TEL:` number
    pub without_telno: usize,
    /// Records whose date fell back to the epoch
    pub epoch_dated: usize,
    /// Entries present in the written artifact
    pub written: usize,
}

impl CollectionStats {
    /// Collects statistics for `records` rendered as `format`.
    pub fn from_records(records: &[MessageRecord], format: OutputFormat) -> Self {
        let without_telno = records.iter().filter(|r| !r.has_telno()).count();
        let epoch_dated = records.iter().filter(|r| r.is_epoch()).count();
        let written = match format {
            OutputFormat::Text => records.len() - without_telno,
            OutputFormat::Xml | OutputFormat::Csv => records.len(),
        };

        Self {
            total: records.len(),
            without_telno,
            epoch_dated,
            written,
        }
    }

    /// Number of parsed records left out of the artifact.
    pub fn skipped(&self) -> usize {
        self.total - self.written
    }
}
