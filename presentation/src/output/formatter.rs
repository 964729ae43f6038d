//! Output formatter trait

use ordersnap_domain::SnapshotBatch;

/// Trait for formatting snapshot batches
pub trait OutputFormatter {
    /// Format the complete batch report
    fn format(&self, batch: &SnapshotBatch) -> String;

    /// Format as JSON
    fn format_json(&self, batch: &SnapshotBatch) -> String;

    /// Format counts only (concise output)
    fn format_summary(&self, batch: &SnapshotBatch) -> String;
}
