//! Console output formatter for snapshot batches

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use ordersnap_domain::{OrderSnapshot, SnapshotBatch};

/// Formats snapshot batches for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete batch report
    pub fn format(batch: &SnapshotBatch) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Order Snapshots"));
        output.push('\n');

        for snapshot in batch.iter() {
            output.push_str(&Self::report_line(snapshot));
            output.push('\n');
        }

        output.push_str(&Self::footer(batch));

        output
    }

    /// Format as JSON
    pub fn format_json(batch: &SnapshotBatch) -> String {
        serde_json::to_string_pretty(batch).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format counts only (concise output)
    pub fn format_summary(batch: &SnapshotBatch) -> String {
        format!(
            "{} orders, {} complete, {} lookup error(s)",
            batch.len(),
            batch.complete_count(),
            batch.error_count()
        )
    }

    /// One report line per snapshot
    fn report_line(snapshot: &OrderSnapshot) -> String {
        let status = if snapshot.is_complete() {
            "OK".green().to_string()
        } else {
            snapshot.errors.join(" | ").red().to_string()
        };

        format!(
            "- {} :: Order? {}, Payment? {}, Shipment? {} :: {}",
            snapshot.order_id.to_string().yellow(),
            Self::presence(snapshot.order.is_some()),
            Self::presence(snapshot.payment.is_some()),
            Self::presence(snapshot.shipment.is_some()),
            status
        )
    }

    fn presence(present: bool) -> &'static str {
        if present { "yes" } else { "no" }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn footer(batch: &SnapshotBatch) -> String {
        format!(
            "{}\n{}\n",
            "-".repeat(60).cyan(),
            Self::format_summary(batch).bold()
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, batch: &SnapshotBatch) -> String {
        Self::format(batch)
    }

    fn format_json(&self, batch: &SnapshotBatch) -> String {
        Self::format_json(batch)
    }

    fn format_summary(&self, batch: &SnapshotBatch) -> String {
        Self::format_summary(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ordersnap_domain::{
        CallOutcome, LookupKind, OrderId, OrderRecord, PaymentRecord, ShipmentRecord,
    };

    fn sample_batch() -> SnapshotBatch {
        let ok_id = OrderId::random();
        let bad_id = OrderId::random();

        SnapshotBatch::from_unordered(vec![
            OrderSnapshot::from_outcomes(
                ok_id,
                CallOutcome::value(OrderRecord::new(ok_id, "Customer_a1b2", Utc::now(), 250.0)),
                CallOutcome::value(PaymentRecord::new(ok_id, "Approved", Utc::now())),
                CallOutcome::value(ShipmentRecord::new(ok_id, "DHL", "TRACK-11111")),
            ),
            OrderSnapshot::from_outcomes(
                bad_id,
                CallOutcome::value(OrderRecord::new(bad_id, "Customer_c3d4", Utc::now(), 99.0)),
                CallOutcome::timeout(LookupKind::Payment),
                CallOutcome::value(ShipmentRecord::new(bad_id, "DHL", "TRACK-22222")),
            ),
        ])
    }

    #[test]
    fn test_full_report_has_one_line_per_order() {
        let batch = sample_batch();
        let report = ConsoleFormatter::format(&batch);

        assert_eq!(report.matches("Order?").count(), 2);
        assert!(report.contains("OK"));
        assert!(report.contains("PaymentService: timeout"));
        assert!(report.contains("Payment? no"));
    }

    #[test]
    fn test_summary_counts() {
        let batch = sample_batch();

        let summary = ConsoleFormatter::format_summary(&batch);
        assert!(summary.contains("2 orders"));
        assert!(summary.contains("1 complete"));
        assert!(summary.contains("1 lookup error"));
    }

    #[test]
    fn test_json_output_parses_back() {
        let batch = sample_batch();
        let json = ConsoleFormatter::format_json(&batch);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }
}
