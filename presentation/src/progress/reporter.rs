//! Progress reporting for batch execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use ordersnap_application::ports::progress::BatchProgressNotifier;
use ordersnap_domain::{OrderSnapshot, SnapshotBatch};
use std::sync::Mutex;

/// Reports batch progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total_orders: usize) {
        let pb = ProgressBar::new(total_orders as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Snapshots");
        pb.set_message("Starting...");

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_item_complete(&self, snapshot: &OrderSnapshot) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if snapshot.is_complete() {
                format!("{} {}", "v".green(), snapshot.order_id.short())
            } else {
                format!("{} {}", "x".red(), snapshot.order_id.short())
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self, batch: &SnapshotBatch) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_with_message(format!(
                "{} ({}/{} complete)",
                "done".green(),
                batch.complete_count(),
                batch.len()
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl BatchProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total_orders: usize) {
        println!(
            "{} fetching {} order snapshots",
            "->".cyan(),
            total_orders
        );
    }

    fn on_item_complete(&self, snapshot: &OrderSnapshot) {
        if snapshot.is_complete() {
            println!("  {} {}", "v".green(), snapshot.order_id);
        } else {
            println!(
                "  {} {} ({} error(s))",
                "x".red(),
                snapshot.order_id,
                snapshot.error_count()
            );
        }
    }

    fn on_batch_complete(&self, _batch: &SnapshotBatch) {
        println!();
    }
}
