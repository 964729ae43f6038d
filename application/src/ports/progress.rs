//! Progress notification port
//!
//! Defines the interface for reporting progress during batch execution.

use ordersnap_domain::{OrderSnapshot, SnapshotBatch};

/// Callback for progress updates while a batch is being fetched
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, etc.)
///
/// Callbacks run on the orchestrator task, after an order's snapshot has
/// been assembled, never from inside an in-flight lookup.
pub trait BatchProgressNotifier: Send + Sync {
    /// Called once before any order is admitted
    fn on_batch_start(&self, total_orders: usize);

    /// Called each time one order's snapshot has been assembled
    fn on_item_complete(&self, snapshot: &OrderSnapshot);

    /// Called once with the sorted batch, just before it is returned
    fn on_batch_complete(&self, batch: &SnapshotBatch);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl BatchProgressNotifier for NoProgress {
    fn on_batch_start(&self, _total_orders: usize) {}
    fn on_item_complete(&self, _snapshot: &OrderSnapshot) {}
    fn on_batch_complete(&self, _batch: &SnapshotBatch) {}
}
