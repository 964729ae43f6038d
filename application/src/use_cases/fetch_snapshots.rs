//! Fetch Snapshots use case
//!
//! Orchestrates a bounded fan-out over a batch of order ids. Each admitted
//! order fans out again into three concurrent lookups (order, payment,
//! shipment), every lookup guarded by a per-call timeout linked to the
//! outer cancellation signal. A failed lookup becomes an error entry on
//! the affected snapshot; only outer cancellation aborts the batch.

use crate::config::BatchParams;
use crate::ports::lookup::{LookupError, OrderLookup, PaymentLookup, ShipmentLookup};
use crate::ports::progress::{BatchProgressNotifier, NoProgress};
use ordersnap_domain::{CallOutcome, LookupKind, OrderId, OrderSnapshot, SnapshotBatch};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that abort a whole batch
///
/// Individual lookup failures never show up here. They are recorded on
/// the affected snapshot instead.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("max_concurrency must be greater than zero")]
    InvalidConcurrency,

    #[error("Batch cancelled")]
    Cancelled,

    #[error("Lookup task panicked: {0}")]
    LookupPanicked(String),
}

impl SnapshotError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SnapshotError::Cancelled)
    }
}

/// Input for the FetchSnapshots use case
#[derive(Debug, Clone)]
pub struct FetchSnapshotsInput {
    /// Orders to snapshot; duplicates are processed independently
    pub order_ids: Vec<OrderId>,
    /// Concurrency cap and per-call timeout
    pub params: BatchParams,
}

impl FetchSnapshotsInput {
    pub fn new(order_ids: Vec<OrderId>, params: BatchParams) -> Self {
        Self { order_ids, params }
    }
}

/// Use case for fetching a batch of order snapshots
pub struct FetchSnapshotsUseCase<O, P, S> {
    orders: Arc<O>,
    payments: Arc<P>,
    shipments: Arc<S>,
    cancellation: CancellationToken,
}

impl<O, P, S> FetchSnapshotsUseCase<O, P, S>
where
    O: OrderLookup + 'static,
    P: PaymentLookup + 'static,
    S: ShipmentLookup + 'static,
{
    pub fn new(orders: Arc<O>, payments: Arc<P>, shipments: Arc<S>) -> Self {
        Self {
            orders,
            payments,
            shipments,
            cancellation: CancellationToken::new(),
        }
    }

    /// Install the outer cancellation signal.
    ///
    /// The default token never fires; callers that want to abandon a
    /// running batch pass a clone of their own token here.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: FetchSnapshotsInput,
    ) -> Result<SnapshotBatch, SnapshotError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: FetchSnapshotsInput,
        progress: &dyn BatchProgressNotifier,
    ) -> Result<SnapshotBatch, SnapshotError> {
        if input.order_ids.is_empty() {
            return Ok(SnapshotBatch::empty());
        }
        if input.params.max_concurrency == 0 {
            return Err(SnapshotError::InvalidConcurrency);
        }

        let total = input.order_ids.len();
        info!(
            "Fetching snapshots for {} orders (max_concurrency {}, per_call_timeout {:?})",
            total, input.params.max_concurrency, input.params.per_call_timeout
        );
        progress.on_batch_start(total);

        // Semaphore::new panics above MAX_PERMITS
        let gate = Arc::new(Semaphore::new(
            input.params.max_concurrency.min(Semaphore::MAX_PERMITS),
        ));
        let mut join_set = JoinSet::new();

        for order_id in input.order_ids {
            join_set.spawn(Self::process_order(
                order_id,
                Arc::clone(&self.orders),
                Arc::clone(&self.payments),
                Arc::clone(&self.shipments),
                Arc::clone(&gate),
                input.params.per_call_timeout,
                self.cancellation.clone(),
            ));
        }

        let mut snapshots = Vec::with_capacity(total);

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(Ok(snapshot)) => {
                    if snapshot.is_complete() {
                        debug!("Order {} complete", snapshot.order_id);
                    } else {
                        warn!(
                            "Order {} finished with {} lookup error(s): {}",
                            snapshot.order_id,
                            snapshot.error_count(),
                            snapshot.errors.join(" | ")
                        );
                    }
                    progress.on_item_complete(&snapshot);
                    snapshots.push(snapshot);
                }
                Ok(Err(e)) => {
                    // Abort outstanding orders; already-built snapshots are discarded
                    join_set.abort_all();
                    return Err(e);
                }
                Err(join_err) => {
                    join_set.abort_all();
                    return Err(if join_err.is_cancelled() {
                        SnapshotError::Cancelled
                    } else {
                        SnapshotError::LookupPanicked(join_err.to_string())
                    });
                }
            }
        }

        let batch = SnapshotBatch::from_unordered(snapshots);
        info!(
            "Batch done: {}/{} orders complete, {} lookup error(s)",
            batch.complete_count(),
            batch.len(),
            batch.error_count()
        );
        progress.on_batch_complete(&batch);
        Ok(batch)
    }

    /// Process a single order: wait for an admission slot, then run the
    /// triple fetch.
    ///
    /// The permit spans the whole triple, so a slot frees up exactly when
    /// an order's last lookup settles.
    async fn process_order(
        order_id: OrderId,
        orders: Arc<O>,
        payments: Arc<P>,
        shipments: Arc<S>,
        gate: Arc<Semaphore>,
        per_call_timeout: Duration,
        cancel: CancellationToken,
    ) -> Result<OrderSnapshot, SnapshotError> {
        let _permit = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(SnapshotError::Cancelled),
            permit = gate.acquire_owned() => {
                // The gate is never closed; an error here means the batch
                // is already tearing down
                permit.map_err(|_| SnapshotError::Cancelled)?
            }
        };

        debug!("Order {} admitted", order_id);

        let (order, payment, shipment) = tokio::join!(
            guarded_call(LookupKind::Order, per_call_timeout, &cancel, |scope| {
                async move { orders.fetch_order(order_id, scope).await }
            }),
            guarded_call(LookupKind::Payment, per_call_timeout, &cancel, |scope| {
                async move { payments.fetch_payment(order_id, scope).await }
            }),
            guarded_call(LookupKind::Shipment, per_call_timeout, &cancel, |scope| {
                async move { shipments.fetch_shipment(order_id, scope).await }
            }),
        );

        Ok(OrderSnapshot::from_outcomes(
            order_id, order?, payment?, shipment?,
        ))
    }
}

/// Run one lookup under the guarded-call protocol.
///
/// The capability gets a child of the outer token as its cancellation
/// scope, then the call races the per-call timer and the outer signal.
/// The biased order is the race policy: when the outer signal and the
/// timer fire together, cancellation wins and aborts the batch instead of
/// recording a timeout.
async fn guarded_call<T, F, Fut>(
    kind: LookupKind,
    per_call_timeout: Duration,
    outer: &CancellationToken,
    call: F,
) -> Result<CallOutcome<T>, SnapshotError>
where
    F: FnOnce(CancellationToken) -> Fut,
    Fut: Future<Output = Result<T, LookupError>>,
{
    let scope = outer.child_token();
    let fut = call(scope.clone());

    tokio::select! {
        biased;
        () = outer.cancelled() => {
            scope.cancel();
            Err(SnapshotError::Cancelled)
        }
        () = tokio::time::sleep(per_call_timeout) => {
            scope.cancel();
            debug!("{} call timed out after {:?}", kind, per_call_timeout);
            Ok(CallOutcome::timeout(kind))
        }
        result = fut => match result {
            Ok(value) => Ok(CallOutcome::value(value)),
            // The capability saw the outer signal before we did
            Err(LookupError::Cancelled) if outer.is_cancelled() => Err(SnapshotError::Cancelled),
            // A cancellation-style failure without an outer cause reads as
            // a timeout, the deadline being the only cancel source we arm
            Err(LookupError::Cancelled) => Ok(CallOutcome::timeout(kind)),
            Err(err) => Ok(CallOutcome::failure(kind, err.kind())),
        },
    }
}
