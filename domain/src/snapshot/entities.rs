//! Snapshot entities
//!
//! [`OrderSnapshot`] is the per-order aggregate; [`SnapshotBatch`] is the
//! ordered collection handed back to callers.

use crate::core::order_id::OrderId;
use crate::snapshot::outcome::CallOutcome;
use crate::snapshot::records::{OrderRecord, PaymentRecord, ShipmentRecord};
use serde::{Deserialize, Serialize};

/// Aggregated snapshot of one order
///
/// Holds whatever subset of the three records could be fetched, plus one
/// error string per failed lookup. `errors` follows lookup declaration
/// order (order, payment, shipment), never completion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// The order this snapshot describes
    pub order_id: OrderId,
    /// Order record, when the order lookup succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderRecord>,
    /// Payment record, when the payment lookup succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentRecord>,
    /// Shipment record, when the shipment lookup succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment: Option<ShipmentRecord>,
    /// One entry per failed lookup, in lookup declaration order
    #[serde(default)]
    pub errors: Vec<String>,
}

impl OrderSnapshot {
    /// Assemble a snapshot from the three guarded-call outcomes
    pub fn from_outcomes(
        order_id: OrderId,
        order: CallOutcome<OrderRecord>,
        payment: CallOutcome<PaymentRecord>,
        shipment: CallOutcome<ShipmentRecord>,
    ) -> Self {
        let (order, order_err) = order.into_parts();
        let (payment, payment_err) = payment.into_parts();
        let (shipment, shipment_err) = shipment.into_parts();

        let errors = [order_err, payment_err, shipment_err]
            .into_iter()
            .flatten()
            .collect();

        Self {
            order_id,
            order,
            payment,
            shipment,
            errors,
        }
    }

    /// True when all three lookups produced a record
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed lookups
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Ordered batch of snapshots, one per requested order id
///
/// Always sorted ascending by order id. Duplicated request ids produce one
/// snapshot each.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotBatch {
    snapshots: Vec<OrderSnapshot>,
}

impl SnapshotBatch {
    /// The empty batch
    pub fn empty() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Wrap completed snapshots, imposing ascending order-id order
    pub fn from_unordered(mut snapshots: Vec<OrderSnapshot>) -> Self {
        snapshots.sort_by_key(|s| s.order_id);
        Self { snapshots }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderSnapshot> {
        self.snapshots.iter()
    }

    /// Snapshots with all three records present
    pub fn complete_count(&self) -> usize {
        self.snapshots.iter().filter(|s| s.is_complete()).count()
    }

    /// Total recorded lookup errors across the batch
    pub fn error_count(&self) -> usize {
        self.snapshots.iter().map(|s| s.error_count()).sum()
    }

    /// Consume the batch, yielding the ordered snapshots
    pub fn into_snapshots(self) -> Vec<OrderSnapshot> {
        self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lookup_kind::LookupKind;
    use chrono::Utc;
    use uuid::Uuid;

    fn order_record(id: OrderId) -> OrderRecord {
        OrderRecord::new(id, "Customer_test", Utc::now(), 100.0)
    }

    fn payment_record(id: OrderId) -> PaymentRecord {
        PaymentRecord::new(id, "Approved", Utc::now())
    }

    fn shipment_record(id: OrderId) -> ShipmentRecord {
        ShipmentRecord::new(id, "UPS", "TRACK-98765")
    }

    #[test]
    fn test_from_outcomes_with_all_values_is_complete() {
        let id = OrderId::random();

        let snapshot = OrderSnapshot::from_outcomes(
            id,
            CallOutcome::value(order_record(id)),
            CallOutcome::value(payment_record(id)),
            CallOutcome::value(shipment_record(id)),
        );

        assert!(snapshot.is_complete());
        assert_eq!(snapshot.error_count(), 0);
        assert!(snapshot.order.is_some());
        assert!(snapshot.payment.is_some());
        assert!(snapshot.shipment.is_some());
    }

    #[test]
    fn test_errors_follow_declaration_order() {
        let id = OrderId::random();

        let snapshot = OrderSnapshot::from_outcomes(
            id,
            CallOutcome::failure(LookupKind::Order, "unavailable"),
            CallOutcome::value(payment_record(id)),
            CallOutcome::timeout(LookupKind::Shipment),
        );

        assert!(!snapshot.is_complete());
        assert_eq!(
            snapshot.errors,
            vec![
                "OrderService: unavailable".to_string(),
                "ShippingService: timeout".to_string(),
            ]
        );
        assert!(snapshot.order.is_none());
        assert!(snapshot.payment.is_some());
        assert!(snapshot.shipment.is_none());
    }

    #[test]
    fn test_batch_sorts_ascending_by_order_id() {
        let ids = [
            OrderId::new(Uuid::from_u128(30)),
            OrderId::new(Uuid::from_u128(10)),
            OrderId::new(Uuid::from_u128(20)),
        ];

        let snapshots = ids
            .iter()
            .map(|&id| {
                OrderSnapshot::from_outcomes(
                    id,
                    CallOutcome::value(order_record(id)),
                    CallOutcome::value(payment_record(id)),
                    CallOutcome::value(shipment_record(id)),
                )
            })
            .collect();

        let batch = SnapshotBatch::from_unordered(snapshots);
        let sorted: Vec<OrderId> = batch.iter().map(|s| s.order_id).collect();

        assert_eq!(
            sorted,
            vec![
                OrderId::new(Uuid::from_u128(10)),
                OrderId::new(Uuid::from_u128(20)),
                OrderId::new(Uuid::from_u128(30)),
            ]
        );
    }

    #[test]
    fn test_batch_counts() {
        let id_ok = OrderId::new(Uuid::from_u128(1));
        let id_bad = OrderId::new(Uuid::from_u128(2));

        let batch = SnapshotBatch::from_unordered(vec![
            OrderSnapshot::from_outcomes(
                id_ok,
                CallOutcome::value(order_record(id_ok)),
                CallOutcome::value(payment_record(id_ok)),
                CallOutcome::value(shipment_record(id_ok)),
            ),
            OrderSnapshot::from_outcomes(
                id_bad,
                CallOutcome::timeout(LookupKind::Order),
                CallOutcome::timeout(LookupKind::Payment),
                CallOutcome::value(shipment_record(id_bad)),
            ),
        ]);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.complete_count(), 1);
        assert_eq!(batch.error_count(), 2);
    }

    #[test]
    fn test_snapshot_json_omits_missing_records() {
        let id = OrderId::random();

        let snapshot = OrderSnapshot::from_outcomes(
            id,
            CallOutcome::value(order_record(id)),
            CallOutcome::timeout(LookupKind::Payment),
            CallOutcome::value(shipment_record(id)),
        );

        let json = serde_json::to_string(&snapshot).unwrap();

        assert!(json.contains("\"order\""));
        assert!(!json.contains("\"payment\""));
        assert!(json.contains("PaymentService: timeout"));
    }

    #[test]
    fn test_batch_serializes_as_bare_array() {
        let batch = SnapshotBatch::empty();
        let json = serde_json::to_string(&batch).unwrap();

        assert_eq!(json, "[]");
    }
}
