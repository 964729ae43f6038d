//! Upstream lookup ports
//!
//! Defines the three lookup capabilities that feed one order snapshot.
//! Implementations (adapters) live in the infrastructure layer.
//!
//! Every call receives a cancellation scope derived by the orchestrator
//! from the outer signal and the per-call timeout. Implementations must
//! stop promptly once the scope fires and report [`LookupError::Cancelled`].

use async_trait::async_trait;
use ordersnap_domain::{OrderId, OrderRecord, PaymentRecord, ShipmentRecord};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors a lookup capability can report
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Lookup cancelled")]
    Cancelled,

    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl LookupError {
    /// Short failure tag recorded in snapshot error strings
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::Cancelled => "cancelled",
            LookupError::Unavailable(_) => "unavailable",
            LookupError::NotFound(_) => "not_found",
            LookupError::Malformed(_) => "malformed",
            LookupError::Other(_) => "other",
        }
    }
}

/// Order record lookup
#[async_trait]
pub trait OrderLookup: Send + Sync {
    /// Fetch the order record for one order id
    async fn fetch_order(
        &self,
        order_id: OrderId,
        scope: CancellationToken,
    ) -> Result<OrderRecord, LookupError>;
}

/// Payment record lookup
#[async_trait]
pub trait PaymentLookup: Send + Sync {
    /// Fetch the payment record for one order id
    async fn fetch_payment(
        &self,
        order_id: OrderId,
        scope: CancellationToken,
    ) -> Result<PaymentRecord, LookupError>;
}

/// Shipment record lookup
#[async_trait]
pub trait ShipmentLookup: Send + Sync {
    /// Fetch the shipment record for one order id
    async fn fetch_shipment(
        &self,
        order_id: OrderId,
        scope: CancellationToken,
    ) -> Result<ShipmentRecord, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(LookupError::Cancelled.kind(), "cancelled");
        assert_eq!(LookupError::Unavailable("503".to_string()).kind(), "unavailable");
        assert_eq!(LookupError::NotFound(OrderId::random()).kind(), "not_found");
        assert_eq!(LookupError::Malformed("bad json".to_string()).kind(), "malformed");
        assert_eq!(LookupError::Other("boom".to_string()).kind(), "other");
    }
}
