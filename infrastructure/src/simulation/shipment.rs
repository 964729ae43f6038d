//! Simulated shipping service

use crate::simulation::latency::LatencyRange;
use async_trait::async_trait;
use ordersnap_application::ports::lookup::{LookupError, ShipmentLookup};
use ordersnap_domain::{OrderId, ShipmentRecord};
use rand::Rng;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Simulated shipping backend
///
/// Fabricates a DHL shipment with a five-digit tracking reference after a
/// sampled delay.
pub struct SimulatedShipmentService {
    latency: LatencyRange,
}

impl SimulatedShipmentService {
    pub fn new(latency: LatencyRange) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedShipmentService {
    fn default() -> Self {
        Self::new(LatencyRange::new(800, 2_500))
    }
}

#[async_trait]
impl ShipmentLookup for SimulatedShipmentService {
    async fn fetch_shipment(
        &self,
        order_id: OrderId,
        scope: CancellationToken,
    ) -> Result<ShipmentRecord, LookupError> {
        let delay = self.latency.sample();
        debug!("Shipment lookup for {} will take {:?}", order_id, delay);

        tokio::select! {
            () = scope.cancelled() => return Err(LookupError::Cancelled),
            () = tokio::time::sleep(delay) => {}
        }

        let tracking = format!("TRACK-{}", rand::thread_rng().gen_range(10_000u32..100_000));
        Ok(ShipmentRecord::new(order_id, "DHL", tracking))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fabricates_a_tracking_reference() {
        let service = SimulatedShipmentService::new(LatencyRange::fixed(1));
        let id = OrderId::random();

        let record = service
            .fetch_shipment(id, CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(record.order_id, id);
        assert_eq!(record.carrier, "DHL");
        assert!(record.tracking.starts_with("TRACK-"));
        assert_eq!(record.tracking.len(), "TRACK-".len() + 5);
    }

    #[tokio::test]
    async fn test_fired_scope_beats_the_sleep() {
        let service = SimulatedShipmentService::new(LatencyRange::fixed(5_000));
        let scope = CancellationToken::new();
        scope.cancel();

        let result = service.fetch_shipment(OrderId::random(), scope).await;

        assert!(matches!(result, Err(LookupError::Cancelled)));
    }
}
