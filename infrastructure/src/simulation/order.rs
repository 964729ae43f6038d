//! Simulated order service

use crate::simulation::latency::LatencyRange;
use async_trait::async_trait;
use chrono::Utc;
use ordersnap_application::ports::lookup::{LookupError, OrderLookup};
use ordersnap_domain::{OrderId, OrderRecord};
use rand::Rng;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Simulated order backend
///
/// Fabricates a customer and an order total after a sampled delay. The
/// slowest of the three stand-ins by default.
pub struct SimulatedOrderService {
    latency: LatencyRange,
}

impl SimulatedOrderService {
    pub fn new(latency: LatencyRange) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedOrderService {
    fn default() -> Self {
        Self::new(LatencyRange::new(1_000, 3_000))
    }
}

#[async_trait]
impl OrderLookup for SimulatedOrderService {
    async fn fetch_order(
        &self,
        order_id: OrderId,
        scope: CancellationToken,
    ) -> Result<OrderRecord, LookupError> {
        let delay = self.latency.sample();
        debug!("Order lookup for {} will take {:?}", order_id, delay);

        tokio::select! {
            () = scope.cancelled() => return Err(LookupError::Cancelled),
            () = tokio::time::sleep(delay) => {}
        }

        let amount = f64::from(rand::thread_rng().gen_range(100u32..5_000));
        Ok(OrderRecord::new(
            order_id,
            format!("Customer_{}", &order_id.short()[..4]),
            Utc::now(),
            amount,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fabricates_a_plausible_record() {
        let service = SimulatedOrderService::new(LatencyRange::fixed(1));
        let id = OrderId::random();

        let record = service
            .fetch_order(id, CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(record.order_id, id);
        assert!(record.customer_name.starts_with("Customer_"));
        assert!(record.amount >= 100.0 && record.amount < 5_000.0);
    }

    #[tokio::test]
    async fn test_fired_scope_beats_the_sleep() {
        let service = SimulatedOrderService::new(LatencyRange::fixed(5_000));
        let scope = CancellationToken::new();
        scope.cancel();

        let started = std::time::Instant::now();
        let result = service.fetch_order(OrderId::random(), scope).await;

        assert!(matches!(result, Err(LookupError::Cancelled)));
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }
}
