//! Simulated payment service

use crate::simulation::latency::LatencyRange;
use async_trait::async_trait;
use chrono::Utc;
use ordersnap_application::ports::lookup::{LookupError, PaymentLookup};
use ordersnap_domain::{OrderId, PaymentRecord};
use rand::Rng;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Simulated payment backend
///
/// Always reports an approved payment authorized some minutes in the
/// past. The fastest of the three stand-ins by default.
pub struct SimulatedPaymentService {
    latency: LatencyRange,
}

impl SimulatedPaymentService {
    pub fn new(latency: LatencyRange) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedPaymentService {
    fn default() -> Self {
        Self::new(LatencyRange::new(500, 2_000))
    }
}

#[async_trait]
impl PaymentLookup for SimulatedPaymentService {
    async fn fetch_payment(
        &self,
        order_id: OrderId,
        scope: CancellationToken,
    ) -> Result<PaymentRecord, LookupError> {
        let delay = self.latency.sample();
        debug!("Payment lookup for {} will take {:?}", order_id, delay);

        tokio::select! {
            () = scope.cancelled() => return Err(LookupError::Cancelled),
            () = tokio::time::sleep(delay) => {}
        }

        let authorized_minutes_ago = rand::thread_rng().gen_range(1i64..60);
        Ok(PaymentRecord::new(
            order_id,
            "Approved",
            Utc::now() - chrono::Duration::minutes(authorized_minutes_ago),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reports_an_approved_payment() {
        let service = SimulatedPaymentService::new(LatencyRange::fixed(1));
        let id = OrderId::random();

        let record = service
            .fetch_payment(id, CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(record.order_id, id);
        assert_eq!(record.status, "Approved");
        assert!(record.authorized_at < Utc::now());
    }

    #[tokio::test]
    async fn test_fired_scope_beats_the_sleep() {
        let service = SimulatedPaymentService::new(LatencyRange::fixed(5_000));
        let scope = CancellationToken::new();
        scope.cancel();

        let result = service.fetch_payment(OrderId::random(), scope).await;

        assert!(matches!(result, Err(LookupError::Cancelled)));
    }
}
