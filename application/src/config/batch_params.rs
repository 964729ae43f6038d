//! Batch parameters: fan-out loop control.
//!
//! [`BatchParams`] groups the static parameters that control the fan-out
//! loop in [`FetchSnapshotsUseCase`](crate::use_cases::fetch_snapshots::FetchSnapshotsUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fan-out control parameters.
///
/// Bounds how many orders are in flight at once and how long each
/// individual lookup may run. The timeout covers one lookup call, not the
/// whole order and not the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchParams {
    /// Maximum number of orders processed concurrently. Must be > 0.
    pub max_concurrency: usize,
    /// Timeout applied to each individual lookup call.
    pub per_call_timeout: Duration,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            max_concurrency: 4,
            per_call_timeout: Duration::from_millis(1500),
        }
    }
}

impl BatchParams {
    // ==================== Builder Methods ====================

    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = max;
        self
    }

    pub fn with_per_call_timeout(mut self, timeout: Duration) -> Self {
        self.per_call_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = BatchParams::default();
        assert_eq!(params.max_concurrency, 4);
        assert_eq!(params.per_call_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_builder() {
        let params = BatchParams::default()
            .with_max_concurrency(8)
            .with_per_call_timeout(Duration::from_secs(2));

        assert_eq!(params.max_concurrency, 8);
        assert_eq!(params.per_call_timeout, Duration::from_secs(2));
    }
}
