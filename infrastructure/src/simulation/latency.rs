//! Latency sampling for the simulated upstreams

use rand::Rng;
use std::time::Duration;

/// Uniform latency window in milliseconds, sampled once per call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyRange {
    min_ms: u64,
    max_ms: u64,
}

impl LatencyRange {
    /// Window drawn uniformly from `min_ms..max_ms` (upper bound exclusive)
    ///
    /// # Panics
    ///
    /// Panics when the window is empty (`min_ms >= max_ms`).
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        assert!(min_ms < max_ms, "latency window must satisfy min_ms < max_ms");
        Self { min_ms, max_ms }
    }

    /// Constant latency, for deterministic tests
    pub fn fixed(ms: u64) -> Self {
        Self {
            min_ms: ms,
            max_ms: ms + 1,
        }
    }

    /// Draw one latency sample
    pub fn sample(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.min_ms..self.max_ms);
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stays_inside_window() {
        let range = LatencyRange::new(100, 200);

        for _ in 0..50 {
            let latency = range.sample();
            assert!(latency >= Duration::from_millis(100));
            assert!(latency < Duration::from_millis(200));
        }
    }

    #[test]
    fn test_fixed_always_returns_the_same_value() {
        let range = LatencyRange::fixed(42);

        assert_eq!(range.sample(), Duration::from_millis(42));
    }

    #[test]
    #[should_panic(expected = "latency window")]
    fn test_empty_window_panics() {
        LatencyRange::new(200, 200);
    }
}
