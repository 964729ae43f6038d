//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::simulation::LatencyRange;
use ordersnap_application::BatchParams;
use ordersnap_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("simulation.{0}: min_ms must be less than max_ms")]
    EmptyLatencyWindow(&'static str),
}

/// Complete raw configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Batch sizing and fan-out limits (`[batch]` section)
    pub batch: FileBatchConfig,
    /// Simulated upstream latency windows (`[simulation.*]` sections)
    pub simulation: FileSimulationConfig,
    /// Output settings (`[output]` section)
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    ///
    /// Latency windows must be non-empty (`min_ms < max_ms`) before
    /// they can back a [`LatencyRange`].
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (section, window) in [
            ("order", &self.simulation.order),
            ("payment", &self.simulation.payment),
            ("shipment", &self.simulation.shipment),
        ] {
            if window.min_ms >= window.max_ms {
                return Err(ConfigValidationError::EmptyLatencyWindow(section));
            }
        }

        Ok(())
    }
}

/// Batch configuration from TOML
///
/// # Example
///
/// ```toml
/// [batch]
/// count = 8
/// max_concurrency = 3
/// per_call_timeout_ms = 1500
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// Demo orders generated per run
    pub count: usize,
    /// Orders processed concurrently
    pub max_concurrency: usize,
    /// Per-lookup timeout in milliseconds
    pub per_call_timeout_ms: u64,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        Self {
            count: 8,
            max_concurrency: 3,
            per_call_timeout_ms: 1500,
        }
    }
}

impl FileBatchConfig {
    /// Convert to the application-layer parameter object
    pub fn batch_params(&self) -> BatchParams {
        BatchParams::default()
            .with_max_concurrency(self.max_concurrency)
            .with_per_call_timeout(Duration::from_millis(self.per_call_timeout_ms))
    }
}

/// Simulated latency configuration from TOML
///
/// Each window overrides one upstream; when a window is given, both
/// bounds are required.
///
/// # Example
///
/// ```toml
/// [simulation.order]
/// min_ms = 1000
/// max_ms = 3000
///
/// [simulation.payment]
/// min_ms = 500
/// max_ms = 2000
///
/// [simulation.shipment]
/// min_ms = 800
/// max_ms = 2500
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulationConfig {
    /// Order service latency window
    pub order: FileLatencyConfig,
    /// Payment service latency window
    pub payment: FileLatencyConfig,
    /// Shipping service latency window
    pub shipment: FileLatencyConfig,
}

impl Default for FileSimulationConfig {
    fn default() -> Self {
        Self {
            order: FileLatencyConfig {
                min_ms: 1_000,
                max_ms: 3_000,
            },
            payment: FileLatencyConfig {
                min_ms: 500,
                max_ms: 2_000,
            },
            shipment: FileLatencyConfig {
                min_ms: 800,
                max_ms: 2_500,
            },
        }
    }
}

/// One latency window in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileLatencyConfig {
    /// Lower bound (inclusive)
    pub min_ms: u64,
    /// Upper bound (exclusive)
    pub max_ms: u64,
}

impl FileLatencyConfig {
    /// Convert to the sampling window used by the simulated services
    ///
    /// Windows are checked by [`FileConfig::validate`] before conversion.
    pub fn latency_range(&self) -> LatencyRange {
        LatencyRange::new(self.min_ms, self.max_ms)
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Suppress progress indicators
    pub quiet: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            quiet: false,
        }
    }
}
