//! Infrastructure layer for ordersnap
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod simulation;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileBatchConfig, FileConfig,
    FileLatencyConfig, FileOutputConfig, FileSimulationConfig,
};
pub use simulation::{
    LatencyRange, SimulatedOrderService, SimulatedPaymentService, SimulatedShipmentService,
};
