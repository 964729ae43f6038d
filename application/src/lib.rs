//! Application layer for ordersnap
//!
//! This crate contains the snapshot use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BatchParams;
pub use ports::{
    lookup::{LookupError, OrderLookup, PaymentLookup, ShipmentLookup},
    progress::{BatchProgressNotifier, NoProgress},
};
pub use use_cases::fetch_snapshots::{
    FetchSnapshotsInput, FetchSnapshotsUseCase, SnapshotError,
};
