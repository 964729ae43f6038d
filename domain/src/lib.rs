//! Domain layer for ordersnap
//!
//! This crate contains the value objects and entities that describe one
//! batch of order snapshots. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Snapshot
//!
//! A snapshot is the per-order aggregation of three independently fetched
//! records (order, payment, shipment). Lookups fail individually: a failed
//! lookup becomes an error entry on the affected snapshot instead of
//! aborting the batch.
//!
//! ## Batch
//!
//! A batch holds one snapshot per requested order id, always sorted
//! ascending by id so output never depends on completion order.

pub mod config;
pub mod core;
pub mod snapshot;

// Re-export commonly used types
pub use config::OutputFormat;
pub use self::core::{lookup_kind::LookupKind, order_id::OrderId};
pub use snapshot::{
    entities::{OrderSnapshot, SnapshotBatch},
    outcome::CallOutcome,
    records::{OrderRecord, PaymentRecord, ShipmentRecord},
};
