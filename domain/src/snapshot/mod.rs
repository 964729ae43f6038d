//! Order snapshot subdomain
//!
//! The per-order aggregate assembled from three independent lookups, plus
//! the ordered batch wrapper returned to callers.

pub mod entities;
pub mod outcome;
pub mod records;

pub use entities::{OrderSnapshot, SnapshotBatch};
pub use outcome::CallOutcome;
pub use records::{OrderRecord, PaymentRecord, ShipmentRecord};
