//! Order identifier value object

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a single order (Value Object)
///
/// Opaque to the snapshot logic and totally ordered: batches are sorted
/// ascending by `OrderId`, so output never depends on lookup completion
/// order. Identifiers are supplied by the caller; the snapshot machinery
/// never mints them on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Wrap an existing UUID
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Mint a fresh random identifier (demo batches, tests)
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short hex prefix for compact display (first 8 characters)
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        OrderId::new(id)
    }
}
