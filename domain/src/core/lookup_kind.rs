//! Lookup capability names

use serde::{Deserialize, Serialize};

/// The three upstream lookups that feed one snapshot (Value Object)
///
/// Declaration order here is the order error entries appear in a
/// snapshot, independent of which lookup settled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupKind {
    /// Core order record
    Order,
    /// Payment authorization state
    Payment,
    /// Carrier and tracking data
    Shipment,
}

impl LookupKind {
    /// Capability name used to tag recorded error strings
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Order => "OrderService",
            LookupKind::Payment => "PaymentService",
            LookupKind::Shipment => "ShippingService",
        }
    }

    /// All kinds, in declaration order
    pub fn all() -> [LookupKind; 3] {
        [LookupKind::Order, LookupKind::Payment, LookupKind::Shipment]
    }
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
