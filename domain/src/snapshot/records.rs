//! Sub-resource records returned by the upstream lookups
//!
//! One record type per capability. Each carries the id of the order it
//! belongs to, so a record remains self-describing outside its snapshot.

use crate::core::order_id::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Core order data from the order service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    /// The order this record belongs to
    pub order_id: OrderId,
    /// Customer display name
    pub customer_name: String,
    /// When the order was placed
    pub placed_at: DateTime<Utc>,
    /// Order total
    pub amount: f64,
}

impl OrderRecord {
    pub fn new(
        order_id: OrderId,
        customer_name: impl Into<String>,
        placed_at: DateTime<Utc>,
        amount: f64,
    ) -> Self {
        Self {
            order_id,
            customer_name: customer_name.into(),
            placed_at,
            amount,
        }
    }
}

/// Payment authorization state from the payment service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// The order this record belongs to
    pub order_id: OrderId,
    /// Authorization status, e.g. "Approved"
    pub status: String,
    /// When the payment was authorized
    pub authorized_at: DateTime<Utc>,
}

impl PaymentRecord {
    pub fn new(order_id: OrderId, status: impl Into<String>, authorized_at: DateTime<Utc>) -> Self {
        Self {
            order_id,
            status: status.into(),
            authorized_at,
        }
    }
}

/// Carrier and tracking data from the shipping service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRecord {
    /// The order this record belongs to
    pub order_id: OrderId,
    /// Carrier name
    pub carrier: String,
    /// Carrier tracking reference
    pub tracking: String,
}

impl ShipmentRecord {
    pub fn new(order_id: OrderId, carrier: impl Into<String>, tracking: impl Into<String>) -> Self {
        Self {
            order_id,
            carrier: carrier.into(),
            tracking: tracking.into(),
        }
    }
}
