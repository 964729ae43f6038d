//! Simulated upstream services
//!
//! Stand-ins for the real order, payment, and shipment backends. Each
//! call sleeps for a latency drawn from a configurable window, then
//! fabricates a plausible record. All three honor cooperative
//! cancellation: a fired per-call scope beats the remaining sleep and
//! surfaces as a cancelled lookup.

mod latency;
mod order;
mod payment;
mod shipment;

pub use latency::LatencyRange;
pub use order::SimulatedOrderService;
pub use payment::SimulatedPaymentService;
pub use shipment::SimulatedShipmentService;
