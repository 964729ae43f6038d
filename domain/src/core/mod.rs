//! Core domain concepts shared across all subdomains.
//!
//! - [`order_id::OrderId`]: opaque, orderable order identifier
//! - [`lookup_kind::LookupKind`]: the three lookup capabilities behind a snapshot

pub mod lookup_kind;
pub mod order_id;
