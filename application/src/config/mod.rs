//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`BatchParams`]: fan-out loop control (concurrency cap, per-call timeout)

pub mod batch_params;

pub use batch_params::BatchParams;
