//! Guarded-call outcome

use crate::core::lookup_kind::LookupKind;

/// Result of one guarded lookup call: a value or a recorded error string
///
/// Exactly one of the two is present by construction. Failure strings name
/// the capability and the cause (`"OrderService: timeout"`,
/// `"PaymentService: unavailable"`), so a snapshot's error list reads on
/// its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome<T> {
    /// The lookup produced a value before its deadline
    Value(T),
    /// The lookup failed; the string names the capability and the cause
    Failed(String),
}

impl<T> CallOutcome<T> {
    /// Successful outcome carrying the fetched value
    pub fn value(value: T) -> Self {
        CallOutcome::Value(value)
    }

    /// Failed outcome for a lookup that exceeded its per-call timeout
    pub fn timeout(kind: LookupKind) -> Self {
        CallOutcome::Failed(format!("{}: timeout", kind))
    }

    /// Failed outcome for any other reported lookup failure
    pub fn failure(kind: LookupKind, reason: impl std::fmt::Display) -> Self {
        CallOutcome::Failed(format!("{}: {}", kind, reason))
    }

    /// True when the outcome carries a value
    pub fn is_value(&self) -> bool {
        matches!(self, CallOutcome::Value(_))
    }

    /// Split into (value, error) halves for snapshot assembly
    pub fn into_parts(self) -> (Option<T>, Option<String>) {
        match self {
            CallOutcome::Value(value) => (Some(value), None),
            CallOutcome::Failed(error) => (None, Some(error)),
        }
    }
}
