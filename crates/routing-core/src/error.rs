use thiserror::Error;

use crate::telephony::TelephonyError;

/// Errors surfaced by the routing service.
///
/// The stores themselves never fail: unknown keys degrade to `None`, `false`
/// or empty collections. These variants only come out of operations that
/// either talk to the telephony provider or were asked to do something the
/// current state cannot satisfy.
///
/// # Examples
///
/// ```
/// use callhub_routing_core::{RoutingError, Result};
///
/// fn transfer_target(available: bool) -> Result<()> {
///     if !available {
///         return Err(RoutingError::agent_unavailable("+15550100"));
///     }
///     Ok(())
/// }
///
/// match transfer_target(false) {
///     Err(RoutingError::AgentUnavailable(identity)) => assert_eq!(identity, "+15550100"),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum RoutingError {
    /// No call with this sid is tracked.
    #[error("Call not found: {0}")]
    CallNotFound(String),

    /// The agent is offline or already on a call.
    #[error("Agent unavailable: {0}")]
    AgentUnavailable(String),

    /// A bounded queue is at capacity.
    ///
    /// Only produced when a per-number capacity was configured; the default
    /// queue is unbounded and never rejects.
    #[error("Queue for {number} is full (capacity {capacity})")]
    QueueFull { number: String, capacity: usize },

    /// The telephony provider refused or failed a request.
    #[error("Telephony error: {0}")]
    Telephony(#[from] TelephonyError),

    /// Caller-supplied input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RoutingError {
    pub fn call_not_found<S: Into<String>>(sid: S) -> Self {
        Self::CallNotFound(sid.into())
    }

    pub fn agent_unavailable<S: Into<String>>(identity: S) -> Self {
        Self::AgentUnavailable(identity.into())
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type for routing operations
pub type Result<T> = std::result::Result<T, RoutingError>;
