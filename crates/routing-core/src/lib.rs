//! # Callhub Routing Core
//!
//! In-memory state used to route inbound PSTN calls to agents:
//!
//! - [`PresenceStore`]: which agent identities are online, and whether they
//!   are idle or on a call, with TTL-based liveness
//! - [`ActiveCallStore`]: every in-flight call by sid, with status and
//!   assigned agent
//! - [`NumberCallQueueManager`]: per-number FIFO of calls waiting for an agent
//!
//! [`RoutingService`] composes the three behind one lock and drives the
//! telephony provider through the [`TelephonyClient`] trait.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │  provider webhooks   │   │    presence pings    │
//! └──────────┬───────────┘   └──────────┬───────────┘
//!            └─────────────┬────────────┘
//!                ┌─────────▼─────────┐      ┌─────────────────┐
//!                │  RoutingService   ├─────►│ TelephonyClient │
//!                └─────────┬─────────┘      └─────────────────┘
//!      ┌───────────────────┼────────────────────┐
//! ┌────▼──────────┐ ┌──────▼─────────┐ ┌────────▼───────────────┐
//! │ PresenceStore │ │ ActiveCallStore│ │ NumberCallQueueManager │
//! └───────────────┘ └────────────────┘ └────────────────────────┘
//! ```
//!
//! The stores never fail. Unknown identities read as offline, unknown sids
//! make updates no-ops, and empty queues dequeue to `None`. Only the service,
//! which talks to the provider, returns [`Result`].
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use callhub_routing_core::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let directory = StaticDirectory::new().with_number("+15550100", ["+1555"]);
//! let telephony = Arc::new(RecordingTelephony::new());
//! let service = RoutingService::new(RoutingSettings::default(), Arc::new(directory), telephony);
//!
//! service.presence_ping("+1555").await?;
//! let decision = service
//!     .route_inbound(InboundCall {
//!         call_sid: "CA1".into(),
//!         from: "+15550001".to_string(),
//!         to: "+15550100".to_string(),
//!         company_id: None,
//!     })
//!     .await?;
//! assert_eq!(decision, RoutingDecision::Connect { agent: "+1555".into() });
//! # Ok(())
//! # }
//! ```

pub mod active_calls;
pub mod clock;
pub mod directory;
pub mod error;
pub mod presence;
pub mod queue;
pub mod service;
pub mod telephony;
pub mod types;

pub use active_calls::ActiveCallStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use directory::{AgentDirectory, StaticDirectory};
pub use error::{Result, RoutingError};
pub use presence::{DEFAULT_PRESENCE_TTL_SECS, PresenceStore};
pub use queue::NumberCallQueueManager;
pub use service::{
    InboundCall, PingOutcome, ProviderCallStatus, PurgeReport, QueueDepth, RejectReason,
    RoutingDecision, RoutingService, RoutingSettings, RoutingSnapshot, RoutingState,
};
pub use telephony::{RecordingTelephony, TelephonyAction, TelephonyClient, TelephonyError};
pub use types::{
    ActiveCall, AgentIdentity, AgentStatus, CallSid, CallSource, CallStatus, PresenceRecord,
    PresenceState, QueuedCall,
};

/// Commonly used types
pub mod prelude {
    pub use crate::{
        ActiveCall, ActiveCallStore, AgentDirectory, AgentIdentity, AgentStatus, CallSid,
        CallSource, CallStatus, Clock, InboundCall, ManualClock, NumberCallQueueManager,
        PingOutcome, PresenceState, PresenceStore, ProviderCallStatus, QueuedCall,
        RecordingTelephony, RejectReason, Result, RoutingDecision, RoutingError, RoutingService,
        RoutingSettings, StaticDirectory, SystemClock, TelephonyClient,
    };
}
