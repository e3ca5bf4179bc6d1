//! # Callhub Routing Server
//!
//! HTTP front for [`callhub_routing_core`]: provider voice webhooks, agent
//! presence pings and a few operator endpoints, all backed by one shared
//! [`RoutingService`](callhub_routing_core::RoutingService).
//!
//! State lives in process memory. Run a single instance.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;

pub use api::{ApiState, create_router};
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use logging::init_logging;
