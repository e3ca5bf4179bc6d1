//! Shared domain types for presence, active calls and queued calls

use std::borrow::Borrow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque name of an agent/client endpoint.
///
/// Usually derived from the agent's phone number, but nothing here relies on
/// that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentIdentity(pub String);

impl AgentIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AgentIdentity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AgentIdentity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// lets maps keyed by AgentIdentity be queried with &str
impl Borrow<str> for AgentIdentity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Provider-assigned call identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallSid(pub String);

impl CallSid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CallSid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CallSid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for CallSid {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Stored availability of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentStatus {
    Idle,
    OnCall,
}

/// What a presence lookup reports.
///
/// `Offline` is never stored; it is what a missing or stale record reads as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresenceState {
    Offline,
    Idle,
    OnCall,
}

impl From<AgentStatus> for PresenceState {
    fn from(status: AgentStatus) -> Self {
        match status {
            AgentStatus::Idle => PresenceState::Idle,
            AgentStatus::OnCall => PresenceState::OnCall,
        }
    }
}

impl fmt::Display for PresenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PresenceState::Offline => "offline",
            PresenceState::Idle => "idle",
            PresenceState::OnCall => "on-call",
        };
        f.write_str(s)
    }
}

/// One agent's heartbeat record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceRecord {
    pub identity: AgentIdentity,
    pub last_seen: DateTime<Utc>,
    pub status: AgentStatus,
}

/// Lifecycle of an in-flight call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Initiated,
    Bridged,
    Held,
    Completed,
}

impl CallStatus {
    /// Everything except `Completed`
    pub fn is_active(&self) -> bool {
        !matches!(self, CallStatus::Completed)
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CallStatus::Initiated => "initiated",
            CallStatus::Bridged => "bridged",
            CallStatus::Held => "held",
            CallStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A call the routing layer is tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCall {
    pub sid: CallSid,
    pub from: String,
    pub to: String,
    pub status: CallStatus,
    /// Absent until routing assigns someone
    pub agent: Option<AgentIdentity>,
    pub started_at: DateTime<Utc>,
}

/// Where a queued call came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallSource {
    Pstn,
    Client,
    Transfer,
}

/// A call-routing request waiting for an agent on a published number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedCall {
    pub call_sid: CallSid,
    pub caller_id: String,
    pub to_number: String,
    pub enqueue_time: DateTime<Utc>,
    pub agent_id: Option<AgentIdentity>,
    pub company_id: Option<String>,
    pub source: Option<CallSource>,
}

impl QueuedCall {
    pub fn new(
        call_sid: CallSid,
        caller_id: impl Into<String>,
        to_number: impl Into<String>,
        enqueue_time: DateTime<Utc>,
    ) -> Self {
        Self {
            call_sid,
            caller_id: caller_id.into(),
            to_number: to_number.into(),
            enqueue_time,
            agent_id: None,
            company_id: None,
            source: None,
        }
    }

    pub fn with_source(mut self, source: CallSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_company(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }
}
