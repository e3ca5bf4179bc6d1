//! Telephony provider interface
//!
//! Media and signalling belong to the provider. The routing layer asks it to
//! do three things (bridge a call to a client, park a call on hold media,
//! hang a call up) and updates its own stores once the request succeeds.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AgentIdentity, CallSid};

/// Failures reported by the telephony provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelephonyError {
    /// The provider answered but refused the request
    #[error("provider rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The provider could not be reached
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Call-control operations delegated to the provider
#[async_trait]
pub trait TelephonyClient: Send + Sync {
    /// Redirect `call_sid` so the provider fetches `webhook_url` and dials `identity`
    async fn bridge_to_client(
        &self,
        call_sid: &CallSid,
        identity: &AgentIdentity,
        webhook_url: &str,
    ) -> Result<(), TelephonyError>;

    /// Play hold media to the caller
    async fn play_hold(&self, call_sid: &CallSid) -> Result<(), TelephonyError>;

    async fn hangup(&self, call_sid: &CallSid) -> Result<(), TelephonyError>;
}

/// A request made through [`RecordingTelephony`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TelephonyAction {
    Bridge {
        call_sid: CallSid,
        identity: AgentIdentity,
        webhook_url: String,
    },
    Hold {
        call_sid: CallSid,
    },
    Hangup {
        call_sid: CallSid,
    },
}

/// In-process provider that only records what it was asked to do.
///
/// Used by tests and by the server when no provider is configured.
#[derive(Debug, Default)]
pub struct RecordingTelephony {
    actions: Mutex<Vec<TelephonyAction>>,
    fail_bridges: Mutex<usize>,
}

impl RecordingTelephony {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` bridge requests fail
    pub fn fail_next_bridges(&self, count: usize) {
        *self.fail_bridges.lock() = count;
    }

    pub fn actions(&self) -> Vec<TelephonyAction> {
        self.actions.lock().clone()
    }

    /// Sids bridged so far, paired with the identity they went to
    pub fn bridged(&self) -> Vec<(CallSid, AgentIdentity)> {
        self.actions
            .lock()
            .iter()
            .filter_map(|action| match action {
                TelephonyAction::Bridge { call_sid, identity, .. } => {
                    Some((call_sid.clone(), identity.clone()))
                }
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl TelephonyClient for RecordingTelephony {
    async fn bridge_to_client(
        &self,
        call_sid: &CallSid,
        identity: &AgentIdentity,
        webhook_url: &str,
    ) -> Result<(), TelephonyError> {
        {
            let mut remaining = self.fail_bridges.lock();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(TelephonyError::Transport(format!(
                    "simulated bridge failure for {}",
                    call_sid
                )));
            }
        }
        self.actions.lock().push(TelephonyAction::Bridge {
            call_sid: call_sid.clone(),
            identity: identity.clone(),
            webhook_url: webhook_url.to_string(),
        });
        Ok(())
    }

    async fn play_hold(&self, call_sid: &CallSid) -> Result<(), TelephonyError> {
        self.actions.lock().push(TelephonyAction::Hold {
            call_sid: call_sid.clone(),
        });
        Ok(())
    }

    async fn hangup(&self, call_sid: &CallSid) -> Result<(), TelephonyError> {
        self.actions.lock().push(TelephonyAction::Hangup {
            call_sid: call_sid.clone(),
        });
        Ok(())
    }
}
