//! # Routing service
//!
//! [`RoutingService`] is the composition root for the three stores. It is
//! built once per process and shared (`Arc<RoutingService>`) with whatever
//! surface receives provider webhooks and presence pings.
//!
//! ```text
//!   inbound webhook ──► route_inbound ──┬─► Connect  (idle agent found, bridged)
//!                                       ├─► Queued   (agents busy, caller on hold)
//!                                       └─► Reject   (nobody online / queue full)
//!
//!   presence ping ────► presence_ping ──► bridge back held calls, then drain queue
//!   status webhook ───► call_status ────► complete, free the agent, drain queue
//! ```
//!
//! ## Locking
//!
//! All three stores sit behind one `parking_lot::Mutex`, so a multi-store
//! update (e.g. "mark the call bridged and the agent on-call") is never
//! observed half-done by another handler in this process. The lock is never
//! held across an `.await`: each operation decides under the lock, releases
//! it, talks to the provider, then re-locks to record the outcome. Agents are
//! reserved (`on-call`) before the provider call so two concurrent routings
//! cannot pick the same agent.
//!
//! State is process-local. Several instances behind a load balancer would
//! each see a different slice of presence, calls and queues.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::active_calls::ActiveCallStore;
use crate::clock::{Clock, SystemClock};
use crate::directory::AgentDirectory;
use crate::error::{Result, RoutingError};
use crate::presence::{DEFAULT_PRESENCE_TTL_SECS, PresenceStore};
use crate::queue::NumberCallQueueManager;
use crate::telephony::TelephonyClient;
use crate::types::{
    ActiveCall, AgentIdentity, AgentStatus, CallSid, CallSource, CallStatus, PresenceState,
    QueuedCall,
};

/// Tunables for a [`RoutingService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingSettings {
    /// URL the provider fetches when a call is bridged to a client
    pub bridge_webhook_url: String,
    /// Queue callers even when none of the number's agents are online
    pub queue_when_offline: bool,
    pub presence_ttl: Duration,
    /// Per-number queue limit; `None` for unbounded
    pub queue_capacity: Option<usize>,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bridge_webhook_url: "http://127.0.0.1:8090/voice/bridge".to_string(),
            queue_when_offline: false,
            presence_ttl: Duration::seconds(DEFAULT_PRESENCE_TTL_SECS),
            queue_capacity: None,
        }
    }
}

/// An inbound call as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundCall {
    pub call_sid: CallSid,
    pub from: String,
    /// Published number that was dialled; the routing key
    pub to: String,
    #[serde(default)]
    pub company_id: Option<String>,
}

/// Why a call was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    NoAgentsOnline,
    QueueFull,
}

/// Outcome of [`RoutingService::route_inbound`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RoutingDecision {
    /// Bridged straight to an idle agent
    Connect { agent: AgentIdentity },
    /// Waiting on hold; `position` is 1-based
    Queued { number: String, position: usize },
    Reject { reason: RejectReason },
    /// The caller hung up while the bridge was being set up
    Abandoned,
}

/// Call states the provider posts to the status webhook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderCallStatus {
    Queued,
    Initiated,
    Ringing,
    InProgress,
    Completed,
    Busy,
    Failed,
    NoAnswer,
    Canceled,
}

impl ProviderCallStatus {
    /// The call is over from the provider's point of view
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProviderCallStatus::Completed
                | ProviderCallStatus::Busy
                | ProviderCallStatus::Failed
                | ProviderCallStatus::NoAnswer
                | ProviderCallStatus::Canceled
        )
    }
}

impl FromStr for ProviderCallStatus {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "queued" => Ok(Self::Queued),
            "initiated" => Ok(Self::Initiated),
            "ringing" => Ok(Self::Ringing),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "busy" => Ok(Self::Busy),
            "failed" => Ok(Self::Failed),
            "no-answer" => Ok(Self::NoAnswer),
            "canceled" => Ok(Self::Canceled),
            other => Err(RoutingError::invalid_input(format!("unknown call status '{}'", other))),
        }
    }
}

/// Result of a presence ping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingOutcome {
    pub identity: AgentIdentity,
    pub status: PresenceState,
    /// Held calls bridged back to this agent
    pub bridged: Vec<CallSid>,
    /// Queued call handed to this agent, if any
    pub dispatched: Option<CallSid>,
}

/// Queue depth for one number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueDepth {
    pub number: String,
    pub depth: usize,
}

/// Point-in-time view of the routing state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingSnapshot {
    pub taken_at: DateTime<Utc>,
    pub online: Vec<AgentIdentity>,
    pub available: Vec<AgentIdentity>,
    pub active_calls: Vec<ActiveCall>,
    pub queues: Vec<QueueDepth>,
}

/// Counts from [`RoutingService::purge`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeReport {
    pub stale_presence: usize,
    pub completed_calls: usize,
}

/// The three stores, always locked together
pub struct RoutingState {
    presence: PresenceStore,
    calls: ActiveCallStore,
    queues: NumberCallQueueManager<QueuedCall>,
}

impl RoutingState {
    pub fn presence(&self) -> &PresenceStore {
        &self.presence
    }

    pub fn calls(&self) -> &ActiveCallStore {
        &self.calls
    }

    pub fn queues(&self) -> &NumberCallQueueManager<QueuedCall> {
        &self.queues
    }

    /// Mark `agent` idle if it is online and has no other active call.
    /// Returns whether the agent was freed.
    fn release_agent(&mut self, agent: &str) -> bool {
        if self.presence.is_online(agent) && self.calls.find_by_agent(agent).is_empty() {
            self.presence.set_status(agent, AgentStatus::Idle);
            true
        } else {
            false
        }
    }

    /// Record that `sid` was bridged to `agent`.
    ///
    /// The lock is dropped while the provider works, so the call may have
    /// ended in the meantime. Then nothing is recorded, `agent` is released
    /// and `false` is returned.
    fn confirm_bridge(&mut self, sid: &str, agent: &str) -> bool {
        match self.calls.get(sid) {
            Some(call) if call.status.is_active() => {
                self.calls.update_status(sid, CallStatus::Bridged, Some(agent));
                true
            }
            _ => {
                self.release_agent(agent);
                false
            }
        }
    }

    /// Dequeue the oldest head across `numbers` whose call is still waiting.
    /// Entries for calls that ended or were picked up elsewhere are dropped.
    fn next_waiting(&mut self, numbers: &[String]) -> Option<QueuedCall> {
        loop {
            let number = numbers
                .iter()
                .filter_map(|n| self.queues.peek(n).map(|q| (n, q.enqueue_time)))
                .min_by_key(|(_, at)| *at)
                .map(|(n, _)| n.clone())?;
            let item = self.queues.dequeue(&number)?;
            let waiting = self.calls.get(item.call_sid.as_str()).is_some_and(|c| {
                matches!(c.status, CallStatus::Held | CallStatus::Initiated)
            });
            if waiting {
                return Some(item);
            }
            debug!("dropping stale queue entry for {}", item.call_sid);
        }
    }
}

impl fmt::Debug for RoutingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingState")
            .field("presence", &self.presence.len())
            .field("calls", &self.calls.len())
            .field("queued", &self.queues.total_len())
            .finish()
    }
}

/// Routes inbound calls using presence, active calls and per-number queues
pub struct RoutingService {
    state: Mutex<RoutingState>,
    directory: Arc<dyn AgentDirectory>,
    telephony: Arc<dyn TelephonyClient>,
    clock: Arc<dyn Clock>,
    settings: RoutingSettings,
}

impl RoutingService {
    pub fn new(
        settings: RoutingSettings,
        directory: Arc<dyn AgentDirectory>,
        telephony: Arc<dyn TelephonyClient>,
    ) -> Self {
        Self::with_clock(settings, directory, telephony, Arc::new(SystemClock))
    }

    pub fn with_clock(
        settings: RoutingSettings,
        directory: Arc<dyn AgentDirectory>,
        telephony: Arc<dyn TelephonyClient>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let queues = match settings.queue_capacity {
            Some(limit) => NumberCallQueueManager::with_capacity(limit),
            None => NumberCallQueueManager::new(),
        };
        let state = RoutingState {
            presence: PresenceStore::with_ttl(clock.clone(), settings.presence_ttl),
            calls: ActiveCallStore::new(clock.clone()),
            queues,
        };
        Self {
            state: Mutex::new(state),
            directory,
            telephony,
            clock,
            settings,
        }
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Read the stores under the lock
    pub fn inspect<R>(&self, f: impl FnOnce(&RoutingState) -> R) -> R {
        f(&*self.lock())
    }

    pub fn presence_status(&self, identity: &str) -> PresenceState {
        self.lock().presence.get_status(identity)
    }

    pub fn call(&self, sid: &str) -> Option<ActiveCall> {
        self.lock().calls.get(sid).cloned()
    }

    /// Decide what happens to a new inbound call and carry it out
    #[instrument(skip(self), fields(sid = %call.call_sid, to = %call.to))]
    pub async fn route_inbound(&self, call: InboundCall) -> Result<RoutingDecision> {
        let reserved = {
            let mut guard = self.lock();
            let state = &mut *guard;
            let tracked = state.calls.new_call(call.call_sid.as_str(), &call.from, &call.to);
            state.calls.add(tracked);

            let agent = self
                .directory
                .agents_for_number(&call.to)
                .into_iter()
                .find(|agent| state.presence.is_available(agent.as_str()));
            if let Some(agent) = &agent {
                state.presence.set_status(agent.as_str(), AgentStatus::OnCall);
            }
            agent
        };

        if let Some(agent) = reserved {
            match self
                .telephony
                .bridge_to_client(&call.call_sid, &agent, &self.settings.bridge_webhook_url)
                .await
            {
                Ok(()) => {
                    let confirmed = self
                        .lock()
                        .confirm_bridge(call.call_sid.as_str(), agent.as_str());
                    if confirmed {
                        info!("call {} connected to {}", call.call_sid, agent);
                        return Ok(RoutingDecision::Connect { agent });
                    }
                    info!("call {} ended before {} picked up", call.call_sid, agent);
                    self.dispatch_logged(&agent).await;
                    return Ok(RoutingDecision::Abandoned);
                }
                Err(e) => {
                    warn!("bridging {} to {} failed, queueing instead: {}", call.call_sid, agent, e);
                    self.lock().release_agent(agent.as_str());
                    return self.queue_inbound(&call, true).await;
                }
            }
        }

        self.queue_inbound(&call, false).await
    }

    /// Park an inbound call, or turn it away when nobody could take it
    async fn queue_inbound(&self, call: &InboundCall, force: bool) -> Result<RoutingDecision> {
        let outcome = {
            let mut guard = self.lock();
            let state = &mut *guard;
            let anyone_online = self
                .directory
                .agents_for_number(&call.to)
                .iter()
                .any(|agent| state.presence.is_online(agent.as_str()));

            if !(force || anyone_online || self.settings.queue_when_offline) {
                state.calls.update_status(call.call_sid.as_str(), CallStatus::Completed, None);
                Err(RejectReason::NoAgentsOnline)
            } else {
                let mut item = QueuedCall::new(call.call_sid.clone(), &call.from, &call.to, self.clock.now())
                    .with_source(CallSource::Pstn);
                item.company_id = call.company_id.clone();
                match state.queues.enqueue(&call.to, item) {
                    Ok(()) => {
                        state.calls.update_status(call.call_sid.as_str(), CallStatus::Held, None);
                        Ok(state.queues.count(&call.to))
                    }
                    Err(e) => {
                        debug!("{}", e);
                        state.calls.update_status(call.call_sid.as_str(), CallStatus::Completed, None);
                        Err(RejectReason::QueueFull)
                    }
                }
            }
        };

        match outcome {
            Ok(position) => {
                if let Err(e) = self.telephony.play_hold(&call.call_sid).await {
                    warn!("hold media for {} failed: {}", call.call_sid, e);
                }
                info!("call {} queued on {} at position {}", call.call_sid, call.to, position);
                Ok(RoutingDecision::Queued {
                    number: call.to.clone(),
                    position,
                })
            }
            Err(reason) => {
                if let Err(e) = self.telephony.hangup(&call.call_sid).await {
                    warn!("hangup of rejected call {} failed: {}", call.call_sid, e);
                }
                info!("call {} rejected: {:?}", call.call_sid, reason);
                Ok(RoutingDecision::Reject { reason })
            }
        }
    }

    /// Heartbeat from an agent's client.
    ///
    /// Calls left on hold for this agent are bridged back; an agent that is
    /// still idle afterwards is offered the oldest queued call on its numbers.
    #[instrument(skip(self))]
    pub async fn presence_ping(&self, identity: &str) -> Result<PingOutcome> {
        let held: Vec<CallSid> = {
            let mut guard = self.lock();
            let state = &mut *guard;
            let revived = !state.presence.is_online(identity);
            state.presence.set(identity);
            // a record that lapsed mid-call comes back with its old status
            if revived && state.calls.find_by_agent(identity).is_empty() {
                state.presence.set_status(identity, AgentStatus::Idle);
            }
            let held: Vec<CallSid> = state
                .calls
                .find_held_by_agent(identity)
                .into_iter()
                .map(|c| c.sid.clone())
                .collect();
            if !held.is_empty() {
                state.presence.set_status(identity, AgentStatus::OnCall);
            }
            held
        };

        let agent = AgentIdentity::from(identity);
        let mut bridged = Vec::new();
        for sid in &held {
            match self
                .telephony
                .bridge_to_client(sid, &agent, &self.settings.bridge_webhook_url)
                .await
            {
                Ok(()) => {
                    if self.lock().confirm_bridge(sid.as_str(), identity) {
                        info!("held call {} bridged back to {}", sid, identity);
                        bridged.push(sid.clone());
                    } else {
                        debug!("held call {} ended during bridge-back", sid);
                    }
                }
                Err(e) => warn!("bridge-back of {} to {} failed: {}", sid, identity, e),
            }
        }

        if !held.is_empty() && bridged.is_empty() {
            let mut guard = self.lock();
            let state = &mut *guard;
            let has_live_leg = state
                .calls
                .find_by_agent(identity)
                .iter()
                .any(|c| c.status == CallStatus::Bridged);
            if !has_live_leg {
                state.presence.set_status(identity, AgentStatus::Idle);
            }
        }

        let dispatched = self.dispatch_logged(&agent).await;

        Ok(PingOutcome {
            identity: agent,
            status: self.presence_status(identity),
            bridged,
            dispatched,
        })
    }

    /// Apply a provider status callback.
    ///
    /// Terminal states complete the call, drop any queue entry for it and
    /// free its agent. `in-progress` on a held call that still has an online
    /// agent means the provider reconnected the leg, so the call is marked
    /// bridged again. Everything else, and unknown sids, are ignored.
    #[instrument(skip(self))]
    pub async fn call_status(&self, sid: &str, status: ProviderCallStatus) -> Result<()> {
        if status == ProviderCallStatus::InProgress {
            self.resume_held(sid);
            return Ok(());
        }
        if !status.is_terminal() {
            debug!("call {} reported {:?}, nothing to do", sid, status);
            return Ok(());
        }

        let freed = {
            let mut guard = self.lock();
            let state = &mut *guard;
            let agent = state.calls.get(sid).and_then(|c| c.agent.clone());
            state.calls.update_status(sid, CallStatus::Completed, None);
            if state.queues.remove_first_where(|q| q.call_sid.as_str() == sid) {
                debug!("caller on {} hung up while queued", sid);
            }
            agent.filter(|a| state.release_agent(a.as_str()))
        };

        if let Some(agent) = freed {
            info!("call {} ended, {} is free", sid, agent);
            self.dispatch_logged(&agent).await;
        }
        Ok(())
    }

    fn resume_held(&self, sid: &str) {
        let mut guard = self.lock();
        let state = &mut *guard;
        let agent = match state.calls.get(sid) {
            Some(call) if call.status == CallStatus::Held => call.agent.clone(),
            _ => None,
        };
        // queued callers hear hold media on a live leg too; they have no agent
        let Some(agent) = agent.filter(|a| state.presence.is_online(a.as_str())) else {
            debug!("call {} in progress, nothing to resume", sid);
            return;
        };
        state.calls.update_status(sid, CallStatus::Bridged, None);
        state.presence.set_status(agent.as_str(), AgentStatus::OnCall);
        info!("held call {} resumed with {}", sid, agent);
    }

    /// Put a call on hold, keeping its agent assignment
    #[instrument(skip(self))]
    pub async fn hold(&self, sid: &str) -> Result<()> {
        {
            let mut state = self.lock();
            match state.calls.get(sid) {
                Some(call) if call.status.is_active() => {}
                _ => return Err(RoutingError::call_not_found(sid)),
            }
            state.calls.update_status(sid, CallStatus::Held, None);
        }
        self.telephony.play_hold(&CallSid::from(sid)).await?;
        Ok(())
    }

    /// Move a call to another agent, who must be available.
    ///
    /// A call still waiting in a queue leaves it; if the bridge fails it goes
    /// back to the tail.
    #[instrument(skip(self))]
    pub async fn transfer(&self, sid: &str, target: &str) -> Result<()> {
        let (previous, dequeued) = {
            let mut guard = self.lock();
            let state = &mut *guard;
            let previous = match state.calls.get(sid) {
                Some(call) if call.status.is_active() => call.agent.clone(),
                _ => return Err(RoutingError::call_not_found(sid)),
            };
            if !state.presence.is_available(target) {
                return Err(RoutingError::agent_unavailable(target));
            }
            state.presence.set_status(target, AgentStatus::OnCall);
            let dequeued = state.queues.take_first_where(|q| q.call_sid.as_str() == sid);
            (previous, dequeued)
        };

        let call_sid = CallSid::from(sid);
        let target_identity = AgentIdentity::from(target);
        if let Err(e) = self
            .telephony
            .bridge_to_client(&call_sid, &target_identity, &self.settings.bridge_webhook_url)
            .await
        {
            self.lock().release_agent(target);
            if let Some(item) = dequeued {
                self.requeue(item).await;
            }
            return Err(e.into());
        }

        let (confirmed, freed) = {
            let mut guard = self.lock();
            let state = &mut *guard;
            if state.confirm_bridge(sid, target) {
                let freed = previous
                    .filter(|p| p.as_str() != target)
                    .filter(|p| state.release_agent(p.as_str()));
                (true, freed)
            } else {
                (false, Some(target_identity))
            }
        };

        if !confirmed {
            info!("call {} ended during transfer to {}", sid, target);
            if let Some(agent) = freed {
                self.dispatch_logged(&agent).await;
            }
            return Err(RoutingError::call_not_found(sid));
        }

        info!("call {} transferred to {}", sid, target);
        if let Some(agent) = freed {
            self.dispatch_logged(&agent).await;
        }
        Ok(())
    }

    /// Agent's client went away: forget its presence and park its live
    /// calls on hold so the next ping bridges them back
    #[instrument(skip(self))]
    pub async fn agent_offline(&self, identity: &str) -> Vec<CallSid> {
        let parked: Vec<CallSid> = {
            let mut guard = self.lock();
            let state = &mut *guard;
            state.presence.remove(identity);
            let live: Vec<CallSid> = state
                .calls
                .find_by_agent(identity)
                .into_iter()
                .filter(|c| c.status == CallStatus::Bridged)
                .map(|c| c.sid.clone())
                .collect();
            for sid in &live {
                state.calls.update_status(sid.as_str(), CallStatus::Held, None);
            }
            live
        };

        for sid in &parked {
            if let Err(e) = self.telephony.play_hold(sid).await {
                warn!("hold media for {} failed: {}", sid, e);
            }
        }
        if !parked.is_empty() {
            info!("{} went offline, {} call(s) parked", identity, parked.len());
        }
        parked
    }

    pub fn snapshot(&self) -> RoutingSnapshot {
        let state = self.lock();
        let queues = state
            .queues
            .get_active_numbers()
            .into_iter()
            .map(|number| {
                let depth = state.queues.count(&number);
                QueueDepth { number, depth }
            })
            .collect();
        RoutingSnapshot {
            taken_at: self.clock.now(),
            online: state.presence.list_online(),
            available: state.presence.list_available(),
            active_calls: state.calls.list_active().into_iter().cloned().collect(),
            queues,
        }
    }

    /// Drop stale presence and completed calls
    pub fn purge(&self) -> PurgeReport {
        let mut state = self.lock();
        let report = PurgeReport {
            stale_presence: state.presence.purge_stale(),
            completed_calls: state.calls.purge_completed(),
        };
        debug!("purge: {:?}", report);
        report
    }

    /// Hand the oldest call queued on one of `agent`'s numbers to `agent`,
    /// if it is idle
    async fn dispatch_next(&self, agent: &AgentIdentity) -> Result<Option<CallSid>> {
        let numbers = self.directory.numbers_for_agent(agent.as_str());
        loop {
            let item = {
                let mut guard = self.lock();
                let state = &mut *guard;
                if !state.presence.is_available(agent.as_str()) {
                    return Ok(None);
                }
                let Some(item) = state.next_waiting(&numbers) else {
                    return Ok(None);
                };
                state.presence.set_status(agent.as_str(), AgentStatus::OnCall);
                item
            };

            match self
                .telephony
                .bridge_to_client(&item.call_sid, agent, &self.settings.bridge_webhook_url)
                .await
            {
                Ok(()) => {
                    if self.lock().confirm_bridge(item.call_sid.as_str(), agent.as_str()) {
                        info!("queued call {} dispatched to {}", item.call_sid, agent);
                        return Ok(Some(item.call_sid));
                    }
                    debug!("queued call {} ended during dispatch", item.call_sid);
                }
                Err(e) => {
                    self.lock().release_agent(agent.as_str());
                    self.requeue(item).await;
                    return Err(e.into());
                }
            }
        }
    }

    async fn dispatch_logged(&self, agent: &AgentIdentity) -> Option<CallSid> {
        match self.dispatch_next(agent).await {
            Ok(sid) => sid,
            Err(e) => {
                warn!("dispatch to {} failed: {}", agent, e);
                None
            }
        }
    }

    /// Put a call back at the tail of its number's queue. The queue has no
    /// head insertion. A call that cannot be queued again is ended.
    async fn requeue(&self, item: QueuedCall) {
        let sid = item.call_sid.clone();
        let requeued = {
            let mut guard = self.lock();
            let state = &mut *guard;
            if !state.calls.get(sid.as_str()).is_some_and(|c| c.status.is_active()) {
                return;
            }
            let number = item.to_number.clone();
            match state.queues.enqueue(&number, item) {
                Ok(()) => true,
                Err(e) => {
                    warn!("could not requeue {}: {}", sid, e);
                    state.calls.update_status(sid.as_str(), CallStatus::Completed, None);
                    false
                }
            }
        };
        if !requeued {
            if let Err(e) = self.telephony.hangup(&sid).await {
                warn!("hangup of unqueueable call {} failed: {}", sid, e);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, RoutingState> {
        self.state.lock()
    }
}
