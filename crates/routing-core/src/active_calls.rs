//! In-flight call tracking
//!
//! [`ActiveCallStore`] is the routing layer's view of every call it has seen,
//! keyed by provider call sid. It is a best-effort hint: the persisted call
//! log stays the source of truth, so nothing here fails. Unknown sids turn
//! updates into no-ops and queries into empty results.
//!
//! Status changes are driven entirely by the caller. There are no timers, and
//! completed calls remain stored (but invisible to the "active" queries) until
//! [`ActiveCallStore::remove`] or [`ActiveCallStore::purge_completed`].

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::clock::Clock;
use crate::types::{ActiveCall, AgentIdentity, CallSid, CallStatus};

/// In-memory store of calls by sid
pub struct ActiveCallStore {
    calls: IndexMap<CallSid, ActiveCall>,
    clock: Arc<dyn Clock>,
}

impl ActiveCallStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            calls: IndexMap::new(),
            clock,
        }
    }

    /// Build an unassigned `Initiated` call stamped with the store's clock
    pub fn new_call(&self, sid: &str, from: &str, to: &str) -> ActiveCall {
        ActiveCall {
            sid: CallSid::from(sid),
            from: from.to_string(),
            to: to.to_string(),
            status: CallStatus::Initiated,
            agent: None,
            started_at: self.clock.now(),
        }
    }

    /// Insert a call, replacing any existing entry with the same sid.
    ///
    /// Last write wins; the replaced call is handed back.
    pub fn add(&mut self, call: ActiveCall) -> Option<ActiveCall> {
        debug!("tracking call {} ({} -> {}) as {}", call.sid, call.from, call.to, call.status);
        self.calls.insert(call.sid.clone(), call)
    }

    pub fn get(&self, sid: &str) -> Option<&ActiveCall> {
        self.calls.get(sid)
    }

    /// Set the status, and the agent when one is given.
    ///
    /// Unknown sids are ignored. An absent or empty agent leaves the current
    /// assignment alone, so this cannot unassign a call. Returns whether a
    /// call was updated.
    pub fn update_status(&mut self, sid: &str, status: CallStatus, agent: Option<&str>) -> bool {
        let Some(call) = self.calls.get_mut(sid) else {
            debug!("status update for unknown call {} ignored", sid);
            return false;
        };
        call.status = status;
        if let Some(agent) = agent.filter(|a| !a.is_empty()) {
            call.agent = Some(AgentIdentity::from(agent));
        }
        debug!("call {} is now {} (agent {:?})", sid, status, call.agent);
        true
    }

    pub fn remove(&mut self, sid: &str) -> Option<ActiveCall> {
        self.calls.shift_remove(sid)
    }

    /// Every call that has not completed
    pub fn list_active(&self) -> Vec<&ActiveCall> {
        self.calls.values().filter(|c| c.status.is_active()).collect()
    }

    /// Initiated calls nobody has picked up yet
    pub fn find_unassigned(&self) -> Vec<&ActiveCall> {
        self.calls
            .values()
            .filter(|c| c.agent.is_none() && c.status == CallStatus::Initiated)
            .collect()
    }

    pub fn find_by_agent(&self, agent: &str) -> Vec<&ActiveCall> {
        self.calls
            .values()
            .filter(|c| c.status.is_active() && c.agent.as_ref().is_some_and(|a| a.as_str() == agent))
            .collect()
    }

    /// Calls parked on hold for an agent, waiting to be bridged back
    pub fn find_held_by_agent(&self, agent: &str) -> Vec<&ActiveCall> {
        self.calls
            .values()
            .filter(|c| c.status == CallStatus::Held && c.agent.as_ref().is_some_and(|a| a.as_str() == agent))
            .collect()
    }

    /// Drop completed calls and return how many were dropped
    pub fn purge_completed(&mut self) -> usize {
        let before = self.calls.len();
        self.calls.retain(|_, call| call.status.is_active());
        before - self.calls.len()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use pretty_assertions::assert_eq;

    fn store() -> ActiveCallStore {
        ActiveCallStore::new(Arc::new(ManualClock::new()))
    }

    fn sids(calls: Vec<&ActiveCall>) -> Vec<&str> {
        calls.into_iter().map(|c| c.sid.as_str()).collect()
    }

    #[test]
    fn test_add_then_get_returns_equal_call() {
        let mut store = store();
        let call = store.new_call("CA1", "+15550001", "+15550100");
        assert!(store.add(call.clone()).is_none());
        assert_eq!(store.get("CA1"), Some(&call));
    }

    #[test]
    fn test_add_overwrites_by_sid() {
        let mut store = store();
        let first = store.new_call("CA1", "+15550001", "+15550100");
        let mut second = first.clone();
        second.from = "+15550002".to_string();

        store.add(first.clone());
        let replaced = store.add(second.clone());

        assert_eq!(replaced, Some(first));
        assert_eq!(store.get("CA1"), Some(&second));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_unknown_sid_is_noop() {
        let mut store = store();
        assert!(!store.update_status("nope", CallStatus::Bridged, None));
        assert!(store.get("nope").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_cannot_clear_agent() {
        let mut store = store();
        store.add(store.new_call("CA1", "a", "b"));
        store.update_status("CA1", CallStatus::Bridged, Some("agent1"));
        store.update_status("CA1", CallStatus::Held, None);
        store.update_status("CA1", CallStatus::Bridged, Some(""));

        let call = store.get("CA1").unwrap();
        assert_eq!(call.status, CallStatus::Bridged);
        assert_eq!(call.agent, Some(AgentIdentity::from("agent1")));
    }

    #[test]
    fn test_assignment_moves_call_out_of_unassigned() {
        let mut store = store();
        store.add(store.new_call("A", "x", "y"));
        assert_eq!(sids(store.find_unassigned()), vec!["A"]);

        store.update_status("A", CallStatus::Bridged, Some("agent1"));
        assert!(store.find_unassigned().is_empty());
        assert_eq!(sids(store.find_by_agent("agent1")), vec!["A"]);
    }

    #[test]
    fn test_held_unassigned_call_is_not_unassigned() {
        let mut store = store();
        store.add(store.new_call("A", "x", "y"));
        store.update_status("A", CallStatus::Held, None);
        assert!(store.find_unassigned().is_empty());
        assert_eq!(sids(store.list_active()), vec!["A"]);
    }

    #[test]
    fn test_completed_calls_leave_active_queries_but_stay_stored() {
        let mut store = store();
        store.add(store.new_call("A", "x", "y"));
        store.add(store.new_call("B", "x", "y"));
        store.update_status("A", CallStatus::Bridged, Some("agent1"));
        store.update_status("A", CallStatus::Completed, None);

        assert_eq!(sids(store.list_active()), vec!["B"]);
        assert!(store.find_by_agent("agent1").is_empty());
        assert_eq!(store.get("A").map(|c| c.status), Some(CallStatus::Completed));

        assert_eq!(store.purge_completed(), 1);
        assert!(store.get("A").is_none());
    }

    #[test]
    fn test_find_held_by_agent() {
        let mut store = store();
        store.add(store.new_call("A", "x", "y"));
        store.add(store.new_call("B", "x", "y"));
        store.update_status("A", CallStatus::Held, Some("agent1"));
        store.update_status("B", CallStatus::Bridged, Some("agent1"));

        assert_eq!(sids(store.find_held_by_agent("agent1")), vec!["A"]);
        assert_eq!(sids(store.find_by_agent("agent1")), vec!["A", "B"]);
    }

    #[test]
    fn test_remove_is_unconditional() {
        let mut store = store();
        assert!(store.remove("missing").is_none());
        store.add(store.new_call("A", "x", "y"));
        assert!(store.remove("A").is_some());
        assert!(store.is_empty());
    }
}
