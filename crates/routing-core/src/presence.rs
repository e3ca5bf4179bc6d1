//! Agent presence with TTL-based liveness
//!
//! A record is written on every heartbeat and read back as "offline" once it
//! is older than the store's TTL. Nothing expires in the background: stale
//! records stay in memory until [`PresenceStore::remove`] or an explicit
//! [`PresenceStore::purge_stale`].

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use tracing::debug;

use crate::clock::Clock;
use crate::types::{AgentIdentity, AgentStatus, PresenceRecord, PresenceState};

/// Heartbeat age after which an agent reads as offline
pub const DEFAULT_PRESENCE_TTL_SECS: i64 = 30;

/// In-memory presence store
pub struct PresenceStore {
    /// Map of identity to last heartbeat, in first-seen order
    records: IndexMap<AgentIdentity, PresenceRecord>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl PresenceStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_ttl(clock, Duration::seconds(DEFAULT_PRESENCE_TTL_SECS))
    }

    /// The TTL is fixed for the lifetime of the store.
    pub fn with_ttl(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            records: IndexMap::new(),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Record a heartbeat.
    ///
    /// New identities start `Idle`; known ones keep whatever status they had.
    pub fn set(&mut self, identity: &str) {
        let now = self.clock.now();
        self.records
            .entry(AgentIdentity::from(identity))
            .and_modify(|record| record.last_seen = now)
            .or_insert_with(|| PresenceRecord {
                identity: AgentIdentity::from(identity),
                last_seen: now,
                status: AgentStatus::Idle,
            });
        debug!("presence heartbeat from {}", identity);
    }

    /// Force the status, refreshing the heartbeat and creating the record if needed
    pub fn set_status(&mut self, identity: &str, status: AgentStatus) {
        let now = self.clock.now();
        self.records
            .entry(AgentIdentity::from(identity))
            .and_modify(|record| {
                record.last_seen = now;
                record.status = status;
            })
            .or_insert_with(|| PresenceRecord {
                identity: AgentIdentity::from(identity),
                last_seen: now,
                status,
            });
        debug!("presence status for {} set to {:?}", identity, status);
    }

    pub fn get_status(&self, identity: &str) -> PresenceState {
        let now = self.clock.now();
        match self.records.get(identity) {
            Some(record) if self.is_live(record, now) => record.status.into(),
            _ => PresenceState::Offline,
        }
    }

    pub fn is_online(&self, identity: &str) -> bool {
        self.get_status(identity) != PresenceState::Offline
    }

    pub fn is_available(&self, identity: &str) -> bool {
        self.get_status(identity) == PresenceState::Idle
    }

    /// Raw record, stale or not
    pub fn get_record(&self, identity: &str) -> Option<&PresenceRecord> {
        self.records.get(identity)
    }

    pub fn remove(&mut self, identity: &str) {
        if self.records.shift_remove(identity).is_some() {
            debug!("presence removed for {}", identity);
        }
    }

    pub fn list_online(&self) -> Vec<AgentIdentity> {
        let now = self.clock.now();
        self.records
            .values()
            .filter(|record| self.is_live(record, now))
            .map(|record| record.identity.clone())
            .collect()
    }

    pub fn list_available(&self) -> Vec<AgentIdentity> {
        let now = self.clock.now();
        self.records
            .values()
            .filter(|record| self.is_live(record, now) && record.status == AgentStatus::Idle)
            .map(|record| record.identity.clone())
            .collect()
    }

    /// Drop every record past its TTL and return how many were dropped
    pub fn purge_stale(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let before = self.records.len();
        self.records.retain(|_, record| now - record.last_seen <= ttl);
        let purged = before - self.records.len();
        if purged > 0 {
            debug!("purged {} stale presence records", purged);
        }
        purged
    }

    /// Physically stored records, including stale ones
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn is_live(&self, record: &PresenceRecord, now: DateTime<Utc>) -> bool {
        now - record.last_seen <= self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn store() -> (PresenceStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        (PresenceStore::new(clock.clone()), clock)
    }

    #[test]
    fn test_unknown_identity_is_offline() {
        let (store, _) = store();
        assert_eq!(store.get_status("+1555"), PresenceState::Offline);
        assert!(!store.is_online("+1555"));
        assert!(!store.is_available("+1555"));
    }

    #[test]
    fn test_heartbeat_creates_idle_record() {
        let (mut store, _) = store();
        store.set("+1555");
        assert_eq!(store.get_status("+1555"), PresenceState::Idle);
        assert!(store.is_available("+1555"));
    }

    #[test]
    fn test_ttl_boundary_is_inclusive() {
        let (mut store, clock) = store();
        store.set("+1555");

        clock.advance(Duration::seconds(30));
        assert!(store.is_online("+1555"));

        clock.advance(Duration::milliseconds(1));
        assert!(!store.is_online("+1555"));
        assert_eq!(store.get_status("+1555"), PresenceState::Offline);
        // lazily expired, still physically stored
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_custom_ttl() {
        let clock = Arc::new(ManualClock::new());
        let mut store = PresenceStore::with_ttl(clock.clone(), Duration::seconds(5));
        assert_eq!(store.ttl(), Duration::seconds(5));
        store.set("agent");
        clock.advance(Duration::seconds(6));
        assert!(!store.is_online("agent"));
    }

    #[test]
    fn test_set_status_is_exact() {
        let (mut store, _) = store();
        store.set_status("+1555", AgentStatus::OnCall);
        assert_eq!(store.get_status("+1555"), PresenceState::OnCall);
        assert!(store.is_online("+1555"));
        assert!(!store.is_available("+1555"));
    }

    #[test]
    fn test_heartbeat_preserves_on_call() {
        let (mut store, clock) = store();
        store.set_status("+1555", AgentStatus::OnCall);
        clock.advance(Duration::seconds(10));
        store.set("+1555");
        assert_eq!(store.get_status("+1555"), PresenceState::OnCall);
        assert_eq!(store.get_record("+1555").unwrap().last_seen, clock.now());
    }

    #[test]
    fn test_heartbeat_revives_stale_record() {
        let (mut store, clock) = store();
        store.set("+1555");
        clock.advance(Duration::seconds(60));
        assert!(!store.is_online("+1555"));
        store.set("+1555");
        assert!(store.is_available("+1555"));
    }

    #[test]
    fn test_remove_is_unconditional() {
        let (mut store, _) = store();
        store.remove("nobody");
        store.set("+1555");
        store.remove("+1555");
        assert!(store.is_empty());
        assert_eq!(store.get_status("+1555"), PresenceState::Offline);
    }

    #[test]
    fn test_list_online_and_available() {
        let (mut store, clock) = store();
        store.set("stale");
        clock.advance(Duration::seconds(31));
        store.set("idle");
        store.set_status("busy", AgentStatus::OnCall);

        assert_eq!(
            store.list_online(),
            vec![AgentIdentity::from("idle"), AgentIdentity::from("busy")]
        );
        assert_eq!(store.list_available(), vec![AgentIdentity::from("idle")]);
    }

    #[test]
    fn test_purge_stale() {
        let (mut store, clock) = store();
        store.set("old");
        clock.advance(Duration::seconds(45));
        store.set("fresh");
        assert_eq!(store.purge_stale(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get_record("old").is_none());
    }
}
