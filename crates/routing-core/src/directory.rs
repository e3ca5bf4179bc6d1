//! Which agents answer which published numbers.
//!
//! The real mapping lives in the tenant database; the routing service only
//! needs the two lookups in [`AgentDirectory`].

use indexmap::IndexMap;

use crate::types::AgentIdentity;

/// Number ↔ agent lookups used when picking someone to ring
pub trait AgentDirectory: Send + Sync {
    /// Agents that may answer `number`, in ring order
    fn agents_for_number(&self, number: &str) -> Vec<AgentIdentity>;

    /// Numbers `identity` answers, in priority order
    fn numbers_for_agent(&self, identity: &str) -> Vec<String>;
}

/// Fixed directory built from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    numbers: IndexMap<String, Vec<AgentIdentity>>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number<I, S>(mut self, number: impl Into<String>, agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<AgentIdentity>,
    {
        self.insert(number, agents);
        self
    }

    pub fn insert<I, S>(&mut self, number: impl Into<String>, agents: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<AgentIdentity>,
    {
        self.numbers
            .insert(number.into(), agents.into_iter().map(Into::into).collect());
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl AgentDirectory for StaticDirectory {
    fn agents_for_number(&self, number: &str) -> Vec<AgentIdentity> {
        self.numbers.get(number).cloned().unwrap_or_default()
    }

    fn numbers_for_agent(&self, identity: &str) -> Vec<String> {
        self.numbers
            .iter()
            .filter(|(_, agents)| agents.iter().any(|a| a.as_str() == identity))
            .map(|(number, _)| number.clone())
            .collect()
    }
}
