//! # Per-number call queues
//!
//! [`NumberCallQueueManager`] holds call-routing requests that arrived on a
//! published number while no agent could take them. Each number has its own
//! FIFO; the routing key is the dialled number string.
//!
//! ## Behavior
//!
//! - Queues are created on first `enqueue`/`dequeue` for a number (explicit
//!   get-or-insert); pure reads never create one.
//! - `clear` deletes a number's queue outright; later writes recreate it.
//! - [`NumberCallQueueManager::remove_first_where`] searches **every**
//!   number's queue, in the order numbers were first seen, and removes only
//!   the first match.
//! - Queues are unbounded unless a per-number capacity is configured with
//!   [`NumberCallQueueManager::with_capacity`].
//!
//! ## Examples
//!
//! ```rust
//! use callhub_routing_core::queue::NumberCallQueueManager;
//!
//! let mut queues = NumberCallQueueManager::new();
//! queues.enqueue("+15550100", "first").unwrap();
//! queues.enqueue("+15550100", "second").unwrap();
//!
//! assert_eq!(queues.peek("+15550100"), Some(&"first"));
//! assert_eq!(queues.dequeue("+15550100"), Some("first"));
//! assert_eq!(queues.count("+15550100"), 1);
//! ```

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Result, RoutingError};

/// FIFO queues keyed by published phone number
#[derive(Debug)]
pub struct NumberCallQueueManager<T> {
    /// Queues in the order their numbers were first seen
    queues: IndexMap<String, VecDeque<T>>,
    /// Per-number limit; `None` means unbounded
    capacity: Option<usize>,
}

impl<T> NumberCallQueueManager<T> {
    /// Unbounded queues
    pub fn new() -> Self {
        Self {
            queues: IndexMap::new(),
            capacity: None,
        }
    }

    /// Queues that refuse new items once a number holds `limit` of them
    pub fn with_capacity(limit: usize) -> Self {
        Self {
            queues: IndexMap::new(),
            capacity: Some(limit),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Append to the tail of `number`'s queue.
    ///
    /// Only fails with [`RoutingError::QueueFull`] when a capacity was
    /// configured.
    pub fn enqueue(&mut self, number: &str, item: T) -> Result<()> {
        let capacity = self.capacity;
        let queue = self.queues.entry(number.to_string()).or_default();
        if let Some(limit) = capacity {
            if queue.len() >= limit {
                return Err(RoutingError::QueueFull {
                    number: number.to_string(),
                    capacity: limit,
                });
            }
        }
        queue.push_back(item);
        debug!("queued call on {} (depth {})", number, queue.len());
        Ok(())
    }

    /// Remove and return the oldest item; an empty queue is left in place
    pub fn dequeue(&mut self, number: &str) -> Option<T> {
        let item = self.queues.entry(number.to_string()).or_default().pop_front();
        if item.is_some() {
            debug!("dequeued call from {}", number);
        }
        item
    }

    pub fn peek(&self, number: &str) -> Option<&T> {
        self.queues.get(number).and_then(|q| q.front())
    }

    /// The live queue for `number`, oldest first
    pub fn list(&self, number: &str) -> impl Iterator<Item = &T> + '_ {
        self.queues.get(number).into_iter().flat_map(|q| q.iter())
    }

    pub fn count(&self, number: &str) -> usize {
        self.queues.get(number).map_or(0, |q| q.len())
    }

    /// Forget `number`'s queue and everything in it
    pub fn clear(&mut self, number: &str) {
        if let Some(dropped) = self.queues.shift_remove(number) {
            debug!("cleared queue for {} ({} calls dropped)", number, dropped.len());
        }
    }

    /// Remove the first item matching `predicate`, searching all numbers.
    ///
    /// Numbers are scanned in first-seen order and each queue head to tail.
    /// Returns `true` as soon as one item is removed; other items and queues
    /// are left untouched.
    // TODO: accept the number as a scope once every caller passes it
    pub fn remove_first_where<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.take_first_where(predicate).is_some()
    }

    /// Like [`remove_first_where`](Self::remove_first_where), but hands the
    /// removed item back
    pub fn take_first_where<F>(&mut self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        for (number, queue) in self.queues.iter_mut() {
            if let Some(index) = queue.iter().position(|item| predicate(item)) {
                debug!("removed queued call from {} at position {}", number, index);
                return queue.remove(index);
            }
        }
        None
    }

    /// Numbers with at least one waiting item, in first-seen order
    pub fn get_active_numbers(&self) -> Vec<String> {
        self.queues
            .iter()
            .filter(|(_, q)| !q.is_empty())
            .map(|(number, _)| number.clone())
            .collect()
    }

    /// Items waiting across every number
    pub fn total_len(&self) -> usize {
        self.queues.values().map(|q| q.len()).sum()
    }
}

impl<T> Default for NumberCallQueueManager<T> {
    fn default() -> Self {
        Self::new()
    }
}
