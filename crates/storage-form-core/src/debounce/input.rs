//! Debounced propagation of raw input values.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::time::Instant;

use super::config::DebounceConfig;

/// A value waiting for its quiet period to pass.
#[derive(Debug, Clone)]
struct Pending {
    value: String,
    deadline: Instant,
}

/// Delays raw input values until their key has been quiet for a while.
///
/// Each key has its own timer. Pushing a value replaces whatever was pending
/// for that key and restarts its quiet period, so only the latest value of a
/// burst is ever released, and it is released exactly once.
///
/// The caller supplies the current instant to every operation and is
/// responsible for polling again at or after [`next_deadline`].
///
/// [`next_deadline`]: DebouncedInput::next_deadline
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use storage_form_core::{DebounceConfig, DebouncedInput};
///
/// let mut input = DebouncedInput::new(DebounceConfig::from_millis(500));
/// let start = Instant::now();
///
/// input.push("host", "goo", start);
/// input.push("host", "google.com", start + Duration::from_millis(80));
///
/// assert!(input.poll(start + Duration::from_millis(500)).is_empty());
/// assert_eq!(
///     input.poll(start + Duration::from_millis(580)),
///     vec![("host", "google.com".to_string())]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DebouncedInput<K> {
    config: DebounceConfig,
    pending: BTreeMap<K, Pending>,
}

impl<K: Ord + Copy + Debug> DebouncedInput<K> {
    /// Create an adapter with nothing pending.
    pub fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            pending: BTreeMap::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> DebounceConfig {
        self.config
    }

    /// Schedule a value for propagation, superseding any pending value for
    /// the same key. Returns the new deadline.
    pub fn push(&mut self, key: K, value: impl Into<String>, now: Instant) -> Instant {
        let deadline = now + self.config.quiet_period();
        let replaced = self.pending.insert(
            key,
            Pending {
                value: value.into(),
                deadline,
            },
        );
        if replaced.is_some() {
            tracing::trace!(key = ?key, "Superseded pending input");
        }
        deadline
    }

    /// Release every value whose quiet period has passed, in key order.
    pub fn poll(&mut self, now: Instant) -> Vec<(K, String)> {
        let due: Vec<K> = self
            .pending
            .iter()
            .filter(|(_, pending)| pending.deadline <= now)
            .map(|(key, _)| *key)
            .collect();

        due.into_iter()
            .filter_map(|key| self.pending.remove(&key).map(|p| (key, p.value)))
            .collect()
    }

    /// Earliest deadline among pending values.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    /// Check if a value is waiting for a key.
    pub fn is_pending(&self, key: K) -> bool {
        self.pending.contains_key(&key)
    }

    /// The value waiting for a key, if any.
    pub fn pending_value(&self, key: K) -> Option<&str> {
        self.pending.get(&key).map(|p| p.value.as_str())
    }

    /// Check if nothing is waiting.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending value without releasing it.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }
}
