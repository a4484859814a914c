//! Visited ledger: best admitted cost per fingerprint.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Records, per fingerprint, the lowest cost at which a state was admitted
/// to the frontier.
///
/// [`VisitedLedger::admit_if_better`] is the only gate onto the frontier, so
/// each fingerprint has at most one live frontier entry per cost improvement.
/// Recorded costs only ever decrease; entries are never removed.
///
/// A fingerprint can also be closed with [`VisitedLedger::close`]. Closed
/// fingerprints reject every later candidate, however cheap. Orders that do
/// not pop by cost use this so a state is expanded at most once.
#[derive(Debug, Clone)]
pub struct VisitedLedger<K> {
    best: HashMap<K, u64>,
    closed: HashSet<K>,
    admitted: u64,
    dominated: u64,
}

impl<K: Hash + Eq> VisitedLedger<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            best: HashMap::new(),
            closed: HashSet::new(),
            admitted: 0,
            dominated: 0,
        }
    }

    /// Record `cost` for `key` if it strictly improves on what is recorded.
    ///
    /// Returns `true` when the caller should enqueue the candidate, `false`
    /// when an equal-or-cheaper state with the same fingerprint was already
    /// admitted, or when `key` is closed.
    pub fn admit_if_better(&mut self, key: K, cost: u64) -> bool {
        let better = !self.closed.contains(&key)
            && match self.best.get(&key) {
                None => true,
                Some(&recorded) => cost < recorded,
            };
        if better {
            self.best.insert(key, cost);
            self.admitted += 1;
        } else {
            self.dominated += 1;
        }
        better
    }

    /// Refuse all further admissions for `key`.
    pub fn close(&mut self, key: K) {
        self.closed.insert(key);
    }

    #[must_use]
    pub fn is_closed(&self, key: &K) -> bool {
        self.closed.contains(key)
    }

    /// Lowest admitted cost for `key`, if any.
    #[must_use]
    pub fn best_cost(&self, key: &K) -> Option<u64> {
        self.best.get(key).copied()
    }

    /// Whether a state admitted at `cost` has since been beaten.
    #[must_use]
    pub fn is_stale(&self, key: &K, cost: u64) -> bool {
        self.best_cost(key).is_some_and(|best| best < cost)
    }

    /// Number of distinct fingerprints recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Total `admit_if_better` calls that returned `true`.
    #[must_use]
    pub fn admitted(&self) -> u64 {
        self.admitted
    }

    /// Total `admit_if_better` calls that returned `false`.
    #[must_use]
    pub fn dominated(&self) -> u64 {
        self.dominated
    }
}

impl<K: Hash + Eq> Default for VisitedLedger<K> {
    fn default() -> Self {
        Self::new()
    }
}
