//! Frontier containers: the cost-ordered priority queue and the FIFO/LIFO
//! orders used for breadth-first and depth-first traversal.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::contract::SearchState;

/// The container the engine pops states from.
///
/// `pop` on an empty frontier returns `None`; it never panics.
pub trait Frontier<S> {
    fn push(&mut self, item: S);
    fn pop(&mut self) -> Option<S>;
    fn len(&self) -> usize;
    /// Largest size the frontier has reached.
    fn high_water(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The ordering key for [`CostQueue`]: `(cost, insertion_order)`.
///
/// Lower cost first; ties go to the older entry so pops are reproducible.
/// Callers must still treat equal-cost order as unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CostKey {
    pub cost: u64,
    pub insertion_order: u64,
}

/// `BinaryHeap` is a max-heap, so entries carry `Reverse<CostKey>`.
struct Entry<S> {
    key: Reverse<CostKey>,
    item: S,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for Entry<S> {}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Binary-heap min-priority queue ordered by [`SearchState::cost`].
///
/// `push` and `pop` are O(log n); `is_empty` is O(1).
pub struct CostQueue<S> {
    heap: BinaryHeap<Entry<S>>,
    next_order: u64,
    high_water: usize,
}

impl<S: SearchState> CostQueue<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_order: 0,
            high_water: 0,
        }
    }

    /// Cost of the item `pop` would return next.
    #[must_use]
    pub fn peek_cost(&self) -> Option<u64> {
        self.heap.peek().map(|e| e.key.0.cost)
    }
}

impl<S: SearchState> Default for CostQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState> Frontier<S> for CostQueue<S> {
    fn push(&mut self, item: S) {
        let key = CostKey {
            cost: item.cost(),
            insertion_order: self.next_order,
        };
        self.next_order += 1;
        self.heap.push(Entry {
            key: Reverse(key),
            item,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn pop(&mut self) -> Option<S> {
        self.heap.pop().map(|e| e.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// First-in first-out frontier (breadth-first order).
pub struct FifoQueue<S> {
    items: VecDeque<S>,
    high_water: usize,
}

impl<S> FifoQueue<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            high_water: 0,
        }
    }
}

impl<S> Default for FifoQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for FifoQueue<S> {
    fn push(&mut self, item: S) {
        self.items.push_back(item);
        self.high_water = self.high_water.max(self.items.len());
    }

    fn pop(&mut self) -> Option<S> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Last-in first-out frontier (depth-first order).
pub struct LifoQueue<S> {
    items: Vec<S>,
    high_water: usize,
}

impl<S> LifoQueue<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            high_water: 0,
        }
    }
}

impl<S> Default for LifoQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for LifoQueue<S> {
    fn push(&mut self, item: S) {
        self.items.push(item);
        self.high_water = self.high_water.max(self.items.len());
    }

    fn pop(&mut self) -> Option<S> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}
