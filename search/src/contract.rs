//! Search state and world contract traits.

use std::hash::Hash;
use std::marker::PhantomData;

use advent_kernel::hash::{canonical_hash, ContentHash, HashDomain};

/// One node of an implicit state graph.
///
/// # Contract
///
/// - `cost()` is the accumulated cost from the start state. It must never
///   decrease along a successor edge. This is NOT checked at runtime; a world
///   that violates it gets undefined (but memory-safe) search results.
/// - `fingerprint()` identifies the logical situation independent of the path
///   taken to reach it. Two states with equal fingerprints are the same node
///   for dedup purposes, whatever else they carry.
pub trait SearchState {
    /// Dedup key. Natural keys (a `Point`, a node id) are preferred; states
    /// without one can use a `ContentHash` over their canonical bytes.
    type Fingerprint: Hash + Eq + Clone;

    /// Accumulated cost so far.
    fn cost(&self) -> u64;

    /// Path-independent identity of this state.
    fn fingerprint(&self) -> Self::Fingerprint;
}

/// Fingerprint for states without a natural key: a content hash of their
/// canonical bytes under [`HashDomain::StateFingerprint`].
#[must_use]
pub fn hashed_fingerprint(canonical_bytes: &[u8]) -> ContentHash {
    canonical_hash(HashDomain::StateFingerprint, canonical_bytes)
}

/// A state space the engine can search.
///
/// Both methods must be pure: same state in, same answer out.
pub trait SearchWorld {
    type State: SearchState;

    /// Goal predicate. Total over every reachable state.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Successor states of `state`. Must be finite and must not produce a
    /// state cheaper than `state`.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;
}

/// A [`SearchWorld`] assembled from a goal closure and a successor closure.
///
/// ```
/// use advent_search::contract::{FnWorld, SearchState};
///
/// #[derive(Clone)]
/// struct Count(u64);
///
/// impl SearchState for Count {
///     type Fingerprint = u64;
///     fn cost(&self) -> u64 { self.0 }
///     fn fingerprint(&self) -> u64 { self.0 }
/// }
///
/// let world = FnWorld::new(|s: &Count| s.0 == 3, |s: &Count| vec![Count(s.0 + 1)]);
/// let found = advent_search::search::shortest(&world, Count(0)).unwrap();
/// assert_eq!(found.cost(), 3);
/// ```
pub struct FnWorld<S, G, N> {
    is_goal: G,
    successors: N,
    _state: PhantomData<fn(&S)>,
}

impl<S, G, N> FnWorld<S, G, N>
where
    S: SearchState,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<S>,
{
    #[must_use]
    pub fn new(is_goal: G, successors: N) -> Self {
        Self {
            is_goal,
            successors,
            _state: PhantomData,
        }
    }
}

impl<S, G, N> SearchWorld for FnWorld<S, G, N>
where
    S: SearchState,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<S>,
{
    type State = S;

    fn is_goal(&self, state: &S) -> bool {
        (self.is_goal)(state)
    }

    fn successors(&self, state: &S) -> Vec<S> {
        (self.successors)(state)
    }
}
