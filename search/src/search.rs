//! Search entry points and the expansion loop.
//!
//! One loop serves every configuration:
//!
//! 1. Admit the start state(s) through the ledger and push them.
//! 2. Pop. Skip the state if the ledger has since recorded a strictly cheaper
//!    cost for its fingerprint (stale entry).
//!    Under FIFO or LIFO order the fingerprint is then closed: later
//!    candidates with it are dominated whatever their cost, so each
//!    fingerprint is expanded (or completed) at most once.
//! 3. Goal states are recorded and never expanded. `CompletionMode::First`
//!    stops here; `CompletionMode::All` keeps popping.
//! 4. Otherwise expand: every successor goes through
//!    [`VisitedLedger::admit_if_better`] and only admitted ones are pushed.
//!
//! With [`FrontierOrder::LowestCost`] and non-decreasing edge costs, the first
//! goal state dequeued is minimal among all goal states reachable from the
//! starts (the usual Dijkstra argument, with fingerprints standing in for
//! vertices).

use crate::audit::{ExpansionEvent, SearchStats, Termination};
use crate::contract::{SearchState, SearchWorld};
use crate::error::SearchError;
use crate::frontier::{CostQueue, FifoQueue, Frontier, LifoQueue};
use crate::ledger::VisitedLedger;
use crate::policy::{CompletionMode, FrontierOrder, SearchPolicy};

/// Result of a successful search call.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    /// Goal states in dequeue order, at most one per fingerprint. Exactly one
    /// in first-completion mode; zero or more in all-completions mode, in
    /// non-decreasing cost order under [`FrontierOrder::LowestCost`].
    pub completed: Vec<S>,
    pub stats: SearchStats,
    /// Per-dequeue audit log. Empty unless `SearchPolicy::record_events`.
    pub events: Vec<ExpansionEvent>,
}

impl<S> SearchResult<S> {
    /// Returns `true` if at least one goal state was dequeued.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        !self.completed.is_empty()
    }

    /// The first (cheapest, under lowest-cost order) completion.
    #[must_use]
    pub fn first(&self) -> Option<&S> {
        self.completed.first()
    }

    #[must_use]
    pub fn into_first(self) -> Option<S> {
        self.completed.into_iter().next()
    }
}

/// Run a search from a single start state.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if `policy` fails validation.
/// - [`SearchError::Unreachable`] in first-completion mode when the frontier
///   empties without a goal.
/// - [`SearchError::ExpansionBudgetExceeded`] when `max_expansions` is hit.
pub fn search<W>(
    world: &W,
    start: W::State,
    policy: &SearchPolicy,
) -> Result<SearchResult<W::State>, SearchError>
where
    W: SearchWorld + ?Sized,
{
    search_from(world, std::iter::once(start), policy)
}

/// Run a search seeded with several start states.
///
/// Starts go through the ledger like any successor, so duplicate starts are
/// collapsed to the cheapest. An empty start set behaves like an unreachable
/// goal.
///
/// # Errors
///
/// See [`search`].
pub fn search_from<W, I>(
    world: &W,
    starts: I,
    policy: &SearchPolicy,
) -> Result<SearchResult<W::State>, SearchError>
where
    W: SearchWorld + ?Sized,
    I: IntoIterator<Item = W::State>,
{
    policy.validate()?;
    match policy.order {
        FrontierOrder::LowestCost => run(world, starts, policy, CostQueue::new()),
        FrontierOrder::Fifo => run(world, starts, policy, FifoQueue::new()),
        FrontierOrder::Lifo => run(world, starts, policy, LifoQueue::new()),
    }
}

/// Minimum-cost goal state reachable from `start`.
///
/// # Errors
///
/// [`SearchError::Unreachable`] if no goal state is reachable.
pub fn shortest<W>(world: &W, start: W::State) -> Result<W::State, SearchError>
where
    W: SearchWorld + ?Sized,
{
    let result = search(world, start, &SearchPolicy::first())?;
    let expansions = result.stats.expansions;
    result
        .into_first()
        .ok_or(SearchError::Unreachable { expansions })
}

/// Every goal state dequeued, in non-decreasing cost order.
///
/// Returns an empty list when no goal is reachable.
///
/// # Errors
///
/// Only policy or budget failures; see [`search`].
pub fn all_completions<W>(world: &W, start: W::State) -> Result<Vec<W::State>, SearchError>
where
    W: SearchWorld + ?Sized,
{
    search(world, start, &SearchPolicy::all()).map(|result| result.completed)
}

fn run<W, I, F>(
    world: &W,
    starts: I,
    policy: &SearchPolicy,
    mut frontier: F,
) -> Result<SearchResult<W::State>, SearchError>
where
    W: SearchWorld + ?Sized,
    I: IntoIterator<Item = W::State>,
    F: Frontier<W::State>,
{
    let mut ledger = VisitedLedger::new();
    for start in starts {
        if ledger.admit_if_better(start.fingerprint(), start.cost()) {
            frontier.push(start);
        }
    }

    let mut completed = Vec::new();
    let mut events = Vec::new();
    let mut expansions: u64 = 0;
    let mut candidates_generated: u64 = 0;
    let mut stale_skipped: u64 = 0;

    let termination = loop {
        let Some(state) = frontier.pop() else {
            break Termination::FrontierExhausted;
        };

        let cost = state.cost();
        let fingerprint = state.fingerprint();
        if ledger.is_stale(&fingerprint, cost) {
            stale_skipped += 1;
            continue;
        }
        if policy.order != FrontierOrder::LowestCost {
            ledger.close(fingerprint);
        }

        if let Some(limit) = policy.max_expansions {
            if expansions >= limit {
                return Err(SearchError::ExpansionBudgetExceeded { limit });
            }
        }
        let expansion_order = expansions;
        expansions += 1;

        if world.is_goal(&state) {
            if policy.record_events {
                events.push(ExpansionEvent {
                    expansion_order,
                    cost,
                    goal: true,
                    successors: 0,
                    admitted: 0,
                    dominated: 0,
                });
            }
            completed.push(state);
            if policy.mode == CompletionMode::First {
                break Termination::GoalReached;
            }
            continue;
        }

        let successors = world.successors(&state);
        let mut admitted: u64 = 0;
        let mut dominated: u64 = 0;
        for next in successors {
            candidates_generated += 1;
            if ledger.admit_if_better(next.fingerprint(), next.cost()) {
                frontier.push(next);
                admitted += 1;
            } else {
                dominated += 1;
            }
        }

        if policy.record_events {
            events.push(ExpansionEvent {
                expansion_order,
                cost,
                goal: false,
                successors: admitted + dominated,
                admitted,
                dominated,
            });
        }
    };

    if policy.mode == CompletionMode::First && completed.is_empty() {
        return Err(SearchError::Unreachable { expansions });
    }

    let stats = SearchStats {
        expansions,
        candidates_generated,
        admitted: ledger.admitted(),
        dominated: ledger.dominated(),
        stale_skipped,
        completed: completed.len() as u64,
        frontier_high_water: frontier.high_water() as u64,
        distinct_fingerprints: ledger.len() as u64,
        termination,
    };

    Ok(SearchResult {
        completed,
        stats,
        events,
    })
}
