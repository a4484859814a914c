//! Advent Search: generic best-first search with fingerprint dedup.
//!
//! Depends only on `advent_kernel`; it does NOT depend on `advent_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! advent_kernel  ←  advent_search  ←  advent_harness
//! (hash, grid)      (engine)          (worlds, runner, batch)
//! ```
//!
//! # Key types
//!
//! - [`contract::SearchState`] -- cost + fingerprint contract for states
//! - [`contract::SearchWorld`] -- goal predicate + successor function
//! - [`frontier::CostQueue`] -- binary-heap min-priority queue
//! - [`ledger::VisitedLedger`] -- best admitted cost per fingerprint
//! - [`policy::SearchPolicy`] -- completion mode, frontier order, budget
//! - [`search::search`] -- the expansion loop

#![forbid(unsafe_code)]

pub mod audit;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod ledger;
pub mod policy;
pub mod search;
