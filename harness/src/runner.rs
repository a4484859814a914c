//! Harness runner: runs one search and packages the outcome as a report.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → search() → build report JSON
//!   → serde_json::to_vec() → canonical_hash(SearchReport)
//! ```
//!
//! The report carries everything that determines the outcome (world id,
//! policy, completed costs, stats, events) and nothing that varies between
//! runs, so identical inputs always produce identical digests.

use std::fmt;

use advent_kernel::hash::{canonical_hash, ContentHash, HashDomain};
use advent_search::audit::SearchStats;
use advent_search::contract::{SearchState, SearchWorld};
use advent_search::error::SearchError;
use advent_search::policy::SearchPolicy;
use advent_search::search::{search, SearchResult};

/// Report schema identifier embedded in every report.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The search itself failed.
    Search(SearchError),
    /// Report serialization failed.
    SerializeFailed { detail: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::SerializeFailed { detail } => write!(f, "report serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::SerializeFailed { .. } => None,
        }
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Serialized outcome of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub world_id: String,
    /// Costs of the completed goal states, in dequeue order.
    pub completed_costs: Vec<u64>,
    pub stats: SearchStats,
    /// JSON bytes of the full report (sorted keys, compact).
    pub report_bytes: Vec<u8>,
    /// `canonical_hash(HashDomain::SearchReport, report_bytes)`.
    pub digest: ContentHash,
}

/// Run `world` from `start` under `policy` and build its report.
///
/// # Errors
///
/// [`RunError::Search`] for any engine failure (invalid policy, unreachable
/// goal in first-completion mode, exhausted budget).
pub fn run_search<W>(
    world_id: &str,
    world: &W,
    start: W::State,
    policy: &SearchPolicy,
) -> Result<(SearchResult<W::State>, SearchReport), RunError>
where
    W: SearchWorld + ?Sized,
{
    let result = search(world, start, policy)?;
    let report = build_report(world_id, policy, &result)?;
    Ok((result, report))
}

/// Build the report for an already-finished search.
///
/// # Errors
///
/// [`RunError::SerializeFailed`] if the report JSON cannot be encoded.
pub fn build_report<S: SearchState>(
    world_id: &str,
    policy: &SearchPolicy,
    result: &SearchResult<S>,
) -> Result<SearchReport, RunError> {
    let completed_costs: Vec<u64> = result.completed.iter().map(SearchState::cost).collect();
    let events: Vec<serde_json::Value> = result.events.iter().map(|e| e.to_json()).collect();

    let report = serde_json::json!({
        "completed_costs": completed_costs,
        "events": events,
        "policy": policy.to_json(),
        "schema_version": REPORT_SCHEMA_VERSION,
        "stats": result.stats.to_json(),
        "world_id": world_id,
    });
    let report_bytes = serde_json::to_vec(&report).map_err(|e| RunError::SerializeFailed {
        detail: e.to_string(),
    })?;
    let digest = canonical_hash(HashDomain::SearchReport, &report_bytes);

    Ok(SearchReport {
        world_id: world_id.to_string(),
        completed_costs,
        stats: result.stats.clone(),
        report_bytes,
        digest,
    })
}
