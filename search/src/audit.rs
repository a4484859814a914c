//! Search audit trail: aggregate counters and per-expansion events.
//!
//! This is the engine's only observability surface. Everything serializes to
//! `serde_json::Value` with sorted keys, so two identical runs produce
//! byte-identical JSON.

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// First-completion mode dequeued a goal state.
    GoalReached,
    /// The frontier emptied. In all-completions mode this is the normal end.
    FrontierExhausted,
}

/// Aggregate counters for one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// States dequeued and not skipped as stale (goal states included).
    pub expansions: u64,
    /// Total successors returned by the world.
    pub candidates_generated: u64,
    /// `admit_if_better` calls that returned `true` (start states included).
    pub admitted: u64,
    /// `admit_if_better` calls that returned `false`.
    pub dominated: u64,
    /// Dequeued states discarded because a cheaper twin was admitted later.
    pub stale_skipped: u64,
    /// Goal states recorded.
    pub completed: u64,
    pub frontier_high_water: u64,
    /// Distinct fingerprints in the ledger at the end of the search.
    pub distinct_fingerprints: u64,
    pub termination: Termination,
}

impl SearchStats {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "admitted": self.admitted,
            "candidates_generated": self.candidates_generated,
            "completed": self.completed,
            "distinct_fingerprints": self.distinct_fingerprints,
            "dominated": self.dominated,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "stale_skipped": self.stale_skipped,
            "termination": termination_str(self.termination),
        })
    }
}

/// One dequeue of a non-stale state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionEvent {
    /// Total order of dequeues, starting at 0.
    pub expansion_order: u64,
    /// Cost of the dequeued state.
    pub cost: u64,
    /// Whether the state satisfied the goal predicate (and was not expanded).
    pub goal: bool,
    /// Successors returned by the world (0 for goal states).
    pub successors: u64,
    pub admitted: u64,
    pub dominated: u64,
}

impl ExpansionEvent {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "admitted": self.admitted,
            "cost": self.cost,
            "dominated": self.dominated,
            "expansion_order": self.expansion_order,
            "goal": self.goal,
            "successors": self.successors,
        })
    }
}

fn termination_str(t: Termination) -> &'static str {
    match t {
        Termination::GoalReached => "goal_reached",
        Termination::FrontierExhausted => "frontier_exhausted",
    }
}
