//! Search policy types.

use crate::error::SearchError;

/// When the engine stops after dequeuing a goal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionMode {
    /// Stop at the first goal state dequeued (classic shortest path).
    #[default]
    First,
    /// Record every goal state dequeued and keep going until the frontier
    /// empties. Completions come out in non-decreasing cost order under
    /// [`FrontierOrder::LowestCost`].
    All,
}

/// Which frontier container the engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierOrder {
    /// Uniform-cost (Dijkstra) order. The only order with a minimality
    /// guarantee for the first completion.
    #[default]
    LowestCost,
    /// Breadth-first order. Minimal for unit-cost edges.
    Fifo,
    /// Depth-first order. No minimality guarantee.
    Lifo,
}

/// Per-call search configuration.
///
/// Passed explicitly into every search; there is no process-wide setting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    pub mode: CompletionMode,
    pub order: FrontierOrder,
    /// Hard cap on expansions (`None` = unlimited).
    pub max_expansions: Option<u64>,
    /// Record one [`crate::audit::ExpansionEvent`] per dequeued state.
    pub record_events: bool,
}

impl SearchPolicy {
    /// First-completion, lowest-cost policy.
    #[must_use]
    pub fn first() -> Self {
        Self::default()
    }

    /// All-completions, lowest-cost policy.
    #[must_use]
    pub fn all() -> Self {
        Self {
            mode: CompletionMode::All,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: FrontierOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    #[must_use]
    pub fn with_events(mut self) -> Self {
        self.record_events = true;
        self
    }

    /// Pre-flight validation.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget,
    /// which could never dequeue even the start state.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// JSON echo of the policy for reports.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "max_expansions": self.max_expansions,
            "mode": match self.mode {
                CompletionMode::First => "first",
                CompletionMode::All => "all",
            },
            "order": match self.order {
                FrontierOrder::LowestCost => "lowest_cost",
                FrontierOrder::Fifo => "fifo",
                FrontierOrder::Lifo => "lifo",
            },
            "record_events": self.record_events,
        })
    }
}
