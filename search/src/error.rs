//! Typed search errors.
//!
//! `SearchError` is returned instead of a result, never alongside one. An
//! unreachable goal in first-completion mode is always an error: the engine
//! does not hand back a sentinel cost.

/// Typed failure for search execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier emptied without any goal state being dequeued.
    ///
    /// Also returned when the search is started from an empty set of states.
    Unreachable { expansions: u64 },
    /// `SearchPolicy::max_expansions` was hit before the search finished.
    ExpansionBudgetExceeded { limit: u64 },
    /// The policy failed pre-flight validation. No search steps were taken.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable { expansions } => {
                write!(f, "goal unreachable: frontier exhausted after {expansions} expansions")
            }
            Self::ExpansionBudgetExceeded { limit } => {
                write!(f, "expansion budget of {limit} exceeded")
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
