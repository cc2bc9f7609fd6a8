use thiserror::Error;

/// Why a search ended without a trajectory.
///
/// None of these are crashes: the caller is expected to fall back to its
/// default control strategy when no trajectory is available.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no feasible trajectory: frontier exhausted after {expanded} node expansions")]
    Exhausted { expanded: usize },

    #[error("no feasible trajectory: frontier grew to {frontier} nodes, over the {max_frontier} budget")]
    FrontierOverflow { frontier: usize, max_frontier: usize },

    #[error("no feasible trajectory: time budget of {budget_ms} ms spent after {expanded} node expansions")]
    TimeBudgetExceeded { budget_ms: u64, expanded: usize },
}

impl SearchError {
    /// `true` when the search was cut off by its work budget rather than
    /// proving the frontier empty.
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(
            self,
            SearchError::FrontierOverflow { .. } | SearchError::TimeBudgetExceeded { .. }
        )
    }
}

pub type SearchResult<T> = Result<T, SearchError>;
