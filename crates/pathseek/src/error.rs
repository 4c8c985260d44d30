use std::fmt;

use crate::engine::SearchOutcome;

/// Errors reported by [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No start and goal have been set.
    NotInitialized,
    /// `get_path` was called before the search terminated.
    NotSearched,
    /// The search terminated without reaching the goal.
    NoPath(SearchOutcome),
    /// The backward walk from the goal hit its ceiling or a missing parent
    /// link before reaching the start.
    BrokenParentChain {
        /// Positions collected before the walk stopped.
        walked: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "start and goal have not been set"),
            Self::NotSearched => write!(f, "search has not finished"),
            Self::NoPath(outcome) => write!(f, "no path to goal: {outcome}"),
            Self::BrokenParentChain { walked } => {
                write!(f, "parent chain does not reach the start after {walked} positions")
            }
        }
    }
}

impl std::error::Error for SearchError {}
