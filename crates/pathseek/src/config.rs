//! Search configuration.

/// How the frontier picks the next position to expand.
///
/// Both strategies select by ascending `f = g + h`, then ascending `g`,
/// then discovery order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierMode {
    /// Stable full re-sort of the open list on every iteration. Closed
    /// entries stay in the list and sort last.
    #[default]
    Sorted,
    /// Binary heap keyed by `(f, g, discovery order)`; stale entries are
    /// skipped when popped.
    Heap,
}

/// Configuration for a [`SearchEngine`](crate::SearchEngine).
///
/// # Examples
///
/// ```
/// use pathseek::{FrontierMode, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_frontier(FrontierMode::Heap)
///     .with_relax_costs(true)
///     .with_max_expansions(10_000);
/// assert!(config.use_heuristic);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Frontier selection strategy.
    pub frontier: FrontierMode,
    /// Lower the cost of an open position when a cheaper route to it is
    /// found. Off by default: the first discovery of a position fixes its
    /// cost and parent, which is not optimal under non-uniform costs.
    /// Closed positions are never reopened either way.
    pub relax_costs: bool,
    /// Order the frontier by `g + h`. When `false`, `h` is treated as 0.
    pub use_heuristic: bool,
    /// Stop after this many expansions. `None` runs until the frontier
    /// is exhausted.
    pub max_expansions: Option<usize>,
    /// Ceiling on the backward walk during path reconstruction. `None`
    /// uses the number of parent links plus one.
    pub max_path_len: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            frontier: FrontierMode::Sorted,
            relax_costs: false,
            use_heuristic: true,
            max_expansions: None,
            max_path_len: None,
        }
    }
}

impl SearchConfig {
    /// Set the frontier selection strategy.
    pub fn with_frontier(mut self, frontier: FrontierMode) -> Self {
        self.frontier = frontier;
        self
    }

    /// Enable or disable cost relaxation of open positions.
    pub fn with_relax_costs(mut self, relax: bool) -> Self {
        self.relax_costs = relax;
        self
    }

    /// Enable or disable the heuristic term of `f`.
    pub fn with_heuristic(mut self, use_heuristic: bool) -> Self {
        self.use_heuristic = use_heuristic;
        self
    }

    /// Stop searching after `limit` expansions.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Cap path reconstruction at `limit` positions.
    pub fn with_max_path_len(mut self, limit: usize) -> Self {
        self.max_path_len = Some(limit);
        self
    }
}
