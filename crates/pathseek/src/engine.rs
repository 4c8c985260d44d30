use std::fmt;

use log::{debug, trace, warn};

use crate::adjacency::{Adjacency, NoAdjacency};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::frontier::{Frontier, Scoring, Selection};
use crate::position::Position;
use crate::state::{SearchState, SearchStatus};

/// How a search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The goal reached the head of the frontier.
    Found,
    /// The frontier ran empty.
    FrontierExhausted,
    /// Every remaining frontier entry was already closed.
    FrontierClosed,
    /// [`SearchConfig::max_expansions`] was reached first.
    ExpansionLimit,
}

impl SearchOutcome {
    /// Whether the goal was reached.
    #[inline]
    pub fn is_found(self) -> bool {
        self == Self::Found
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Found => "goal found",
            Self::FrontierExhausted => "frontier exhausted",
            Self::FrontierClosed => "all frontier entries closed",
            Self::ExpansionLimit => "expansion limit reached",
        };
        f.write_str(s)
    }
}

/// One iteration of the search loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    /// The position was closed and its neighbors opened.
    Expanded(T),
    /// The search has terminated.
    Done(SearchOutcome),
}

/// Result of walking parent links back from the goal.
enum Walk {
    NoEndpoints,
    Complete,
    Ceiling,
    MissingParent,
}

/// A\* search over positions `T` connected by the adjacency `A`.
///
/// ```text
/// set_start_and_goal -> find_path -> get_path
/// ```
///
/// All state lives in the engine. [`set_start_and_goal`](Self::set_start_and_goal)
/// starts a fresh search and [`reset`](Self::reset) drops everything.
pub struct SearchEngine<T, A = NoAdjacency> {
    adjacency: A,
    config: SearchConfig,
    state: SearchState<T>,
    frontier: Frontier<T>,
    start: Option<T>,
    goal: Option<T>,
    started: bool,
    outcome: Option<SearchOutcome>,
    expanded: usize,
    // scratch buffer for neighbor queries
    nbuf: Vec<T>,
}

impl<T: Position, A: Adjacency<T>> SearchEngine<T, A> {
    /// Create an engine with the default configuration.
    pub fn new(adjacency: A) -> Self {
        Self::with_config(adjacency, SearchConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(adjacency: A, config: SearchConfig) -> Self {
        let frontier = Frontier::new(config.frontier);
        Self {
            adjacency,
            config,
            state: SearchState::new(),
            frontier,
            start: None,
            goal: None,
            started: false,
            outcome: None,
            expanded: 0,
            nbuf: Vec::new(),
        }
    }

    /// Record the endpoints and run the adjacency's setup hook.
    ///
    /// Any previous search state is discarded first.
    pub fn set_start_and_goal(&mut self, start: T, goal: T) {
        self.clear_search();
        debug!("search endpoints set: {start:?} -> {goal:?}");
        self.start = Some(start);
        self.goal = Some(goal);
        self.adjacency.on_post_setup(&mut self.state);
    }

    /// Forget the endpoints and all search state.
    pub fn reset(&mut self) {
        self.clear_search();
        self.start = None;
        self.goal = None;
    }

    fn clear_search(&mut self) {
        self.state.clear();
        self.frontier.clear();
        self.started = false;
        self.outcome = None;
        self.expanded = 0;
    }

    /// Run the search to termination.
    ///
    /// Once terminated, further calls return the recorded outcome.
    pub fn find_path(&mut self) -> Result<SearchOutcome, SearchError> {
        loop {
            if let Step::Done(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Run a single iteration: select the best frontier entry, then either
    /// terminate or expand it.
    pub fn step(&mut self) -> Result<Step<T>, SearchError> {
        let (Some(start), Some(goal)) = (self.start.clone(), self.goal.clone()) else {
            return Err(SearchError::NotInitialized);
        };
        if let Some(outcome) = self.outcome {
            return Ok(Step::Done(outcome));
        }

        if !self.started {
            self.started = true;
            // A start blocked during setup stays closed.
            if self.state.status(&start) == SearchStatus::Unvisited {
                let h = self.scoring(&goal).h(&start);
                self.state.open(start.clone(), 0.0, start.clone());
                self.frontier.push(start, 0.0, h);
            }
        }

        if self
            .config
            .max_expansions
            .is_some_and(|limit| self.expanded >= limit)
        {
            return Ok(self.finish(SearchOutcome::ExpansionLimit));
        }

        let scoring = Scoring {
            state: &self.state,
            goal: &goal,
            use_heuristic: self.config.use_heuristic,
        };
        let head = match self.frontier.select(&scoring) {
            Selection::Empty => return Ok(self.finish(SearchOutcome::FrontierExhausted)),
            Selection::Closed => return Ok(self.finish(SearchOutcome::FrontierClosed)),
            Selection::Open(head) => head,
        };

        if head == goal {
            return Ok(self.finish(SearchOutcome::Found));
        }

        self.expand(&head, &goal);
        Ok(Step::Expanded(head))
    }

    fn scoring<'a>(&'a self, goal: &'a T) -> Scoring<'a, T> {
        Scoring {
            state: &self.state,
            goal,
            use_heuristic: self.config.use_heuristic,
        }
    }

    fn finish(&mut self, outcome: SearchOutcome) -> Step<T> {
        debug!(
            "search finished: {outcome} after {} expansions ({} positions discovered)",
            self.expanded,
            self.state.len()
        );
        self.outcome = Some(outcome);
        Step::Done(outcome)
    }

    /// Close `current`, open its undiscovered neighbors and, when relaxing,
    /// re-point open neighbors reached more cheaply.
    fn expand(&mut self, current: &T, goal: &T) {
        self.state.mark_closed(current);
        self.expanded += 1;
        let base = self.state.cost(current).unwrap_or(0.0);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.adjacency.neighbors(current, &self.state, &mut nbuf);
        trace!(
            "expand {current:?} (g = {base}): {} candidates, frontier {}",
            nbuf.len(),
            self.frontier.len()
        );

        for next in nbuf.drain(..) {
            let g = base + self.adjacency.cost(current, &next);
            let h = self.scoring(goal).h(&next);
            match self.state.status(&next) {
                SearchStatus::Unvisited => {
                    self.state.open(next.clone(), g, current.clone());
                    self.frontier.push(next, g, g + h);
                }
                SearchStatus::Open
                    if self.config.relax_costs
                        && self.state.cost(&next).is_some_and(|old| g < old) =>
                {
                    self.state.relax(&next, g, current.clone());
                    self.frontier.reprioritize(next, g, g + h);
                }
                SearchStatus::Open | SearchStatus::Closed => {}
            }
        }

        self.nbuf = nbuf;
    }

    /// Reconstruct the path in goal-to-start order.
    ///
    /// Fails unless the last search found the goal and the parent chain
    /// leads back to the start within the configured ceiling.
    pub fn get_path(&self) -> Result<Vec<T>, SearchError> {
        if self.start.is_none() || self.goal.is_none() {
            return Err(SearchError::NotInitialized);
        }
        match self.outcome {
            None => return Err(SearchError::NotSearched),
            Some(outcome) if !outcome.is_found() => return Err(SearchError::NoPath(outcome)),
            Some(_) => {}
        }
        let (path, walk) = self.walk_back();
        match walk {
            Walk::NoEndpoints => Err(SearchError::NotInitialized),
            Walk::Complete => Ok(path),
            Walk::Ceiling | Walk::MissingParent => Err(SearchError::BrokenParentChain {
                walked: path.len(),
            }),
        }
    }

    /// Best-effort reconstruction in goal-to-start order.
    ///
    /// Walks parent links from the goal and returns whatever was collected
    /// when the start, a missing link, or the ceiling is reached. The
    /// result only ends at the start after a successful search.
    pub fn get_path_lossy(&self) -> Vec<T> {
        self.walk_back().0
    }

    /// The path in start-to-goal order.
    pub fn forward_path(&self) -> Result<Vec<T>, SearchError> {
        let mut path = self.get_path()?;
        path.reverse();
        Ok(path)
    }

    /// Accumulated cost of the goal after a successful search.
    pub fn path_cost(&self) -> Option<f32> {
        if !self.outcome.is_some_and(SearchOutcome::is_found) {
            return None;
        }
        self.goal.as_ref().and_then(|g| self.state.cost(g))
    }

    fn walk_back(&self) -> (Vec<T>, Walk) {
        let mut path = Vec::new();
        let (Some(start), Some(goal)) = (self.start.as_ref(), self.goal.as_ref()) else {
            return (path, Walk::NoEndpoints);
        };
        let ceiling = self
            .config
            .max_path_len
            .unwrap_or(self.state.parent_links() + 1);

        let mut p = goal;
        loop {
            if path.len() >= ceiling {
                warn!("path reconstruction stopped at ceiling {ceiling} before reaching {start:?}");
                return (path, Walk::Ceiling);
            }
            path.push(p.clone());
            if p == start {
                return (path, Walk::Complete);
            }
            match self.state.parent(p) {
                Some(parent) => p = parent,
                None => {
                    warn!("path reconstruction found no parent for {p:?}");
                    return (path, Walk::MissingParent);
                }
            }
        }
    }

    /// Start of the current search.
    #[inline]
    pub fn start(&self) -> Option<&T> {
        self.start.as_ref()
    }

    /// Goal of the current search.
    #[inline]
    pub fn goal(&self) -> Option<&T> {
        self.goal.as_ref()
    }

    /// Status, cost and parent maps of the current search.
    #[inline]
    pub fn state(&self) -> &SearchState<T> {
        &self.state
    }

    /// How the last search terminated, if it has.
    #[inline]
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// Number of positions expanded so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// The configuration this engine was built with.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The adjacency provider.
    #[inline]
    pub fn adjacency(&self) -> &A {
        &self.adjacency
    }

    /// Mutable access to the adjacency, e.g. to add obstacles before the
    /// next [`set_start_and_goal`](Self::set_start_and_goal).
    #[inline]
    pub fn adjacency_mut(&mut self) -> &mut A {
        &mut self.adjacency
    }
}
