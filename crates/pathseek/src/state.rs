use std::collections::HashMap;

use crate::position::Position;

/// Per-position search state.
///
/// Transitions only go `Unvisited -> Open -> Closed`, or straight to
/// `Closed` for positions pre-closed as obstacles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// Never discovered.
    #[default]
    Unvisited,
    /// Discovered and waiting in the frontier.
    Open,
    /// Expanded, or blocked before the search began.
    Closed,
}

/// Status, accumulated cost and parent link of every discovered position.
///
/// Adjacency providers receive a shared reference while enumerating
/// neighbors and a mutable one during setup, where [`close`](Self::close)
/// marks obstacles.
#[derive(Debug, Clone)]
pub struct SearchState<T> {
    status: HashMap<T, SearchStatus>,
    cost: HashMap<T, f32>,
    parent: HashMap<T, T>,
}

impl<T: Position> Default for SearchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Position> SearchState<T> {
    /// Create an empty state.
    pub fn new() -> Self {
        Self {
            status: HashMap::new(),
            cost: HashMap::new(),
            parent: HashMap::new(),
        }
    }

    /// Status of `p`; absent positions are [`SearchStatus::Unvisited`].
    #[inline]
    pub fn status(&self, p: &T) -> SearchStatus {
        self.status.get(p).copied().unwrap_or_default()
    }

    /// Whether `p` has any status entry (open, closed or blocked).
    #[inline]
    pub fn is_discovered(&self, p: &T) -> bool {
        self.status.contains_key(p)
    }

    /// Accumulated cost from the start (the g-score). Obstacles have none.
    #[inline]
    pub fn cost(&self, p: &T) -> Option<f32> {
        self.cost.get(p).copied()
    }

    /// The position `p` was discovered from. The start is its own parent.
    #[inline]
    pub fn parent(&self, p: &T) -> Option<&T> {
        self.parent.get(p)
    }

    /// Mark an unvisited position as permanently closed.
    ///
    /// Returns `false`, leaving the state untouched, if `p` was already
    /// discovered.
    pub fn close(&mut self, p: T) -> bool {
        if self.is_discovered(&p) {
            return false;
        }
        self.status.insert(p, SearchStatus::Closed);
        true
    }

    /// Number of positions with a status entry.
    pub fn len(&self) -> usize {
        self.status.len()
    }

    /// Whether nothing has been discovered or blocked yet.
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }

    /// Iterate positions currently in the given status.
    pub fn with_status(&self, status: SearchStatus) -> impl Iterator<Item = &T> + '_ {
        self.status
            .iter()
            .filter(move |(_, s)| **s == status)
            .map(|(p, _)| p)
    }

    /// Number of parent links, which bounds the length of any acyclic chain.
    pub(crate) fn parent_links(&self) -> usize {
        self.parent.len()
    }

    pub(crate) fn open(&mut self, p: T, cost: f32, parent: T) {
        self.cost.insert(p.clone(), cost);
        self.parent.insert(p.clone(), parent);
        self.status.insert(p, SearchStatus::Open);
    }

    /// Lower the cost of an open position and re-point its parent.
    ///
    /// Open positions have no children yet, so the parent tree stays
    /// acyclic.
    pub(crate) fn relax(&mut self, p: &T, cost: f32, parent: T) {
        debug_assert_eq!(self.status(p), SearchStatus::Open);
        if let Some(c) = self.cost.get_mut(p) {
            *c = cost;
        }
        if let Some(par) = self.parent.get_mut(p) {
            *par = parent;
        }
    }

    pub(crate) fn mark_closed(&mut self, p: &T) {
        if let Some(s) = self.status.get_mut(p) {
            *s = SearchStatus::Closed;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.status.clear();
        self.cost.clear();
        self.parent.clear();
    }

    #[cfg(test)]
    pub(crate) fn set_parent(&mut self, p: T, parent: T) {
        self.parent.insert(p, parent);
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for status in [SearchStatus::Unvisited, SearchStatus::Open, SearchStatus::Closed] {
            let json = serde_json::to_string(&status).unwrap();
            let back: SearchStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, back);
        }
    }
}
