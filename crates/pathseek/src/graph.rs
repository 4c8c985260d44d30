use std::collections::{HashMap, HashSet};

use crate::adjacency::Adjacency;
use crate::position::Position;
use crate::state::{SearchState, SearchStatus};

/// Adjacency-list graph over arbitrary positions.
///
/// Edges are directed and weighted; [`connect`](Self::connect) adds a unit
/// edge in both directions. Blocked nodes are closed when a search is set
/// up and so are never entered.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    edges: HashMap<T, Vec<(T, f32)>>,
    blocked: HashSet<T>,
}

impl<T: Position> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Position> Graph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
            blocked: HashSet::new(),
        }
    }

    /// Add a directed edge. `weight` must be > 0.
    pub fn add_edge(&mut self, from: T, to: T, weight: f32) {
        self.edges.entry(from).or_default().push((to, weight));
    }

    /// Add a unit-cost edge in both directions.
    pub fn connect(&mut self, a: T, b: T) {
        self.add_edge(a.clone(), b.clone(), 1.0);
        self.add_edge(b, a, 1.0);
    }

    /// Mark `p` as impassable for subsequent searches.
    pub fn block(&mut self, p: T) {
        self.blocked.insert(p);
    }

    /// Remove a block added with [`block`](Self::block).
    pub fn unblock(&mut self, p: &T) -> bool {
        self.blocked.remove(p)
    }

    /// Outgoing edges of `p` with their weights.
    pub fn edges_from(&self, p: &T) -> &[(T, f32)] {
        self.edges.get(p).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `p` is blocked.
    pub fn is_blocked(&self, p: &T) -> bool {
        self.blocked.contains(p)
    }
}

impl<T: Position> Adjacency<T> for Graph<T> {
    fn neighbors(&self, pos: &T, state: &SearchState<T>, buf: &mut Vec<T>) {
        buf.extend(
            self.edges_from(pos)
                .iter()
                .map(|(to, _)| to)
                .filter(|to| state.status(to) != SearchStatus::Closed)
                .cloned(),
        );
    }

    fn cost(&self, from: &T, to: &T) -> f32 {
        // Cheapest of any parallel edges.
        self.edges_from(from)
            .iter()
            .filter(|(t, _)| t == to)
            .map(|&(_, w)| w)
            .reduce(f32::min)
            .unwrap_or(1.0)
    }

    fn on_post_setup(&mut self, state: &mut SearchState<T>) {
        for p in &self.blocked {
            state.close(p.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FrontierMode, SearchConfig, SearchEngine, SearchError, SearchOutcome};

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct City(&'static str);

    impl Position for City {
        fn heuristic_distance(&self, _other: &Self) -> f32 {
            0.0
        }
    }

    fn ring() -> Graph<City> {
        let mut g = Graph::new();
        for (a, b) in [("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "a")] {
            g.connect(City(a), City(b));
        }
        g
    }

    #[test]
    fn edges_and_cost() {
        let mut g = ring();
        g.add_edge(City("a"), City("c"), 5.0);
        g.add_edge(City("a"), City("c"), 3.0);
        assert_eq!(g.edges_from(&City("a")).len(), 4);
        assert!(g.edges_from(&City("z")).is_empty());
        assert_eq!(g.cost(&City("a"), &City("c")), 3.0);
        assert_eq!(g.cost(&City("a"), &City("b")), 1.0);
    }

    #[test]
    fn neighbors_offer_open_but_not_closed() {
        let mut g = Graph::new();
        for to in ["b", "c", "d"] {
            g.add_edge(City("a"), City(to), 1.0);
        }
        let mut state = SearchState::new();
        state.open(City("b"), 4.0, City("z"));
        state.close(City("c"));
        let mut buf = Vec::new();
        g.neighbors(&City("a"), &state, &mut buf);
        assert_eq!(buf, vec![City("b"), City("d")]);
    }

    #[test]
    fn shortest_way_round() {
        let mut engine = SearchEngine::new(ring());
        engine.set_start_and_goal(City("a"), City("d"));
        assert!(engine.find_path().unwrap().is_found());
        assert_eq!(
            engine.get_path().unwrap(),
            vec![City("d"), City("e"), City("a")]
        );
    }

    #[test]
    fn blocked_node_forces_detour() {
        let mut g = ring();
        g.block(City("e"));
        assert!(g.is_blocked(&City("e")));
        let mut engine = SearchEngine::new(g);
        engine.set_start_and_goal(City("a"), City("d"));
        engine.find_path().unwrap();
        assert_eq!(
            engine.forward_path().unwrap(),
            vec![City("a"), City("b"), City("c"), City("d")]
        );
    }

    #[test]
    fn cut_ring_has_no_path() {
        let mut g = ring();
        g.block(City("b"));
        g.block(City("e"));
        for mode in [FrontierMode::Sorted, FrontierMode::Heap] {
            let mut engine =
                SearchEngine::with_config(g.clone(), SearchConfig::default().with_frontier(mode));
            engine.set_start_and_goal(City("a"), City("d"));
            let outcome = engine.find_path().unwrap();
            assert!(!outcome.is_found());
            assert_eq!(engine.get_path(), Err(SearchError::NoPath(outcome)));
        }

        g.unblock(&City("b"));
        let mut engine = SearchEngine::new(g);
        engine.set_start_and_goal(City("a"), City("d"));
        assert_eq!(engine.find_path(), Ok(SearchOutcome::Found));
    }

    #[test]
    fn weighted_edges_need_relaxation() {
        // a -> d directly costs 10; a -> b -> c -> d costs 3.
        let mut g = Graph::new();
        g.add_edge(City("a"), City("d"), 10.0);
        g.add_edge(City("a"), City("b"), 1.0);
        g.add_edge(City("b"), City("c"), 1.0);
        g.add_edge(City("c"), City("d"), 1.0);

        let mut engine =
            SearchEngine::with_config(g, SearchConfig::default().with_relax_costs(true));
        engine.set_start_and_goal(City("a"), City("d"));
        engine.find_path().unwrap();
        assert_eq!(engine.path_cost(), Some(3.0));
        assert_eq!(engine.get_path().unwrap().len(), 4);
    }
}
