use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::config::FrontierMode;
use crate::position::Position;
use crate::state::{SearchState, SearchStatus};

/// Result of asking the frontier for its best candidate.
#[derive(Debug, PartialEq)]
pub(crate) enum Selection<T> {
    /// Nothing left to expand.
    Empty,
    /// The best remaining entry is already closed, so every entry is.
    Closed,
    /// The next position to expand.
    Open(T),
}

/// Scores frontier positions against the current state and goal.
pub(crate) struct Scoring<'a, T> {
    pub(crate) state: &'a SearchState<T>,
    pub(crate) goal: &'a T,
    pub(crate) use_heuristic: bool,
}

impl<T: Position> Scoring<'_, T> {
    #[inline]
    pub(crate) fn h(&self, p: &T) -> f32 {
        if self.use_heuristic {
            self.goal.heuristic_distance(p)
        } else {
            0.0
        }
    }

    #[inline]
    fn g(&self, p: &T) -> f32 {
        self.state.cost(p).unwrap_or(f32::INFINITY)
    }

    /// Closed entries after everything else, then ascending `f = g + h`,
    /// then ascending `g`.
    pub(crate) fn compare(&self, a: &T, b: &T) -> Ordering {
        let a_closed = self.state.status(a) == SearchStatus::Closed;
        let b_closed = self.state.status(b) == SearchStatus::Closed;
        match (a_closed, b_closed) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let (ga, gb) = (self.g(a), self.g(b));
                let (fa, fb) = (ga + self.h(a), gb + self.h(b));
                fa.total_cmp(&fb).then_with(|| ga.total_cmp(&gb))
            }
        }
    }
}

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `(f, g, seq)` first.
pub(crate) struct HeapEntry<T> {
    f: f32,
    g: f32,
    seq: u64,
    pos: T,
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

/// The open list.
pub(crate) enum Frontier<T> {
    Sorted(Vec<T>),
    Heap { heap: BinaryHeap<HeapEntry<T>>, seq: u64 },
}

impl<T: Position> Frontier<T> {
    pub(crate) fn new(mode: FrontierMode) -> Self {
        match mode {
            FrontierMode::Sorted => Self::Sorted(Vec::new()),
            FrontierMode::Heap => Self::Heap {
                heap: BinaryHeap::new(),
                seq: 0,
            },
        }
    }

    /// Number of entries, stale ones included.
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Sorted(list) => list.len(),
            Self::Heap { heap, .. } => heap.len(),
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            Self::Sorted(list) => list.clear(),
            Self::Heap { heap, seq } => {
                heap.clear();
                *seq = 0;
            }
        }
    }

    /// Add a newly discovered position with its current scores.
    pub(crate) fn push(&mut self, pos: T, g: f32, f: f32) {
        match self {
            Self::Sorted(list) => list.push(pos),
            Self::Heap { heap, seq } => {
                heap.push(HeapEntry { f, g, seq: *seq, pos });
                *seq += 1;
            }
        }
    }

    /// Record lowered scores for a position already in the frontier.
    pub(crate) fn reprioritize(&mut self, pos: T, g: f32, f: f32) {
        match self {
            // Sorting reads scores from the state; the entry is already listed.
            Self::Sorted(_) => {}
            Self::Heap { .. } => self.push(pos, g, f),
        }
    }

    /// Pick the next position to expand.
    ///
    /// In sorted mode the head stays in the list; once expanded it is
    /// closed and sorts last. In heap mode it is popped, and closed or
    /// superseded entries are discarded on the way.
    pub(crate) fn select(&mut self, scoring: &Scoring<'_, T>) -> Selection<T> {
        match self {
            Self::Sorted(list) => {
                list.sort_by(|a, b| scoring.compare(a, b));
                match list.first() {
                    None => Selection::Empty,
                    Some(head) if scoring.state.status(head) == SearchStatus::Closed => {
                        Selection::Closed
                    }
                    Some(head) => Selection::Open(head.clone()),
                }
            }
            Self::Heap { heap, .. } => {
                while let Some(entry) = heap.pop() {
                    if scoring.state.status(&entry.pos) == SearchStatus::Closed {
                        continue;
                    }
                    if scoring.state.cost(&entry.pos).is_some_and(|g| entry.g > g) {
                        continue;
                    }
                    return Selection::Open(entry.pos);
                }
                Selection::Empty
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Positions on a line; the heuristic is the distance between indices.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Slot(i32);

    impl Position for Slot {
        fn heuristic_distance(&self, other: &Self) -> f32 {
            (self.0 - other.0).abs() as f32
        }
    }

    fn state_with(entries: &[(i32, f32)]) -> SearchState<Slot> {
        let mut state = SearchState::new();
        for &(id, g) in entries {
            state.open(Slot(id), g, Slot(0));
        }
        state
    }

    #[test]
    fn closed_sorts_last() {
        let mut state = state_with(&[(1, 0.0), (2, 5.0)]);
        state.mark_closed(&Slot(1));
        let goal = Slot(10);
        let scoring = Scoring {
            state: &state,
            goal: &goal,
            use_heuristic: true,
        };
        assert_eq!(scoring.compare(&Slot(1), &Slot(2)), Ordering::Greater);
        assert_eq!(scoring.compare(&Slot(2), &Slot(1)), Ordering::Less);
        assert_eq!(scoring.compare(&Slot(1), &Slot(1)), Ordering::Equal);
    }

    #[test]
    fn equal_f_prefers_lower_g() {
        // Goal at 10: slot 6 with g=3 gives f=7, slot 4 with g=1 gives f=7.
        let state = state_with(&[(6, 3.0), (4, 1.0)]);
        let goal = Slot(10);
        let scoring = Scoring {
            state: &state,
            goal: &goal,
            use_heuristic: true,
        };
        assert_eq!(scoring.compare(&Slot(4), &Slot(6)), Ordering::Less);
    }

    #[test]
    fn without_heuristic_orders_by_g() {
        let state = state_with(&[(9, 4.0), (1, 2.0)]);
        let goal = Slot(10);
        let scoring = Scoring {
            state: &state,
            goal: &goal,
            use_heuristic: false,
        };
        assert_eq!(scoring.h(&Slot(1)), 0.0);
        assert_eq!(scoring.compare(&Slot(1), &Slot(9)), Ordering::Less);
    }

    /// Drain a frontier, closing each selection as the engine would.
    fn drain(mode: FrontierMode, entries: &[(i32, f32)], goal: &Slot) -> Vec<i32> {
        let mut state = state_with(entries);
        let mut frontier = Frontier::new(mode);
        for &(id, g) in entries {
            let f = g + goal.heuristic_distance(&Slot(id));
            frontier.push(Slot(id), g, f);
        }
        let mut order = Vec::new();
        loop {
            let scoring = Scoring {
                state: &state,
                goal,
                use_heuristic: true,
            };
            match frontier.select(&scoring) {
                Selection::Open(p) => {
                    state.mark_closed(&p);
                    order.push(p.0);
                }
                Selection::Empty | Selection::Closed => break,
            }
        }
        order
    }

    #[test]
    fn sorted_and_heap_agree() {
        let goal = Slot(10);
        let entries = [(8, 4.0), (3, 2.0), (5, 0.0), (7, 1.0), (2, 1.0), (6, 1.0)];
        let sorted = drain(FrontierMode::Sorted, &entries, &goal);
        let heap = drain(FrontierMode::Heap, &entries, &goal);
        // f: 8->6, 3->9, 5->5, 7->4, 2->9, 6->5; ties on f=5 and f=9 go to
        // the lower g.
        assert_eq!(sorted, vec![7, 5, 6, 8, 2, 3]);
        assert_eq!(heap, sorted);
    }

    #[test]
    fn sorted_reports_closed_head() {
        let goal = Slot(10);
        let state = {
            let mut s = state_with(&[(1, 0.0)]);
            s.mark_closed(&Slot(1));
            s
        };
        let mut frontier = Frontier::new(FrontierMode::Sorted);
        frontier.push(Slot(1), 0.0, 9.0);
        let scoring = Scoring {
            state: &state,
            goal: &goal,
            use_heuristic: true,
        };
        assert_eq!(frontier.select(&scoring), Selection::Closed);
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn heap_skips_superseded_entries() {
        let goal = Slot(10);
        let mut state = state_with(&[(4, 5.0)]);
        let mut frontier = Frontier::new(FrontierMode::Heap);
        frontier.push(Slot(4), 5.0, 11.0);
        state.relax(&Slot(4), 2.0, Slot(0));
        frontier.reprioritize(Slot(4), 2.0, 8.0);
        assert_eq!(frontier.len(), 2);

        let scoring = Scoring {
            state: &state,
            goal: &goal,
            use_heuristic: true,
        };
        assert_eq!(frontier.select(&scoring), Selection::Open(Slot(4)));
        state.mark_closed(&Slot(4));
        let scoring = Scoring {
            state: &state,
            goal: &goal,
            use_heuristic: true,
        };
        assert_eq!(frontier.select(&scoring), Selection::Empty);
    }
}
