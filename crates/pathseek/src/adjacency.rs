use crate::position::Position;
use crate::state::SearchState;

/// Neighbor relation the engine searches over.
///
/// Implement this per domain (grid, road graph, weighted terrain); the
/// engine is generic over it.
pub trait Adjacency<T: Position> {
    /// Append the neighbors of `pos` into `buf`. The caller clears `buf`
    /// before calling.
    ///
    /// Implementations should skip positions that are
    /// [`Closed`](crate::SearchStatus::Closed) in `state`. Open positions
    /// may be offered again: the engine ignores them unless
    /// [`relax_costs`](crate::SearchConfig::relax_costs) is set and the new
    /// route is cheaper. Nothing is ever discovered twice.
    fn neighbors(&self, pos: &T, state: &SearchState<T>, buf: &mut Vec<T>);

    /// Cost of moving from `from` to the adjacent `to`. Must be > 0.
    fn cost(&self, _from: &T, _to: &T) -> f32 {
        1.0
    }

    /// Called once from
    /// [`set_start_and_goal`](crate::SearchEngine::set_start_and_goal),
    /// after the endpoints are recorded and before the search starts.
    /// Use [`SearchState::close`] to mark obstacles.
    fn on_post_setup(&mut self, _state: &mut SearchState<T>) {}
}

/// Adjacency with no edges: only a search whose start is the goal succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdjacency;

impl<T: Position> Adjacency<T> for NoAdjacency {
    fn neighbors(&self, _pos: &T, _state: &SearchState<T>, _buf: &mut Vec<T>) {}
}
