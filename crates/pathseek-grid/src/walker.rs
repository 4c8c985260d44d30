//! 4-way grid adjacency.

use std::collections::HashSet;

use log::debug;
use pathseek::{Adjacency, SearchState, SearchStatus};

use crate::geom::{Point, Range};
use crate::terrain::TerrainGrid;

/// Moves between cardinal neighbours inside a rectangle.
///
/// Obstacles and terrain walls are closed when a search is set up. With a
/// terrain grid, entering a cell costs its terrain code; otherwise every
/// move costs 1.
#[derive(Debug, Clone)]
pub struct GridWalker {
    range: Range,
    obstacles: HashSet<Point>,
    terrain: Option<TerrainGrid>,
}

impl GridWalker {
    /// An open rectangle with no obstacles.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            obstacles: HashSet::new(),
            terrain: None,
        }
    }

    /// Walk the passable cells of `terrain`, paying each cell's cost.
    pub fn from_terrain(terrain: TerrainGrid) -> Self {
        Self {
            range: terrain.range(),
            obstacles: HashSet::new(),
            terrain: Some(terrain),
        }
    }

    /// Add obstacles, builder style.
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Point>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    /// Block `p` for subsequent searches.
    pub fn add_obstacle(&mut self, p: Point) {
        self.obstacles.insert(p);
    }

    /// Unblock `p`. Returns whether it was an obstacle.
    pub fn remove_obstacle(&mut self, p: Point) -> bool {
        self.obstacles.remove(&p)
    }

    /// The rectangle moves are confined to.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Terrain the walker was built from, if any.
    #[inline]
    pub fn terrain(&self) -> Option<&TerrainGrid> {
        self.terrain.as_ref()
    }

    /// Whether `p` can be entered: in range, not an obstacle, not a wall.
    pub fn is_passable(&self, p: Point) -> bool {
        self.range.contains(p)
            && !self.obstacles.contains(&p)
            && self.terrain.as_ref().is_none_or(|t| t.is_passable(p))
    }
}

impl Adjacency<Point> for GridWalker {
    fn neighbors(&self, pos: &Point, state: &SearchState<Point>, buf: &mut Vec<Point>) {
        for n in pos.neighbors_4() {
            if self.is_passable(n) && state.status(&n) != SearchStatus::Closed {
                buf.push(n);
            }
        }
    }

    fn cost(&self, _from: &Point, to: &Point) -> f32 {
        self.terrain
            .as_ref()
            .and_then(|t| t.cost_at(*to))
            .unwrap_or(1) as f32
    }

    fn on_post_setup(&mut self, state: &mut SearchState<Point>) {
        let mut closed = 0;
        for &p in &self.obstacles {
            closed += usize::from(state.close(p));
        }
        if let Some(t) = &self.terrain {
            for p in t.walls() {
                closed += usize::from(state.close(p));
            }
        }
        debug!("grid {}: {closed} cells closed before search", self.range);
    }
}
