//! Grid domain for [`pathseek`].
//!
//! - [`Point`] and [`Range`]: integer coordinates and half-open rectangles.
//!   `Point` is a [`pathseek::Position`] with the Manhattan distance as its
//!   heuristic.
//! - [`TerrainGrid`]: a rectangle of terrain codes, parseable from text.
//! - [`GridWalker`]: 4-way grid adjacency that pre-closes walls and
//!   obstacles and charges terrain costs.
//!
//! ```
//! use pathseek::SearchEngine;
//! use pathseek_grid::{GridWalker, Point, TerrainGrid};
//!
//! let terrain = TerrainGrid::from_text(
//!     "\
//! .#..
//! .#.#
//! ....",
//! )
//! .unwrap();
//! let mut engine = SearchEngine::new(GridWalker::from_terrain(terrain));
//! engine.set_start_and_goal(Point::new(0, 0), Point::new(2, 0));
//! engine.find_path().unwrap();
//! assert_eq!(engine.get_path().unwrap().len(), 7);
//! ```

pub mod geom;
pub mod terrain;
pub mod walker;

pub use geom::{Point, Range};
pub use terrain::{Cell, TerrainError, TerrainGrid};
pub use walker::GridWalker;
