//! Generic A\* shortest-path search.
//!
//! The engine works over any position type implementing [`Position`]
//! (equality, hashing and a heuristic distance) and asks an [`Adjacency`]
//! provider for the neighbors of each expanded position. It never looks
//! inside a position.
//!
//! ```
//! use pathseek::{Graph, Position, SearchEngine};
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! struct Stop(u32);
//!
//! impl Position for Stop {
//!     fn heuristic_distance(&self, _other: &Self) -> f32 {
//!         0.0
//!     }
//! }
//!
//! let mut graph = Graph::new();
//! graph.connect(Stop(0), Stop(1));
//! graph.connect(Stop(1), Stop(2));
//!
//! let mut engine = SearchEngine::new(graph);
//! engine.set_start_and_goal(Stop(0), Stop(2));
//! assert!(engine.find_path().unwrap().is_found());
//! assert_eq!(engine.get_path().unwrap(), vec![Stop(2), Stop(1), Stop(0)]);
//! ```
//!
//! # Capabilities
//!
//! | Trait | Role |
//! |---|---|
//! | [`Position`] | unit of search, heuristic distance to another position |
//! | [`Adjacency`] | neighbor enumeration, edge cost, obstacle pre-closing |

mod adjacency;
mod config;
mod engine;
mod error;
mod frontier;
mod graph;
mod position;
mod state;

pub use adjacency::{Adjacency, NoAdjacency};
pub use config::{FrontierMode, SearchConfig};
pub use engine::{SearchEngine, SearchOutcome, Step};
pub use error::SearchError;
pub use graph::Graph;
pub use position::Position;
pub use state::{SearchState, SearchStatus};
