//! Generic graph traversal over caller-supplied nodes.
//!
//! Three strategies share one incremental engine:
//!
//! - [`BreadthFirst`]: hop-count shortest paths over unweighted edges.
//! - [`ShortestPaths`]: Dijkstra over non-negative edge weights.
//! - [`AStar`]: Dijkstra guided by an admissible heuristic.
//!
//! A [`Traversal`] is seeded with [`Traversal::start_from`] and then either run
//! toward a goal with [`Traversal::go_to`] or stepped one node at a time with
//! [`Traversal::advance`] (or the [`Traversal::steps`] iterator). Paths, depths
//! and distances are read from the accumulated bookkeeping afterwards.
//!
//! ```
//! use traversal::Traversal;
//!
//! let mut search = Traversal::shortest_paths(|node: &char, _| match node {
//!     'a' => vec![('b', 1u32), ('c', 5)],
//!     'b' => vec![('c', 1)],
//!     _ => vec![],
//! });
//!
//! search.start_from(['a']).unwrap().go_to('c').unwrap();
//! assert_eq!(search.path().unwrap(), vec!['a', 'b', 'c']);
//! assert_eq!(search.distance().unwrap(), 2);
//! ```

pub mod engine;
pub mod error;
pub mod node;
pub mod strategies;
pub mod tree;

pub use engine::{Phase, Steps, Strategy, Traversal, Weighted};
pub use error::{Result, TraversalError};
pub use node::{Cost, Node};
pub use strategies::{AStar, BreadthFirst, ShortestPaths};
pub use tree::{NodeId, SearchTree};
