//! Small, self-contained graph walks over plain collections: breadth-first
//! and depth-first traversal of an adjacency list, and single-source shortest
//! paths over a weighted edge map.
//!
//! The traversals are lazy iterators; the shortest-path walk is a worklist
//! relaxation that terminates on any graph with non-negative weights.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use graph_walks::bfs;
//!
//! let graph = HashMap::from([
//!     ("a", vec!["b", "c"]),
//!     ("b", vec!["d", "e"]),
//!     ("c", vec!["f"]),
//!     ("f", vec!["g"]),
//! ]);
//! let root = "a";
//! let order: Vec<_> = bfs(&graph, &root).copied().collect();
//! assert_eq!(order, vec!["a", "b", "c", "d", "e", "f", "g"]);
//! ```
mod shortest_path;
mod traversal;

pub use shortest_path::{shortest_paths, ShortestPaths};
pub use traversal::{bfs, dfs, Bfs, Dfs};
