//! Classic graph algorithms over adjacency lists and land/water grids
//!
//! - traversal: depth first and breadth first, iterative and recursive
//! - reachability: path existence between two nodes
//! - components: connected component count and largest component
//! - shortest path: fewest edges on an unweighted graph
//! - islands: flood fill region analysis on a 2D grid

pub mod collections;
pub mod errors;
pub mod graph_algos;
pub mod grid_algos;

pub use errors::{GraphError, GridError};
pub use graph_algos::{Edge, Graph};
pub use graph_algos::build::build_graph;
pub use graph_algos::traversal::{bfs_traversal_iter, dfs_traversal_iter, dfs_traversal_rec};
pub use graph_algos::reachability::{has_path_bfs_iter, has_path_dfs_iter, has_path_dfs_rec};
pub use graph_algos::components::{connected_components, explore, explore_size, largest_component};
pub use graph_algos::shortest_path::{shortest_path, shortest_path_in};
pub use grid_algos::{Cell, Grid};
pub use grid_algos::islands::{explore_island, explore_island_size, island_count, minimum_island_size, Position};
