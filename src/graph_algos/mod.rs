pub mod build;
pub mod traversal;
pub mod reachability;
pub mod components;
pub mod shortest_path;

use std::{fmt::Debug, hash::Hash};

use crate::collections::FxIndexMap;
use crate::errors::GraphError;

/// Adjacency list keyed by node identifier
/// N: Node - identifier on the graph
/// Each key maps to its neighbors in listed order. Directed by default,
/// undirected graphs hold both directions of every edge.
/// Every node referenced as a neighbor is expected to also be a key.
pub type Graph<N> = FxIndexMap<N, Vec<N>>;

/// Unordered pair of node identifiers
pub type Edge<N> = (N, N);


/// Neighbors of `node`, or `NodeNotFound` when it is not a key of the graph
pub(crate) fn neighbors<'a, N>(graph: &'a Graph<N>, node: &N) -> Result<&'a [N], GraphError>
where
    N: Eq + Hash + Debug,
{
    graph
        .get(node)
        .map(Vec::as_slice)
        .ok_or_else(|| GraphError::node_not_found(node))
}
