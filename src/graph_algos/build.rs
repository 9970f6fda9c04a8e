use std::{fmt::Debug, hash::Hash};

use super::{Edge, Graph};


/// Build an undirected adjacency list from a list of edges
/// Every pair (a, b) adds b to a's neighbors and a to b's neighbors.
/// Neighbor lists keep edge-list order. Self-loops and duplicate edges
/// are kept as-is.
pub fn build_graph<N>(edges: &[Edge<N>]) -> Graph<N>
where
    N: Eq + Hash + Clone + Debug,
{
    let mut graph: Graph<N> = Graph::default();

    for (a, b) in edges {
        graph.entry(a.clone()).or_default().push(b.clone());
        graph.entry(b.clone()).or_default().push(a.clone());
    }

    tracing::trace!(nodes = graph.len(), edges = edges.len(), "built graph");
    graph
}
