use std::{collections::VecDeque, fmt::Debug, hash::Hash};

use crate::collections::FxHashSet;
use crate::errors::GraphError;
use super::{build::build_graph, neighbors, Edge, Graph};


/// Fewest edges between two nodes of an undirected graph given as edges
/// Builds the graph then runs `shortest_path_in`.
/// Returns None when destination cannot be reached.
pub fn shortest_path<N>(edges: &[Edge<N>], source: &N, destination: &N) -> Result<Option<usize>, GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    let graph = build_graph(edges);
    shortest_path_in(&graph, source, destination)
}


/// Breadth first search for the fewest edges from source to destination
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Nodes are marked visited when enqueued, the source is marked up front
/// so it is never enqueued twice.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = graph.len()))]
pub fn shortest_path_in<N>(graph: &Graph<N>, source: &N, destination: &N) -> Result<Option<usize>, GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    let mut visited: FxHashSet<N> = FxHashSet::default();
    visited.insert(source.clone());

    // (node, distance from source)
    let mut queue: VecDeque<(N, usize)> = VecDeque::from([(source.clone(), 0)]);

    while let Some((current, distance)) = queue.pop_front() {
        if &current == destination {
            tracing::debug!(distance, "destination reached");
            return Ok(Some(distance));
        }

        for neighbor in neighbors(graph, &current)? {
            if visited.insert(neighbor.clone()) {
                queue.push_back((neighbor.clone(), distance + 1));
            }
        }
    }

    tracing::debug!(explored = visited.len(), "destination unreachable");
    Ok(None)
}
