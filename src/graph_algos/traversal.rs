//! Depth-first and breadth-first traversal
//!
//! The iterative forms are unguarded: they record a node every time it is
//! removed from the stack/queue and push all of its neighbors without
//! consulting a visited set. On trees this visits every reachable node once.
//! Nodes with several parents are emitted once per parent, and a cycle makes
//! them loop forever. Use `dfs_traversal_rec` for graphs that may share
//! neighbors or contain cycles.

use std::{collections::VecDeque, fmt::Debug, hash::Hash};

use crate::errors::GraphError;
use super::{neighbors, Graph};


/// Depth-first traversal with an explicit stack (LIFO)
/// Siblings come out in reverse of their listed order.
/// Requires an acyclic graph, see module docs.
#[tracing::instrument(level = "debug", skip_all)]
pub fn dfs_traversal_iter<N>(graph: &Graph<N>, source: &N) -> Result<Vec<N>, GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    let mut result = Vec::new();
    let mut stack = vec![source.clone()];

    while let Some(current) = stack.pop() {
        stack.extend(neighbors(graph, &current)?.iter().cloned());
        result.push(current);
    }

    tracing::debug!(visited = result.len(), "dfs traversal finished");
    Ok(result)
}


/// Recursive depth-first traversal
/// Appends each newly reached node to `visited`, which doubles as the
/// ordered result. Nodes already in `visited` are skipped, so cycles and
/// shared neighbors are safe. Membership is a linear scan.
pub fn dfs_traversal_rec<N>(graph: &Graph<N>, visited: &mut Vec<N>, source: &N) -> Result<(), GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    if visited.contains(source) {
        return Ok(());
    }
    visited.push(source.clone());
    tracing::trace!(node = ?source, "visit");

    for neighbor in neighbors(graph, source)? {
        dfs_traversal_rec(graph, visited, neighbor)?;
    }
    Ok(())
}


/// Breadth-first traversal with an explicit queue (FIFO)
/// Same shape as `dfs_traversal_iter`, nodes come out level by level.
/// Requires an acyclic graph, see module docs.
#[tracing::instrument(level = "debug", skip_all)]
pub fn bfs_traversal_iter<N>(graph: &Graph<N>, source: &N) -> Result<Vec<N>, GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    let mut result = Vec::new();
    let mut queue = VecDeque::from([source.clone()]);

    while let Some(current) = queue.pop_front() {
        queue.extend(neighbors(graph, &current)?.iter().cloned());
        result.push(current);
    }

    tracing::debug!(visited = result.len(), "bfs traversal finished");
    Ok(result)
}
