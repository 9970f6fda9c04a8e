use std::{collections::VecDeque, fmt::Debug, hash::Hash};

use crate::collections::FxHashSet;
use crate::errors::GraphError;
use super::{neighbors, Graph};


/// Recursive path check (depth first)
/// `visited` is owned by the caller and shared across the recursion,
/// pass an empty set for a fresh query.
/// source == destination is always reachable, even if neither is a key.
pub fn has_path_dfs_rec<N>(graph: &Graph<N>, source: &N, destination: &N, visited: &mut FxHashSet<N>) -> Result<bool, GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    if source == destination {
        return Ok(true);
    }
    // cycle guard
    if !visited.insert(source.clone()) {
        return Ok(false);
    }

    for neighbor in neighbors(graph, source)? {
        if has_path_dfs_rec(graph, neighbor, destination, visited)? {
            return Ok(true);
        }
    }
    Ok(false)
}


/// Iterative path check with a stack (LIFO)
#[tracing::instrument(level = "debug", skip_all)]
pub fn has_path_dfs_iter<N>(graph: &Graph<N>, source: &N, destination: &N) -> Result<bool, GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    if source == destination {
        return Ok(true);
    }

    let mut visited: FxHashSet<N> = FxHashSet::default();
    let mut stack = vec![source.clone()];

    while let Some(current) = stack.pop() {
        if &current == destination {
            tracing::debug!(explored = visited.len(), "path found");
            return Ok(true);
        }
        if visited.contains(&current) {
            continue;
        }
        stack.extend(neighbors(graph, &current)?.iter().cloned());
        visited.insert(current);
    }

    tracing::debug!(explored = visited.len(), "no path");
    Ok(false)
}


/// Iterative path check with a queue (FIFO)
#[tracing::instrument(level = "debug", skip_all)]
pub fn has_path_bfs_iter<N>(graph: &Graph<N>, source: &N, destination: &N) -> Result<bool, GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    if source == destination {
        return Ok(true);
    }

    let mut visited: FxHashSet<N> = FxHashSet::default();
    let mut queue = VecDeque::from([source.clone()]);

    while let Some(current) = queue.pop_front() {
        if &current == destination {
            tracing::debug!(explored = visited.len(), "path found");
            return Ok(true);
        }
        if visited.contains(&current) {
            continue;
        }
        queue.extend(neighbors(graph, &current)?.iter().cloned());
        visited.insert(current);
    }

    tracing::debug!(explored = visited.len(), "no path");
    Ok(false)
}
