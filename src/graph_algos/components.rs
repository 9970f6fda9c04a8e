use std::{fmt::Debug, hash::Hash};

use crate::collections::FxHashSet;
use crate::errors::GraphError;
use super::{neighbors, Graph};


/// Count the connected components of the graph
/// Roots are tried in key order, a single visited set is shared across
/// all roots so each component is counted once.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = graph.len()))]
pub fn connected_components<N>(graph: &Graph<N>) -> Result<usize, GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    let mut visited: FxHashSet<N> = FxHashSet::default();
    let mut count = 0;

    for node in graph.keys() {
        if explore(graph, node, &mut visited)? {
            count += 1;
        }
    }

    tracing::debug!(count, "components counted");
    Ok(count)
}


/// Mark every node reachable from `current` as visited
/// Returns true when `current` was not visited yet, i.e. a new component root.
pub fn explore<N>(graph: &Graph<N>, current: &N, visited: &mut FxHashSet<N>) -> Result<bool, GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    if !visited.insert(current.clone()) {
        return Ok(false);
    }
    for neighbor in neighbors(graph, current)? {
        explore(graph, neighbor, visited)?;
    }
    Ok(true)
}


/// Size of the largest connected component
/// Zero for an empty graph.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = graph.len()))]
pub fn largest_component<N>(graph: &Graph<N>) -> Result<usize, GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    let mut visited: FxHashSet<N> = FxHashSet::default();
    let mut largest = 0;

    for node in graph.keys() {
        largest = largest.max(explore_size(graph, node, &mut visited)?);
    }

    tracing::debug!(largest, "largest component");
    Ok(largest)
}


/// Number of newly visited nodes reachable from `current`
/// Already visited nodes count 0.
pub fn explore_size<N>(graph: &Graph<N>, current: &N, visited: &mut FxHashSet<N>) -> Result<usize, GraphError>
where
    N: Eq + Hash + Clone + Debug,
{
    if !visited.insert(current.clone()) {
        return Ok(0);
    }
    let mut size = 1;
    for neighbor in neighbors(graph, current)? {
        size += explore_size(graph, neighbor, visited)?;
    }
    Ok(size)
}
