//! Undirected graph and connected components.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::formulation::Edge;

/// An undirected graph built from an edge list.
///
/// Only nodes incident to at least one edge are present; the separation
/// oracle treats absent nodes as singleton components, which never yield
/// a cut.
///
/// # Examples
///
/// ```
/// use cvrp_cuts::cuts::Graph;
/// use cvrp_cuts::formulation::Edge;
///
/// let edges = [Edge::new(1, 2).unwrap(), Edge::new(4, 5).unwrap()];
/// let graph = Graph::from_edges(&edges);
/// let components = graph.connected_components();
/// assert_eq!(components, vec![vec![1, 2], vec![4, 5]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<usize, Vec<usize>>,
}

impl Graph {
    /// Builds a graph from an edge list. Parallel edges collapse.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut adjacency: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for edge in edges {
            let a = adjacency.entry(edge.lo()).or_default();
            if !a.contains(&edge.hi()) {
                a.push(edge.hi());
            }
            let b = adjacency.entry(edge.hi()).or_default();
            if !b.contains(&edge.lo()) {
                b.push(edge.lo());
            }
        }
        Self { adjacency }
    }

    /// Number of nodes with at least one incident edge.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Partitions the graph's nodes into connected components.
    ///
    /// Nodes within a component are sorted ascending; components are
    /// ordered by their smallest node.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut components = Vec::new();
        let mut seen: BTreeSet<usize> = BTreeSet::new();
        for &start in self.adjacency.keys() {
            if seen.contains(&start) {
                continue;
            }
            let mut component = Vec::new();
            let mut queue = VecDeque::from([start]);
            seen.insert(start);
            while let Some(node) = queue.pop_front() {
                component.push(node);
                if let Some(neighbors) = self.adjacency.get(&node) {
                    for &next in neighbors {
                        if seen.insert(next) {
                            queue.push_back(next);
                        }
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        components
    }
}
