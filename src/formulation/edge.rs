//! Unordered edge and edge-variable map.

use std::collections::BTreeMap;

use crate::mip::Var;

/// An unordered node pair with the invariant `lo < hi`.
///
/// Construction orders its arguments, so `(3, 1)` and `(1, 3)` denote the
/// same edge; self-loops are rejected.
///
/// # Examples
///
/// ```
/// use cvrp_cuts::formulation::Edge;
///
/// let e = Edge::new(3, 1).unwrap();
/// assert_eq!((e.lo(), e.hi()), (1, 3));
/// assert_eq!(e, Edge::new(1, 3).unwrap());
/// assert!(Edge::new(2, 2).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    lo: usize,
    hi: usize,
}

impl Edge {
    /// Creates an edge between two distinct nodes.
    ///
    /// Returns `None` for a self-loop.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        if a == b {
            return None;
        }
        Some(Self {
            lo: a.min(b),
            hi: a.max(b),
        })
    }

    /// Smaller endpoint.
    pub fn lo(&self) -> usize {
        self.lo
    }

    /// Larger endpoint.
    pub fn hi(&self) -> usize {
        self.hi
    }

    /// Returns `true` if the edge is incident to the given node.
    pub fn touches(&self, node: usize) -> bool {
        self.lo == node || self.hi == node
    }

    /// The endpoint opposite to `node`.
    ///
    /// `node` must be one of the endpoints.
    pub fn other(&self, node: usize) -> usize {
        debug_assert!(self.touches(node));
        if self.lo == node {
            self.hi
        } else {
            self.lo
        }
    }
}

/// Upper-triangular map from edges to decision variables.
///
/// Holds one integer variable per unordered node pair `i < j`; the edge
/// ordering invariant makes a pair a unique key regardless of the order
/// its endpoints were named in.
#[derive(Debug, Clone, Default)]
pub struct EdgeVars {
    vars: BTreeMap<Edge, Var>,
}

impl EdgeVars {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, edge: Edge, var: Var) {
        self.vars.insert(edge, var);
    }

    /// The variable for an edge, if one exists.
    pub fn var(&self, edge: Edge) -> Option<Var> {
        self.vars.get(&edge).copied()
    }

    /// Iterates over `(edge, variable)` pairs in edge order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, Var)> + '_ {
        self.vars.iter().map(|(e, v)| (*e, *v))
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
