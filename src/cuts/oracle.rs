//! Rounded capacity/connectivity cut separation.

use crate::formulation::{Edge, EdgeVars};
use crate::mip::LinExpr;

use super::Graph;

/// A rounded capacity cut over one violating component.
///
/// Bounds the edges strictly inside the component: a component `S` that
/// legitimately needs `min_vehicles` separate vehicle visits can use at
/// most `|S| - min_vehicles` internal edges, since each required vehicle
/// breaks the internal cycle at one more point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cut {
    nodes: Vec<usize>,
    min_vehicles: u32,
}

impl Cut {
    /// The component's nodes, sorted ascending.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Minimum number of vehicles needed to serve the component's demand.
    pub fn min_vehicles(&self) -> u32 {
        self.min_vehicles
    }

    /// Right-hand side `|S| - min_vehicles`.
    pub fn rhs(&self) -> f64 {
        self.nodes.len() as f64 - f64::from(self.min_vehicles)
    }

    /// Renders the left-hand side `Σ x[i,j]` over all pairs inside the
    /// component, against the given edge-variable map.
    pub fn to_expr(&self, vars: &EdgeVars) -> LinExpr {
        let mut expr = LinExpr::new();
        for (a, i) in self.nodes.iter().enumerate() {
            for j in &self.nodes[a + 1..] {
                if let Some(edge) = Edge::new(*i, *j) {
                    if let Some(var) = vars.var(edge) {
                        expr.add_term(var, 1.0);
                    }
                }
            }
        }
        expr
    }
}

/// Detects capacity/connectivity violations in integer-feasible candidates.
///
/// Holds the per-node demand vector and the vehicle capacity; separation
/// itself is a pure function of those and the candidate edge set, so
/// re-running it on the same candidate yields the same cuts.
#[derive(Debug, Clone, Copy)]
pub struct SeparationOracle<'a> {
    demands: &'a [u32],
    capacity: u32,
}

impl<'a> SeparationOracle<'a> {
    /// Creates an oracle for the given demands (indexed by node id) and
    /// vehicle capacity.
    pub fn new(demands: &'a [u32], capacity: u32) -> Self {
        Self { demands, capacity }
    }

    /// Separates cuts from a candidate edge set.
    ///
    /// The candidate must already be restricted to non-depot edges. Each
    /// connected component `S` of the candidate graph is checked:
    /// a component violates iff `|S| >= 3` and it either contains a fully
    /// internal cycle (`internal edges >= |S|`) or needs more than one
    /// vehicle for its demand. Components of size 1 or 2 are skipped.
    /// An empty result means the candidate passes this oracle; it does not
    /// certify optimality.
    pub fn find_violations(&self, candidate: &[Edge]) -> Vec<Cut> {
        let graph = Graph::from_edges(candidate);
        let mut cuts = Vec::new();
        for nodes in graph.connected_components() {
            if nodes.len() < 3 {
                continue;
            }
            let demand_sum: u64 = nodes.iter().map(|&i| u64::from(self.demands[i])).sum();
            let min_vehicles = demand_sum.div_ceil(u64::from(self.capacity)) as u32;
            let internal_edges = candidate
                .iter()
                .filter(|e| nodes.binary_search(&e.lo()).is_ok() && nodes.binary_search(&e.hi()).is_ok())
                .count();
            if internal_edges >= nodes.len() || min_vehicles > 1 {
                cuts.push(Cut {
                    nodes,
                    min_vehicles,
                });
            }
        }
        cuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn edge(a: usize, b: usize) -> Edge {
        Edge::new(a, b).expect("distinct")
    }

    #[test]
    fn test_no_cut_for_feasible_path() {
        // Path 1-2-3: 2 internal edges < 3 nodes, demand fits one vehicle.
        let demands = [0, 10, 10, 10];
        let oracle = SeparationOracle::new(&demands, 100);
        let cuts = oracle.find_violations(&[edge(1, 2), edge(2, 3)]);
        assert!(cuts.is_empty());
    }

    #[test]
    fn test_cut_for_internal_cycle() {
        // Triangle 1-2-3: 3 internal edges >= 3 nodes, even with light demand.
        let demands = [0, 10, 10, 10];
        let oracle = SeparationOracle::new(&demands, 100);
        let cuts = oracle.find_violations(&[edge(1, 2), edge(2, 3), edge(1, 3)]);
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].nodes(), &[1, 2, 3]);
        assert_eq!(cuts[0].min_vehicles(), 1);
        assert_eq!(cuts[0].rhs(), 2.0);
    }

    #[test]
    fn test_cut_for_capacity_violation() {
        // Path 1-2-3 with total demand 180 > 100 needs two vehicles.
        let demands = [0, 50, 60, 70];
        let oracle = SeparationOracle::new(&demands, 100);
        let cuts = oracle.find_violations(&[edge(1, 2), edge(2, 3)]);
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].min_vehicles(), 2);
        assert_eq!(cuts[0].rhs(), 1.0);
    }

    #[test]
    fn test_small_components_never_cut() {
        // A pair over capacity and an isolated heavy node are both skipped.
        let demands = [0, 90, 90, 500];
        let oracle = SeparationOracle::new(&demands, 100);
        let cuts = oracle.find_violations(&[edge(1, 2)]);
        assert!(cuts.is_empty());
    }

    #[test]
    fn test_multiple_components_multiple_cuts() {
        let demands = [0, 50, 60, 70, 80, 90, 40];
        let oracle = SeparationOracle::new(&demands, 100);
        let candidate = [
            edge(1, 2),
            edge(2, 3), // demand 180 -> violating
            edge(4, 5),
            edge(5, 6), // demand 210 -> violating
        ];
        let cuts = oracle.find_violations(&candidate);
        assert_eq!(cuts.len(), 2);
        assert_eq!(cuts[0].nodes(), &[1, 2, 3]);
        assert_eq!(cuts[1].nodes(), &[4, 5, 6]);
    }

    #[test]
    fn test_cut_expr_covers_all_internal_pairs() {
        use crate::formulation::build_model;
        use crate::models::{Customer, Instance};

        let instance = Instance::new(
            vec![
                Customer::depot(0.0, 0.0),
                Customer::new(1, 0.0, 1.0, 50),
                Customer::new(2, 1.0, 1.0, 60),
                Customer::new(3, 1.0, 0.0, 70),
            ],
            100,
            2,
        )
        .expect("valid instance");
        let (_, vars) = build_model(&instance, 0.0);

        let demands = [0, 50, 60, 70];
        let oracle = SeparationOracle::new(&demands, 100);
        let cuts = oracle.find_violations(&[edge(1, 2), edge(2, 3)]);
        // Component {1,2,3} has 3 internal pairs: (1,2), (1,3), (2,3).
        let expr = cuts[0].to_expr(&vars);
        assert_eq!(expr.terms().len(), 3);
    }

    #[test]
    fn test_oracle_idempotent() {
        let demands = [0, 50, 60, 70];
        let oracle = SeparationOracle::new(&demands, 100);
        let candidate = [edge(1, 2), edge(2, 3), edge(1, 3)];
        assert_eq!(
            oracle.find_violations(&candidate),
            oracle.find_violations(&candidate)
        );
    }

    fn arb_candidate() -> impl Strategy<Value = Vec<Edge>> {
        proptest::collection::vec((1usize..9, 1usize..9), 0..16).prop_map(|pairs| {
            pairs
                .into_iter()
                .filter_map(|(a, b)| Edge::new(a, b))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_cut_rhs_bounds(
            candidate in arb_candidate(),
            demands in proptest::collection::vec(0u32..150, 9),
            capacity in 1u32..200,
        ) {
            let oracle = SeparationOracle::new(&demands, capacity);
            for cut in oracle.find_violations(&candidate) {
                let size = cut.nodes().len() as f64;
                if cut.min_vehicles() >= 1 {
                    prop_assert!(cut.rhs() < size);
                }
                if u64::from(cut.min_vehicles()) <= cut.nodes().len() as u64 {
                    prop_assert!(cut.rhs() >= 0.0);
                }
            }
        }

        #[test]
        fn prop_empty_iff_all_components_feasible(
            candidate in arb_candidate(),
            demands in proptest::collection::vec(0u32..150, 9),
            capacity in 1u32..200,
        ) {
            let oracle = SeparationOracle::new(&demands, capacity);
            let cuts = oracle.find_violations(&candidate);
            let all_feasible = Graph::from_edges(&candidate)
                .connected_components()
                .into_iter()
                .all(|nodes| {
                    if nodes.len() < 3 {
                        return true;
                    }
                    let demand_sum: u64 =
                        nodes.iter().map(|&i| u64::from(demands[i])).sum();
                    let internal = candidate
                        .iter()
                        .filter(|e| nodes.contains(&e.lo()) && nodes.contains(&e.hi()))
                        .count();
                    internal < nodes.len() && demand_sum <= u64::from(capacity)
                });
            prop_assert_eq!(cuts.is_empty(), all_feasible);
        }

        #[test]
        fn prop_oracle_idempotent(
            candidate in arb_candidate(),
            demands in proptest::collection::vec(0u32..150, 9),
            capacity in 1u32..200,
        ) {
            let oracle = SeparationOracle::new(&demands, capacity);
            prop_assert_eq!(
                oracle.find_violations(&candidate),
                oracle.find_violations(&candidate)
            );
        }
    }
}
