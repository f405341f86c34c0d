//! Walk-based tour reconstruction.

use std::collections::BTreeMap;

use crate::formulation::{Edge, EdgeVars};
use crate::mip::Solution;
use crate::models::Tour;

/// Reconstructs the vehicle tours from a solved edge assignment.
///
/// Active edges (value > 0.5) form a multiset: a depot edge at value 2
/// represents an out-and-back route and is consumed twice. Starting from
/// each unconsumed depot-incident edge, the walk repeatedly follows an
/// unconsumed edge out of the current node until it returns to the depot;
/// every traversal consumes one unit of the edge.
///
/// For a feasible solution the degree constraints guarantee each customer
/// appears in exactly one tour. A malformed assignment (possible when the
/// engine stopped without an optimality certificate) is not detected here;
/// a walk that dead-ends simply terminates its tour early, and the caller
/// owns any validation.
///
/// Tours are returned sorted by node sequence.
pub fn extract_tours(solution: &Solution, vars: &EdgeVars, depot: usize) -> Vec<Tour> {
    let mut remaining: BTreeMap<Edge, i64> = BTreeMap::new();
    for (edge, var) in vars.iter() {
        let value = solution.value(var);
        if value > 0.5 {
            remaining.insert(edge, value.round() as i64);
        }
    }

    let mut tours = Vec::new();
    while let Some(start) = next_unconsumed(&remaining, depot) {
        consume(&mut remaining, start);
        let mut nodes = vec![depot, start.other(depot)];
        loop {
            let current = match nodes.last() {
                Some(&node) if node != depot => node,
                _ => break,
            };
            match next_unconsumed(&remaining, current) {
                Some(edge) => {
                    consume(&mut remaining, edge);
                    nodes.push(edge.other(current));
                }
                // Dead end: malformed input, leave the partial walk as-is.
                None => break,
            }
        }
        tours.push(Tour::new(nodes));
    }
    tours.sort();
    tours
}

fn next_unconsumed(remaining: &BTreeMap<Edge, i64>, node: usize) -> Option<Edge> {
    remaining
        .iter()
        .find(|(edge, count)| **count > 0 && edge.touches(node))
        .map(|(edge, _)| *edge)
}

fn consume(remaining: &mut BTreeMap<Edge, i64>, edge: Edge) {
    if let Some(count) = remaining.get_mut(&edge) {
        *count -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulation::build_model;
    use crate::models::{Customer, Instance};

    fn square_instance() -> Instance {
        Instance::new(
            vec![
                Customer::depot(0.0, 0.0),
                Customer::new(1, 0.0, 1.0, 50),
                Customer::new(2, 1.0, 1.0, 60),
                Customer::new(3, 1.0, 0.0, 70),
            ],
            100,
            2,
        )
        .expect("valid instance")
    }

    fn solution_with(instance: &Instance, active: &[(usize, usize, i64)]) -> (Solution, EdgeVars) {
        let (model, vars) = build_model(instance, 0.0);
        let mut values = vec![0; model.num_vars()];
        for &(a, b, v) in active {
            let edge = Edge::new(a, b).expect("distinct");
            let var = vars.var(edge).expect("edge variable");
            values[var.index()] = v;
        }
        (Solution::new(values, 0.0), vars)
    }

    #[test]
    fn test_extract_two_tours() {
        let instance = square_instance();
        let (solution, vars) =
            solution_with(&instance, &[(0, 1, 1), (1, 2, 1), (0, 2, 1), (0, 3, 2)]);
        let tours = extract_tours(&solution, &vars, 0);

        assert_eq!(tours.len(), 2);
        assert_eq!(tours[0].nodes(), &[0, 1, 2, 0]);
        assert_eq!(tours[1].nodes(), &[0, 3, 0]);
    }

    #[test]
    fn test_extract_out_and_back_consumes_twice() {
        // x[0,1] = 2 is one tour 0-1-0, not two.
        let instance = square_instance();
        let (solution, vars) = solution_with(&instance, &[(0, 1, 2)]);
        let tours = extract_tours(&solution, &vars, 0);

        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].nodes(), &[0, 1, 0]);
    }

    #[test]
    fn test_extract_covers_each_customer_once() {
        let instance = square_instance();
        let (solution, vars) =
            solution_with(&instance, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 1)]);
        let tours = extract_tours(&solution, &vars, 0);

        assert_eq!(tours.len(), 1);
        let mut visited: Vec<usize> = tours.iter().flat_map(|t| t.customers().to_vec()).collect();
        visited.sort_unstable();
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[test]
    fn test_extract_empty_solution() {
        let instance = square_instance();
        let (solution, vars) = solution_with(&instance, &[]);
        assert!(extract_tours(&solution, &vars, 0).is_empty());
    }

    #[test]
    fn test_extract_sorted_output() {
        let instance = square_instance();
        let (solution, vars) = solution_with(&instance, &[(0, 3, 2), (0, 1, 2), (0, 2, 2)]);
        let tours = extract_tours(&solution, &vars, 0);
        assert_eq!(tours.len(), 3);
        assert!(tours[0] < tours[1] && tours[1] < tours[2]);
    }
}
