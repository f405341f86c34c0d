//! Assignment-relaxation model builder.

use crate::mip::{LinExpr, Model, Sense};
use crate::models::Instance;

use super::{Edge, EdgeVars};

/// Builds the relaxed CVRP integer model for one scenario.
///
/// One integer variable per node pair `i < j`: depot-incident edges get
/// upper bound 2 (a route may leave and return over the same edge), all
/// others upper bound 1. The depot's degree is fixed to `2m` and every
/// customer's degree to 2. The objective adds the scenario's disruption
/// uniformly to every edge cost; pass `0.0` for the undisrupted problem.
///
/// Capacity and connectivity are intentionally not modeled here — the
/// separation oracle supplies them as lazy cuts during search, keeping the
/// initial relaxation free of the exponential subtour family.
///
/// # Examples
///
/// ```
/// use cvrp_cuts::formulation::build_model;
/// use cvrp_cuts::models::{Customer, Instance};
///
/// let instance = Instance::new(
///     vec![
///         Customer::depot(0.0, 0.0),
///         Customer::new(1, 0.0, 1.0, 50),
///         Customer::new(2, 1.0, 0.0, 60),
///     ],
///     100,
///     2,
/// )
/// .unwrap();
/// let (model, vars) = build_model(&instance, 0.0);
/// assert_eq!(model.num_vars(), 3);
/// assert_eq!(vars.len(), 3);
/// ```
pub fn build_model(instance: &Instance, disruption: f64) -> (Model, EdgeVars) {
    let n = instance.num_nodes();
    let depot = instance.depot();
    let mut model = Model::new("cvrp");
    let mut vars = EdgeVars::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let ub = if i == depot { 2 } else { 1 };
            let var = model.add_int_var(0, ub);
            if let Some(edge) = Edge::new(i, j) {
                vars.insert(edge, var);
            }
        }
    }

    let mut depot_degree = LinExpr::new();
    for (edge, var) in vars.iter() {
        if edge.touches(depot) {
            depot_degree.add_term(var, 1.0);
        }
    }
    model.add_constr(
        depot_degree,
        Sense::Eq,
        2.0 * f64::from(instance.num_vehicles()),
    );

    for i in 0..n {
        if i == depot {
            continue;
        }
        let mut degree = LinExpr::new();
        for (edge, var) in vars.iter() {
            if edge.touches(i) {
                degree.add_term(var, 1.0);
            }
        }
        model.add_constr(degree, Sense::Eq, 2.0);
    }

    let mut objective = LinExpr::new();
    for (edge, var) in vars.iter() {
        objective.add_term(var, disruption + instance.cost(edge.lo(), edge.hi()));
    }
    model.set_objective(objective);

    (model, vars)
}
