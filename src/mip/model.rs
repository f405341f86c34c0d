//! Integer model and solver configuration.

use thiserror::Error;

use super::expr::{Constraint, LinExpr, Sense, Var};

/// Error raised by [`Model::solve`](super::Model::solve).
#[derive(Debug, Error)]
pub enum SolveError {
    /// No assignment satisfies the constraints.
    #[error("model is infeasible")]
    Infeasible,
    /// The objective is unbounded below.
    #[error("model is unbounded")]
    Unbounded,
    /// The solver configuration violates a precondition.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Solver flags that must be set correctly before a branch-and-cut solve.
///
/// Lazy cuts are only sound when the engine re-checks them against every
/// subsequent candidate (`lazy_constraints`) and refrains from dual
/// reductions that could prune branches invalidated by constraints added
/// later (`dual_reductions` off). [`Model::solve`](super::Model::solve)
/// fails fast when a callback is supplied with either flag wrong.
///
/// # Examples
///
/// ```
/// use cvrp_cuts::mip::SolverConfig;
///
/// let config = SolverConfig::lazy_cuts();
/// assert!(config.lazy_constraints);
/// assert!(!config.dual_reductions);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Re-check callback-submitted constraints against all later candidates.
    pub lazy_constraints: bool,
    /// Allow reductions that assume the constraint set is final.
    pub dual_reductions: bool,
}

impl SolverConfig {
    /// Configuration for a plain solve without callbacks.
    pub fn new() -> Self {
        Self {
            lazy_constraints: false,
            dual_reductions: true,
        }
    }

    /// Configuration required for a solve with a cut callback.
    pub fn lazy_cuts() -> Self {
        Self {
            lazy_constraints: true,
            dual_reductions: false,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Bounds {
    pub(crate) lb: i64,
    pub(crate) ub: i64,
}

/// An integer program: bounded integer variables, linear constraints, and a
/// minimizing linear objective.
///
/// Connectivity and capacity constraints for the routing formulation are
/// deliberately absent from the built model; they arrive during search as
/// lazy constraints via the callback (see [`Callback`](super::Callback)).
///
/// # Examples
///
/// ```
/// use cvrp_cuts::mip::{LinExpr, Model, Sense, SolverConfig};
///
/// let mut model = Model::new("tiny");
/// let x = model.add_int_var(0, 1);
/// let y = model.add_int_var(0, 2);
///
/// let mut degree = LinExpr::new();
/// degree.add_term(x, 1.0);
/// degree.add_term(y, 1.0);
/// model.add_constr(degree, Sense::Eq, 2.0);
///
/// let mut obj = LinExpr::new();
/// obj.add_term(x, 3.0);
/// obj.add_term(y, 1.0);
/// model.set_objective(obj);
///
/// let solution = model.solve(&SolverConfig::new(), None).unwrap();
/// assert_eq!(solution.value(x), 0.0);
/// assert_eq!(solution.value(y), 2.0);
/// assert!((solution.objective() - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct Model {
    name: String,
    bounds: Vec<Bounds>,
    constraints: Vec<Constraint>,
    objective: LinExpr,
}

impl Model {
    /// Creates an empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
            constraints: Vec::new(),
            objective: LinExpr::new(),
        }
    }

    /// Model name (used in log output).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an integer variable with inclusive bounds `lb..=ub`.
    pub fn add_int_var(&mut self, lb: i64, ub: i64) -> Var {
        debug_assert!(lb <= ub, "variable bounds must satisfy lb <= ub");
        let var = Var(self.bounds.len());
        self.bounds.push(Bounds { lb, ub });
        var
    }

    /// Adds the linear constraint `expr (==|<=) rhs`.
    pub fn add_constr(&mut self, expr: LinExpr, sense: Sense, rhs: f64) {
        self.constraints.push(Constraint::new(expr, sense, rhs));
    }

    /// Sets the minimization objective.
    pub fn set_objective(&mut self, expr: LinExpr) {
        self.objective = expr;
    }

    /// Number of variables.
    pub fn num_vars(&self) -> usize {
        self.bounds.len()
    }

    /// Number of (non-lazy) constraints.
    pub fn num_constrs(&self) -> usize {
        self.constraints.len()
    }

    pub(crate) fn var_bounds(&self, var: Var) -> Bounds {
        self.bounds[var.index()]
    }

    pub(crate) fn all_bounds(&self) -> &[Bounds] {
        &self.bounds
    }

    pub(crate) fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub(crate) fn objective(&self) -> &LinExpr {
        &self.objective
    }
}
