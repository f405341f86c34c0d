//! Branch-and-bound search with lazy-constraint callbacks.

use tracing::trace;

use super::expr::{Constraint, LinExpr, Sense, Var};
use super::model::{Model, SolveError, SolverConfig};

const EPS: f64 = 1e-6;

/// The search event a callback is invoked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackEvent {
    /// An integer-feasible candidate was found; its values can be queried
    /// and lazy constraints may be submitted.
    IntegerCandidate,
    /// A node relaxation was processed; candidate values are unavailable
    /// and submissions are ignored. Callbacks should treat this as a no-op.
    Relaxation,
}

/// Context handed to a [`Callback`] for one invocation.
///
/// Exposes the candidate's variable values and accepts lazy constraints,
/// which the engine enforces against this and every subsequent candidate.
pub struct CallbackContext<'a> {
    event: CallbackEvent,
    values: &'a [i64],
    pending: &'a mut Vec<Constraint>,
}

impl<'a> CallbackContext<'a> {
    pub(crate) fn new(
        event: CallbackEvent,
        values: &'a [i64],
        pending: &'a mut Vec<Constraint>,
    ) -> Self {
        Self {
            event,
            values,
            pending,
        }
    }

    /// The event this invocation was fired for.
    pub fn event(&self) -> CallbackEvent {
        self.event
    }

    /// The candidate value of a variable.
    pub fn value(&self, var: Var) -> f64 {
        self.values[var.index()] as f64
    }

    /// Submits `expr (==|<=) rhs` as a lazy constraint.
    ///
    /// The constraint takes effect when the callback returns: the current
    /// candidate is rejected if it violates the constraint, and all later
    /// candidates are checked against it. Lazy constraints are never
    /// retracted.
    pub fn add_lazy(&mut self, expr: LinExpr, sense: Sense, rhs: f64) {
        self.pending.push(Constraint::new(expr, sense, rhs));
    }
}

/// A solver callback, invoked during search.
///
/// Implementations must only read candidate values and submit cuts through
/// the supplied context; they are invoked from whichever thread runs the
/// search and must not rely on shared mutable state.
pub trait Callback {
    /// Handles one search event.
    fn on_event(&mut self, ctx: &mut CallbackContext<'_>);
}

/// A solved assignment with its objective value.
#[derive(Debug, Clone)]
pub struct Solution {
    values: Vec<i64>,
    objective: f64,
}

impl Solution {
    pub(crate) fn new(values: Vec<i64>, objective: f64) -> Self {
        Self { values, objective }
    }

    /// The solved value of a variable.
    pub fn value(&self, var: Var) -> f64 {
        self.values[var.index()] as f64
    }

    /// The objective value.
    pub fn objective(&self) -> f64 {
        self.objective
    }
}

impl Model {
    /// Solves the model by exhaustive depth-first branch-and-bound.
    ///
    /// Variables are branched in declaration order, values low to high.
    /// Subtrees are pruned when the objective bound cannot beat the
    /// incumbent or when a constraint's attainable interval excludes its
    /// right-hand side. With a callback supplied, each improving
    /// integer-feasible candidate triggers a
    /// [`CallbackEvent::IntegerCandidate`] invocation before it may become
    /// the incumbent; a candidate violating a constraint submitted during
    /// its own callback is discarded and the search continues.
    ///
    /// # Errors
    ///
    /// [`SolveError::InvalidConfig`] if a callback is supplied without
    /// `lazy_constraints` enabled or with `dual_reductions` enabled;
    /// [`SolveError::Infeasible`] if no assignment satisfies all
    /// constraints (including lazy ones).
    pub fn solve(
        &self,
        config: &SolverConfig,
        callback: Option<&mut dyn Callback>,
    ) -> Result<Solution, SolveError> {
        if callback.is_some() {
            if !config.lazy_constraints {
                return Err(SolveError::InvalidConfig(
                    "callback supplied but lazy constraints are disabled",
                ));
            }
            if config.dual_reductions {
                return Err(SolveError::InvalidConfig(
                    "dual reductions must be disabled when lazy constraints are enabled",
                ));
            }
        }

        let mut search = Search {
            model: self,
            lazy: Vec::new(),
            incumbent: None,
            callback,
        };
        let mut values = Vec::with_capacity(self.num_vars());
        search.dfs(&mut values);

        match search.incumbent {
            Some((objective, values)) => Ok(Solution::new(values, objective)),
            None => Err(SolveError::Infeasible),
        }
    }
}

struct Search<'a, 'b> {
    model: &'a Model,
    lazy: Vec<Constraint>,
    incumbent: Option<(f64, Vec<i64>)>,
    callback: Option<&'b mut dyn Callback>,
}

impl Search<'_, '_> {
    fn dfs(&mut self, values: &mut Vec<i64>) {
        if values.len() == self.model.num_vars() {
            self.on_leaf(values);
            return;
        }
        if self.pruned(values) {
            return;
        }
        let bounds = self.model.all_bounds()[values.len()];
        for v in bounds.lb..=bounds.ub {
            values.push(v);
            self.dfs(values);
            values.pop();
        }
    }

    /// Returns `true` if no completion of the prefix can beat the incumbent
    /// and satisfy all constraints.
    fn pruned(&self, prefix: &[i64]) -> bool {
        if let Some((best, _)) = &self.incumbent {
            let (obj_min, _) = self.interval(self.model.objective(), prefix);
            if obj_min >= best - EPS {
                return true;
            }
        }
        for constraint in self.model.constraints().iter().chain(self.lazy.iter()) {
            let (min, max) = self.interval(&constraint.expr, prefix);
            let excluded = match constraint.sense {
                Sense::Eq => min > constraint.rhs + EPS || max < constraint.rhs - EPS,
                Sense::Le => min > constraint.rhs + EPS,
            };
            if excluded {
                return true;
            }
        }
        false
    }

    /// Attainable `(min, max)` of an expression given an assigned prefix.
    fn interval(&self, expr: &LinExpr, prefix: &[i64]) -> (f64, f64) {
        let mut min = 0.0;
        let mut max = 0.0;
        for (var, coeff) in expr.terms() {
            if var.index() < prefix.len() {
                let fixed = coeff * prefix[var.index()] as f64;
                min += fixed;
                max += fixed;
            } else {
                let b = self.model.var_bounds(*var);
                let lo = coeff * b.lb as f64;
                let hi = coeff * b.ub as f64;
                min += lo.min(hi);
                max += lo.max(hi);
            }
        }
        (min, max)
    }

    fn on_leaf(&mut self, values: &[i64]) {
        let all_satisfied = self
            .model
            .constraints()
            .iter()
            .chain(self.lazy.iter())
            .all(|c| c.satisfied_by(values, EPS));
        if !all_satisfied {
            return;
        }
        let objective = self.model.objective().value(values);
        if let Some((best, _)) = &self.incumbent {
            if objective >= best - EPS {
                return;
            }
        }
        if let Some(cb) = self.callback.as_mut() {
            let mut pending = Vec::new();
            let mut ctx = CallbackContext::new(CallbackEvent::IntegerCandidate, values, &mut pending);
            cb.on_event(&mut ctx);
            let rejected = pending.iter().any(|c| !c.satisfied_by(values, EPS));
            self.lazy.extend(pending);
            if rejected {
                return;
            }
        }
        trace!(objective, "new incumbent");
        self.incumbent = Some((objective, values.to_vec()));
    }
}
