//! Linear expressions and constraints.

/// Handle to an integer decision variable in a [`Model`](super::Model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(pub(crate) usize);

impl Var {
    /// Position of this variable in the model's declaration order.
    pub(crate) fn index(&self) -> usize {
        self.0
    }
}

/// A linear expression `Σ coeff · var`.
///
/// # Examples
///
/// ```
/// use cvrp_cuts::mip::{LinExpr, Model};
///
/// let mut model = Model::new("example");
/// let x = model.add_int_var(0, 1);
/// let y = model.add_int_var(0, 2);
///
/// let mut expr = LinExpr::new();
/// expr.add_term(x, 2.0);
/// expr.add_term(y, 1.0);
/// assert_eq!(expr.terms().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinExpr {
    terms: Vec<(Var, f64)>,
}

impl LinExpr {
    /// Creates an empty expression.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Appends `coeff · var` to the expression.
    pub fn add_term(&mut self, var: Var, coeff: f64) {
        self.terms.push((var, coeff));
    }

    /// The `(variable, coefficient)` terms in insertion order.
    pub fn terms(&self) -> &[(Var, f64)] {
        &self.terms
    }

    /// Evaluates the expression against a full assignment.
    pub(crate) fn value(&self, values: &[i64]) -> f64 {
        self.terms
            .iter()
            .map(|(var, coeff)| coeff * values[var.index()] as f64)
            .sum()
    }
}

/// Constraint sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// Left-hand side equals the right-hand side.
    Eq,
    /// Left-hand side is at most the right-hand side.
    Le,
}

/// A linear constraint `expr (==|<=) rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub(crate) expr: LinExpr,
    pub(crate) sense: Sense,
    pub(crate) rhs: f64,
}

impl Constraint {
    pub(crate) fn new(expr: LinExpr, sense: Sense, rhs: f64) -> Self {
        Self { expr, sense, rhs }
    }

    /// Returns `true` if the given full assignment satisfies this constraint.
    pub(crate) fn satisfied_by(&self, values: &[i64], eps: f64) -> bool {
        let lhs = self.expr.value(values);
        match self.sense {
            Sense::Eq => (lhs - self.rhs).abs() <= eps,
            Sense::Le => lhs <= self.rhs + eps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_value() {
        let mut expr = LinExpr::new();
        expr.add_term(Var(0), 2.0);
        expr.add_term(Var(2), -1.0);
        assert_eq!(expr.value(&[3, 99, 4]), 2.0);
    }

    #[test]
    fn test_expr_empty() {
        let expr = LinExpr::new();
        assert_eq!(expr.value(&[1, 2]), 0.0);
        assert!(expr.terms().is_empty());
    }

    #[test]
    fn test_constraint_eq() {
        let mut expr = LinExpr::new();
        expr.add_term(Var(0), 1.0);
        expr.add_term(Var(1), 1.0);
        let c = Constraint::new(expr, Sense::Eq, 2.0);
        assert!(c.satisfied_by(&[1, 1], 1e-6));
        assert!(!c.satisfied_by(&[1, 0], 1e-6));
        assert!(!c.satisfied_by(&[2, 1], 1e-6));
    }

    #[test]
    fn test_constraint_le() {
        let mut expr = LinExpr::new();
        expr.add_term(Var(0), 1.0);
        let c = Constraint::new(expr, Sense::Le, 1.0);
        assert!(c.satisfied_by(&[0], 1e-6));
        assert!(c.satisfied_by(&[1], 1e-6));
        assert!(!c.satisfied_by(&[2], 1e-6));
    }
}
