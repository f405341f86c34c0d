//! Integer programming engine with lazy-constraint callbacks.
//!
//! A small exact solver for bounded integer programs: declare integer
//! variables, linear `==`/`<=` constraints, and a minimizing objective,
//! then run a depth-first branch-and-bound. A [`Callback`] bound to the
//! solve is invoked at every improving integer-feasible candidate and may
//! submit lazy constraints, which reject the current candidate when
//! violated and are enforced against all subsequent candidates. The
//! routing core consumes only this interface; it does not depend on the
//! search internals.

mod expr;
mod model;
mod solve;

pub use expr::{LinExpr, Sense, Var};
pub use model::{Model, SolveError, SolverConfig};
pub use solve::{Callback, CallbackContext, CallbackEvent, Solution};
