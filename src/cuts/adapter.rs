//! Callback adapter between the solver engine and the separation oracle.

use tracing::debug;

use crate::formulation::EdgeVars;
use crate::mip::{Callback, CallbackContext, CallbackEvent, Sense};

use super::SeparationOracle;

/// Binds the separation oracle to the engine's callback seam.
///
/// On each integer-feasible candidate the adapter reads the candidate's
/// edge values, drops depot-incident edges (the oracle reasons only about
/// non-depot structure), runs separation, and submits every derived cut as
/// a lazy constraint before returning. Any other callback event is a no-op.
///
/// The adapter owns no state beyond references to the oracle and the
/// edge-variable map, so it is safe to invoke from whichever thread the
/// engine delivers callbacks on.
#[derive(Debug)]
pub struct CutAdapter<'a> {
    oracle: &'a SeparationOracle<'a>,
    vars: &'a EdgeVars,
    depot: usize,
}

impl<'a> CutAdapter<'a> {
    /// Creates an adapter for one model's variables.
    pub fn new(oracle: &'a SeparationOracle<'a>, vars: &'a EdgeVars, depot: usize) -> Self {
        Self {
            oracle,
            vars,
            depot,
        }
    }
}

impl Callback for CutAdapter<'_> {
    fn on_event(&mut self, ctx: &mut CallbackContext<'_>) {
        if ctx.event() != CallbackEvent::IntegerCandidate {
            return;
        }
        let candidate: Vec<_> = self
            .vars
            .iter()
            .filter(|(edge, var)| !edge.touches(self.depot) && ctx.value(*var) > 0.5)
            .map(|(edge, _)| edge)
            .collect();
        for cut in self.oracle.find_violations(&candidate) {
            debug!(component = ?cut.nodes(), rhs = cut.rhs(), "adding rounded capacity cut");
            let rhs = cut.rhs();
            ctx.add_lazy(cut.to_expr(self.vars), Sense::Le, rhs);
        }
    }
}
