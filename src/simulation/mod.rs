//! Disruption-scenario simulation.
//!
//! Repeatedly re-solves the instance under uniformly disrupted edge costs
//! and aggregates the per-scenario objective values.

mod runner;

pub use runner::{
    solve_scenario, DisruptionSimulation, ScenarioResult, SimulationConfig, SimulationReport,
};
