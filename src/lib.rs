//! # cvrp-cuts
//!
//! Branch-and-cut solver for the Capacitated Vehicle Routing Problem under
//! per-scenario cost disruptions. The integer model starts as a pure
//! assignment relaxation (degree constraints only); capacity and
//! connectivity arrive during search as lazy rounded capacity cuts,
//! separated whenever the engine reports an integer-feasible candidate.
//! A simulation loop re-solves the model across many random disruption
//! scenarios and reports the mean objective.
//!
//! ## Modules
//!
//! - [`models`] — Problem data (Customer, Instance, Tour)
//! - [`costs`] — Symmetric travel cost matrix
//! - [`mip`] — Integer programming engine with lazy-constraint callbacks
//! - [`formulation`] — Edge variables and the relaxed CVRP model
//! - [`cuts`] — Connected components, separation oracle, callback adapter
//! - [`tours`] — Tour extraction from solved edge values
//! - [`simulation`] — Disruption scenario loop and aggregation
//!
//! ## Example
//!
//! ```
//! use cvrp_cuts::models::{Customer, Instance};
//! use cvrp_cuts::simulation::solve_scenario;
//!
//! let instance = Instance::new(
//!     vec![
//!         Customer::depot(0.0, 0.0),
//!         Customer::new(1, 0.0, 1.0, 50),
//!         Customer::new(2, 1.0, 1.0, 60),
//!         Customer::new(3, 1.0, 0.0, 70),
//!     ],
//!     100,
//!     2,
//! )
//! .unwrap();
//!
//! let (objective, tours) = solve_scenario(&instance, 0.0).unwrap();
//! assert_eq!(tours.len(), 2);
//! assert!(objective > 0.0);
//! ```

pub mod costs;
pub mod cuts;
pub mod formulation;
pub mod mip;
pub mod models;
pub mod simulation;
pub mod tours;
