//! CVRP integer formulation: edge variables and degree constraints.

mod builder;
mod edge;

pub use builder::build_model;
pub use edge::{Edge, EdgeVars};
