//! Lazy cut separation for capacity and connectivity.
//!
//! - [`Graph`] — undirected candidate graph and connected components
//! - [`SeparationOracle`] — detects violating components and derives
//!   rounded capacity cuts
//! - [`CutAdapter`] — binds the oracle to the engine's callback seam

mod adapter;
mod components;
mod oracle;

pub use adapter::CutAdapter;
pub use components::Graph;
pub use oracle::{Cut, SeparationOracle};
