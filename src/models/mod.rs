//! Domain model types for the capacitated vehicle routing problem.
//!
//! Provides the immutable problem data: customers with demands, the
//! validated instance (costs, capacity, fleet), and the tour type used
//! for reporting solved routes.

mod customer;
mod instance;
mod tour;

pub use customer::Customer;
pub use instance::{Instance, InstanceError};
pub use tour::Tour;
