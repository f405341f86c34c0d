//! Problem instance: customers, demands, costs, capacity, fleet.

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

use super::Customer;
use crate::costs::CostMatrix;

/// Error raised when instance data is malformed.
#[derive(Debug, Error)]
pub enum InstanceError {
    /// Fewer than two nodes (a depot and at least one customer are required).
    #[error("instance needs a depot and at least one customer")]
    TooFewNodes,
    /// A customer's id does not match its position in the node list.
    #[error("customer id {id} does not match its position {index}")]
    IdMismatch {
        /// Declared customer id.
        id: usize,
        /// Position in the customer list.
        index: usize,
    },
    /// Vehicle capacity is zero.
    #[error("vehicle capacity must be positive")]
    ZeroCapacity,
    /// Fleet size is zero.
    #[error("fleet size must be positive")]
    ZeroFleet,
    /// Explicit cost matrix has the wrong dimensions.
    #[error("cost matrix size {got} does not match node count {expected}")]
    CostShape {
        /// Size of the supplied matrix.
        got: usize,
        /// Number of nodes in the instance.
        expected: usize,
    },
    /// Explicit cost matrix is not symmetric.
    #[error("cost matrix is not symmetric")]
    AsymmetricCosts,
    /// A cost entry is negative or non-finite.
    #[error("costs must be non-negative and finite")]
    InvalidCost,
    /// Instance JSON could not be parsed.
    #[error("failed to parse instance JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An immutable CVRP instance.
///
/// Node 0 is the depot; nodes `1..=n` are customers. The instance owns the
/// symmetric travel cost matrix, the per-node demand vector (depot demand 0),
/// the vehicle capacity `Q` and the fleet size `m`. All fields are fixed for
/// the lifetime of a run; per-scenario cost disruptions are applied when the
/// integer model is built, not here.
///
/// # Examples
///
/// ```
/// use cvrp_cuts::models::{Customer, Instance};
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 0.0, 1.0, 50),
///     Customer::new(2, 1.0, 1.0, 60),
/// ];
/// let instance = Instance::new(customers, 100, 2).unwrap();
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.demand(1), 50);
/// assert!((instance.cost(0, 1) - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    customers: Vec<Customer>,
    demands: Vec<u32>,
    costs: CostMatrix,
    capacity: u32,
    num_vehicles: u32,
}

#[derive(Deserialize)]
struct RawInstance {
    customers: Vec<Customer>,
    capacity: u32,
    vehicles: u32,
    costs: Option<Vec<Vec<f64>>>,
}

impl Instance {
    /// Creates an instance with Euclidean costs derived from coordinates.
    pub fn new(
        customers: Vec<Customer>,
        capacity: u32,
        num_vehicles: u32,
    ) -> Result<Self, InstanceError> {
        let costs = CostMatrix::from_customers(&customers);
        Self::with_costs(customers, costs, capacity, num_vehicles)
    }

    /// Creates an instance with an explicit cost matrix.
    ///
    /// Validates node count, id/position agreement, capacity, fleet size,
    /// matrix shape, symmetry, and cost validity. A single customer demand
    /// exceeding the capacity is deliberately not rejected here; it surfaces
    /// as solver infeasibility.
    pub fn with_costs(
        customers: Vec<Customer>,
        costs: CostMatrix,
        capacity: u32,
        num_vehicles: u32,
    ) -> Result<Self, InstanceError> {
        if customers.len() < 2 {
            return Err(InstanceError::TooFewNodes);
        }
        for (index, c) in customers.iter().enumerate() {
            if c.id() != index {
                return Err(InstanceError::IdMismatch { id: c.id(), index });
            }
        }
        if capacity == 0 {
            return Err(InstanceError::ZeroCapacity);
        }
        if num_vehicles == 0 {
            return Err(InstanceError::ZeroFleet);
        }
        if costs.size() != customers.len() {
            return Err(InstanceError::CostShape {
                got: costs.size(),
                expected: customers.len(),
            });
        }
        if !costs.is_valid() {
            return Err(InstanceError::InvalidCost);
        }
        if !costs.is_symmetric(1e-9) {
            return Err(InstanceError::AsymmetricCosts);
        }
        let demands = customers.iter().map(|c| c.demand()).collect();
        Ok(Self {
            customers,
            demands,
            costs,
            capacity,
            num_vehicles,
        })
    }

    /// Generates a random instance with customers placed uniformly in the
    /// unit square and demands drawn from `10..=20`.
    pub fn random<R: Rng>(
        num_customers: usize,
        capacity: u32,
        num_vehicles: u32,
        rng: &mut R,
    ) -> Result<Self, InstanceError> {
        let mut customers = Vec::with_capacity(num_customers + 1);
        customers.push(Customer::depot(
            rng.random_range(0.0..1.0),
            rng.random_range(0.0..1.0),
        ));
        for id in 1..=num_customers {
            customers.push(Customer::new(
                id,
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
                rng.random_range(10..=20u32),
            ));
        }
        Self::new(customers, capacity, num_vehicles)
    }

    /// Parses an instance from JSON.
    ///
    /// Expected shape:
    ///
    /// ```json
    /// {
    ///   "customers": [{"id": 0, "x": 0.0, "y": 0.0, "demand": 0}, ...],
    ///   "capacity": 100,
    ///   "vehicles": 2,
    ///   "costs": [[0.0, 1.0], [1.0, 0.0]]
    /// }
    /// ```
    ///
    /// The `costs` field is optional; when absent, Euclidean costs are
    /// computed from the customer coordinates.
    pub fn from_json(json: &str) -> Result<Self, InstanceError> {
        let raw: RawInstance = serde_json::from_str(json)?;
        match raw.costs {
            Some(rows) => {
                let size = rows.len();
                let expected = raw.customers.len();
                let data: Vec<f64> = rows.into_iter().flatten().collect();
                let costs = CostMatrix::from_data(size, data).ok_or(InstanceError::CostShape {
                    got: size,
                    expected,
                })?;
                Self::with_costs(raw.customers, costs, raw.capacity, raw.vehicles)
            }
            None => Self::new(raw.customers, raw.capacity, raw.vehicles),
        }
    }

    /// All nodes (index 0 = depot).
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Per-node demand vector, indexed by node id (depot entry is 0).
    pub fn demands(&self) -> &[u32] {
        &self.demands
    }

    /// Total number of nodes including the depot.
    pub fn num_nodes(&self) -> usize {
        self.customers.len()
    }

    /// Number of customers (excluding depot).
    pub fn num_customers(&self) -> usize {
        self.customers.len() - 1
    }

    /// The depot node id.
    pub fn depot(&self) -> usize {
        0
    }

    /// Demand of the given node.
    pub fn demand(&self, node: usize) -> u32 {
        self.demands[node]
    }

    /// Travel cost between two nodes.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs.get(from, to)
    }

    /// Vehicle capacity `Q`.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Fleet size `m`.
    pub fn num_vehicles(&self) -> u32 {
        self.num_vehicles
    }
}
