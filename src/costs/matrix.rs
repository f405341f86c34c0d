//! Dense cost matrix.

use crate::models::Customer;

/// A dense n×n travel cost matrix stored in row-major order.
///
/// Supports Euclidean construction from customer coordinates and explicit
/// cost specification. Costs are symmetric by construction when built from
/// coordinates; explicit data is validated by [`Instance`](crate::models::Instance).
///
/// # Examples
///
/// ```
/// use cvrp_cuts::models::Customer;
/// use cvrp_cuts::costs::CostMatrix;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 3.0, 4.0, 10),
///     Customer::new(2, 6.0, 8.0, 20),
/// ];
/// let cm = CostMatrix::from_customers(&customers);
/// assert!((cm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(cm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean cost matrix from customer coordinates.
    pub fn from_customers(customers: &[Customer]) -> Self {
        let n = customers.len();
        let mut cm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = customers[i].distance_to(&customers[j]);
                cm.set(i, j, d);
                cm.set(j, i, d);
            }
        }
        cm
    }

    /// Creates a cost matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the travel cost between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel cost between locations `from` and `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every entry is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.data.iter().all(|c| c.is_finite() && *c >= 0.0)
    }
}
