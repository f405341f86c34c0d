//! Customer type.

use serde::{Deserialize, Serialize};

/// A customer (or depot) in a routing problem.
///
/// Customer 0 is conventionally the depot. Customers have a location
/// (coordinates) and a non-negative demand; the depot's demand is zero.
///
/// # Examples
///
/// ```
/// use cvrp_cuts::models::Customer;
///
/// let depot = Customer::depot(35.0, 35.0);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.demand(), 0);
///
/// let c = Customer::new(1, 41.0, 49.0, 10);
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.demand(), 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    id: usize,
    x: f64,
    y: f64,
    demand: u32,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(id: usize, x: f64, y: f64, demand: u32) -> Self {
        Self { id, x, y, demand }
    }

    /// Creates a depot at the given coordinates (id=0, demand=0).
    pub fn depot(x: f64, y: f64) -> Self {
        Self::new(0, x, y, 0)
    }

    /// Customer ID (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Demand at this customer (units to deliver).
    pub fn demand(&self) -> u32 {
        self.demand
    }

    /// Euclidean distance to another customer.
    pub fn distance_to(&self, other: &Customer) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_new() {
        let c = Customer::new(1, 10.0, 20.0, 5);
        assert_eq!(c.id(), 1);
        assert_eq!(c.x(), 10.0);
        assert_eq!(c.y(), 20.0);
        assert_eq!(c.demand(), 5);
    }

    #[test]
    fn test_customer_depot() {
        let d = Customer::depot(35.0, 35.0);
        assert_eq!(d.id(), 0);
        assert_eq!(d.demand(), 0);
    }

    #[test]
    fn test_customer_distance() {
        let a = Customer::new(0, 0.0, 0.0, 0);
        let b = Customer::new(1, 3.0, 4.0, 0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_customer_distance_symmetric() {
        let a = Customer::new(0, 1.0, 2.0, 0);
        let b = Customer::new(1, 4.0, 6.0, 0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_customer_serde_roundtrip() {
        let c = Customer::new(2, 1.5, -2.5, 7);
        let json = serde_json::to_string(&c).expect("serialize");
        let back: Customer = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.id(), 2);
        assert_eq!(back.demand(), 7);
        assert!((back.x() - 1.5).abs() < 1e-10);
    }
}
