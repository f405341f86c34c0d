//! Tour type.

use std::fmt;

/// An ordered vehicle tour starting and ending at the depot.
///
/// Tours compare lexicographically by their node sequence, which gives a
/// stable order when reporting the tours of a solution.
///
/// # Examples
///
/// ```
/// use cvrp_cuts::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 3, 0]);
/// assert_eq!(tour.customers(), &[2, 3]);
/// assert_eq!(tour.to_string(), "0 - 2 - 3 - 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a node sequence.
    ///
    /// The sequence is expected to start and end at the depot; this is not
    /// validated (the extractor guarantees it for feasible solutions).
    pub fn new(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    /// The full node sequence, including the depot at both ends.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// The customers visited, excluding the depot endpoints.
    pub fn customers(&self) -> &[usize] {
        if self.nodes.len() < 2 {
            &[]
        } else {
            &self.nodes[1..self.nodes.len() - 1]
        }
    }

    /// Number of customers visited.
    pub fn len(&self) -> usize {
        self.customers().len()
    }

    /// Returns `true` if the tour visits no customers.
    pub fn is_empty(&self) -> bool {
        self.customers().is_empty()
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for node in &self.nodes {
            if !first {
                write!(f, " - ")?;
            }
            write!(f, "{node}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_customers() {
        let tour = Tour::new(vec![0, 1, 4, 2, 0]);
        assert_eq!(tour.customers(), &[1, 4, 2]);
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
    }

    #[test]
    fn test_tour_display() {
        let tour = Tour::new(vec![0, 3, 1, 0]);
        assert_eq!(tour.to_string(), "0 - 3 - 1 - 0");
    }

    #[test]
    fn test_tour_ordering() {
        let a = Tour::new(vec![0, 1, 0]);
        let b = Tour::new(vec![0, 2, 0]);
        assert!(a < b);
        let mut tours = vec![b.clone(), a.clone()];
        tours.sort();
        assert_eq!(tours, vec![a, b]);
    }

    #[test]
    fn test_tour_degenerate() {
        let tour = Tour::new(vec![0]);
        assert_eq!(tour.customers(), &[] as &[usize]);
        assert!(tour.is_empty());
    }
}
