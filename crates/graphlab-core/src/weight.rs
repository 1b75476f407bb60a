//! Edge weight strategies
//!
//! The adjacency builder asks a [`WeightFn`] for the cost of every edge it
//! creates. Weights must be finite and non-negative.

use crate::model::Node;

/// Computes the weight of an edge from its two endpoint nodes
pub trait WeightFn {
    fn weight(&self, a: &Node, b: &Node) -> f64;
}

impl<F> WeightFn for F
where
    F: Fn(&Node, &Node) -> f64,
{
    fn weight(&self, a: &Node, b: &Node) -> f64 {
        self(a, b)
    }
}

/// Every edge costs 1.0
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitWeight;

impl WeightFn for UnitWeight {
    fn weight(&self, _a: &Node, _b: &Node) -> f64 {
        1.0
    }
}

/// Every edge costs the same configured amount
#[derive(Debug, Clone, Copy)]
pub struct ConstantWeight(pub f64);

impl WeightFn for ConstantWeight {
    fn weight(&self, _a: &Node, _b: &Node) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies() {
        let a = Node::new(1);
        let b = Node::new(2).with_activity(0.5);
        assert_eq!(UnitWeight.weight(&a, &b), 1.0);
        assert_eq!(ConstantWeight(2.5).weight(&a, &b), 2.5);

        let by_activity = |x: &Node, y: &Node| {
            1.0 + (x.activity.unwrap_or(0.0) - y.activity.unwrap_or(0.0)).abs()
        };
        assert_eq!(by_activity.weight(&a, &b), 1.5);
    }
}
