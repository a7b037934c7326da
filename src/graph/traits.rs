use std::fmt::{Debug, Display};
use std::hash::Hash;

use indexmap::IndexMap;
use num_traits::Zero;
use ordered_float::OrderedFloat;

use crate::Result;

/// Numeric edge weight accepted by the graph and the solver
pub trait Weight: Copy + PartialOrd + Zero + Debug + Display {
    /// Adds two costs, `None` when the sum does not fit in the type.
    /// Floats never overflow this way and always return `Some`.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_weight!(f32, f64, OrderedFloat<f32>, OrderedFloat<f64>);

/// Node identifier accepted by the graph and the solver
pub trait NodeId: Clone + Eq + Hash + Debug + Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug + Display {}

/// Trait representing an immutable weighted directed graph
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the node exists in the graph
    fn contains(&self, node: &N) -> bool;

    /// Returns the outgoing neighbor map of a node.
    ///
    /// Fails with [`crate::Error::UnknownNode`] when the node is not part of the graph.
    fn neighbors(&self, node: &N) -> Result<&IndexMap<N, W>>;

    /// Returns an iterator over all nodes, in insertion order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Result<Option<W>> {
        Ok(self.neighbors(from)?.get(to).copied())
    }

    /// Returns true if there's an edge between the two nodes.
    ///
    /// Fails with [`crate::Error::UnknownNode`] when `from` is not part of the graph.
    fn has_edge(&self, from: &N, to: &N) -> Result<bool> {
        Ok(self.edge_weight(from, to)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_weights_report_overflow() {
        assert_eq!(Weight::checked_add(u32::MAX, 1), None);
        assert_eq!(Weight::checked_add(40u32, 2), Some(42));
        assert_eq!(Weight::checked_add(i64::MAX, 0), Some(i64::MAX));
    }

    #[test]
    fn test_float_weights_always_add() {
        assert_eq!(Weight::checked_add(0.5f64, 0.25), Some(0.75));
        assert_eq!(
            Weight::checked_add(OrderedFloat(f64::MAX), OrderedFloat(f64::MAX)),
            Some(OrderedFloat(f64::INFINITY))
        );
    }
}
