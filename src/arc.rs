use crate::error::Error;
use crate::unit::Unit;

/// A directed arc in the flow network.
///
/// Endpoints, capacity and unit cost are fixed at construction; only the
/// flow mutates while a solve runs. Flow already placed on the arc can be
/// pushed back by cancellation, which is how the residual graph exposes the
/// reverse direction at negated cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arc<Int> {
    tail: usize,
    head: usize,
    capacity: Int,
    unit_cost: Int,
    flow: Int,
}

impl<Int: Unit> Arc<Int> {
    pub fn new(tail: usize, head: usize, capacity: Int, unit_cost: Int) -> Result<Self, Error> {
        if capacity < Int::zero() {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self {
            tail,
            head,
            capacity,
            unit_cost,
            flow: Int::zero(),
        })
    }

    pub fn tail(&self) -> usize {
        self.tail
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn capacity(&self) -> Int {
        self.capacity
    }

    pub fn unit_cost(&self) -> Int {
        self.unit_cost
    }

    pub fn flow(&self) -> Int {
        self.flow
    }

    /// Capacity still available in the stored direction.
    pub fn forward_residual_capacity(&self) -> Int {
        self.capacity - self.flow
    }

    /// Flow that can be pushed back against the stored direction.
    pub fn reverse_residual_capacity(&self) -> Int {
        self.flow
    }

    pub fn forward_residual_cost(&self) -> Int {
        self.unit_cost
    }

    /// Cost of undoing one unit of flow.
    pub fn reverse_residual_cost(&self) -> Int {
        -self.unit_cost
    }

    /// Adds `delta` units of flow. The graph bounds deltas with the residual
    /// queries so the flow stays within `[0, capacity]`.
    pub(crate) fn augment(&mut self, delta: Int) {
        self.flow += delta;
    }

    /// Removes `delta` units of flow.
    pub(crate) fn cancel(&mut self, delta: Int) {
        self.flow -= delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_queries_track_flow() {
        let mut arc = Arc::<i64>::new(0, 1, 10, 3).unwrap();
        assert_eq!(arc.forward_residual_capacity(), 10);
        assert_eq!(arc.reverse_residual_capacity(), 0);

        arc.augment(4);
        assert_eq!(arc.flow(), 4);
        assert_eq!(arc.forward_residual_capacity(), 6);
        assert_eq!(arc.reverse_residual_capacity(), 4);
        assert_eq!(arc.forward_residual_cost(), 3);
        assert_eq!(arc.reverse_residual_cost(), -3);

        arc.cancel(3);
        assert_eq!(arc.flow(), 1);
    }

    #[test]
    fn negative_capacity_is_rejected() {
        assert_eq!(
            Arc::<i32>::new(0, 1, -1, 0).unwrap_err(),
            Error::InvalidCapacity
        );
    }

    #[test]
    fn zero_capacity_has_no_forward_residual() {
        let arc = Arc::<i32>::new(2, 5, 0, 7).unwrap();
        assert_eq!(arc.forward_residual_capacity(), 0);
        assert_eq!(arc.reverse_residual_capacity(), 0);
    }
}
