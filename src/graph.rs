use crate::algo::{MinCostFlow, SuccessiveShortestPaths};
use crate::arc::Arc;
use crate::error::Error;
use crate::result::FlowResult;
use crate::unit::Unit;

/// A directed, capacitated, cost-weighted network over dense node ids.
///
/// The node set is fixed at construction and arcs are append-only; their
/// flows mutate only while [`FlowNetwork::solve`] runs. `out` and `incoming`
/// keep the arc indices incident to each node, so the shortest-path probe
/// can traverse residual arcs in both directions.
#[derive(Clone, Debug, Default)]
pub struct FlowNetwork<Int> {
    arcs: Vec<Arc<Int>>,
    out: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

impl<Int: Unit> FlowNetwork<Int> {
    pub fn new(num_nodes: usize) -> Self {
        Self {
            arcs: Vec::new(),
            out: vec![Vec::new(); num_nodes],
            incoming: vec![Vec::new(); num_nodes],
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.out.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Appends an arc and returns its index. Parallel arcs between the same
    /// pair of nodes are permitted and tracked independently.
    pub fn add_arc(
        &mut self,
        tail: usize,
        head: usize,
        capacity: Int,
        unit_cost: Int,
    ) -> Result<usize, Error> {
        self.check_node(tail)?;
        self.check_node(head)?;
        if tail == head {
            return Err(Error::SelfLoop(tail));
        }

        let arc = Arc::new(tail, head, capacity, unit_cost)?;
        let index = self.arcs.len();
        self.arcs.push(arc);
        self.out[tail].push(index);
        self.incoming[head].push(index);
        Ok(index)
    }

    pub fn arc(&self, index: usize) -> Result<&Arc<Int>, Error> {
        self.arcs.get(index).ok_or(Error::InvalidArc {
            index,
            arc_count: self.arcs.len(),
        })
    }

    /// Current flow on the arc at `index`.
    pub fn arc_flow(&self, index: usize) -> Result<Int, Error> {
        self.arc(index).map(Arc::flow)
    }

    /// Indices of arcs whose tail is `node`.
    pub fn forward_arcs(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.out[node].iter().copied()
    }

    /// Indices of arcs whose head is `node`.
    pub fn incoming_arcs(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.incoming[node].iter().copied()
    }

    /// Pushes up to `demand` units from `source` to `sink` along successively
    /// cheapest residual paths.
    ///
    /// Arc flows are left in place on return even when the demand could not
    /// be met in full; a partial flow is still a min-cost flow at its volume.
    pub fn solve(
        &mut self,
        source: usize,
        sink: usize,
        demand: Int,
    ) -> Result<FlowResult<Int>, Error> {
        SuccessiveShortestPaths::default().min_cost_flow(self, source, sink, demand)
    }

    pub(crate) fn arcs(&self) -> &[Arc<Int>] {
        &self.arcs
    }

    pub(crate) fn arc_mut(&mut self, index: usize) -> &mut Arc<Int> {
        &mut self.arcs[index]
    }

    fn check_node(&self, node: usize) -> Result<(), Error> {
        if node >= self.num_nodes() {
            return Err(Error::InvalidNode {
                node,
                num_nodes: self.num_nodes(),
            });
        }
        Ok(())
    }
}
