use std::fmt::Debug;

pub mod spfa;
pub mod ssp;

pub use ssp::SuccessiveShortestPaths;

use crate::graph::FlowNetwork;
use crate::result::FlowResult;

/// The seam between the flow network and a min-cost flow backend.
pub trait MinCostFlow {
    type Int;
    type Error: Debug;

    /// Computes a min-cost flow of at most `demand` units from `source` to
    /// `sink`, mutating arc flows in place.
    fn min_cost_flow(
        &mut self,
        network: &mut FlowNetwork<Self::Int>,
        source: usize,
        sink: usize,
        demand: Self::Int,
    ) -> Result<FlowResult<Self::Int>, Self::Error>;
}
