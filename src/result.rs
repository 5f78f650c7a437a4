use serde::Serialize;

/// Aggregate outcome of one solve run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FlowResult<Int> {
    /// Units of flow realised, capped by the requested demand.
    pub total_flow: Int,
    /// Sum of `flow * unit_cost` over all arcs.
    pub total_cost: Int,
    /// Whether the demand was met in full.
    pub satisfied: bool,
    /// Wall-clock duration of the solve.
    pub elapsed_time_ms: u64,
}
