use displaydoc::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Node {node} is outside the graph's node range `0..{num_nodes}`
    InvalidNode { node: usize, num_nodes: usize },
    /// Self-loop arcs are not supported (node {0})
    SelfLoop(usize),
    /// Invalid arc capacity, expected non-negative value
    InvalidCapacity,
    /// Source and sink must be distinct nodes
    SameEndpoints,
    /// Invalid demand, expected non-negative value
    NegativeDemand,
    /// Arc index {index} is outside the arc list of length {arc_count}
    InvalidArc { index: usize, arc_count: usize },
}

impl std::error::Error for Error {}
