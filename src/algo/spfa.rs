use std::collections::VecDeque;

use crate::graph::FlowNetwork;
use crate::unit::Unit;

/// Outcome of one cheapest-path probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Probe<Int> {
    /// Bottleneck amount pushed along the path; zero when no path exists.
    pub amount: Int,
    /// Cost of one unit along the path.
    pub unit_cost: Int,
}

impl<Int: Unit> Probe<Int> {
    fn empty() -> Self {
        Self {
            amount: Int::zero(),
            unit_cost: Int::zero(),
        }
    }
}

/// Finds a cheapest augmenting path from `source` to `sink` in the current
/// residual graph and pushes its bottleneck amount (at most `cap`) along it.
///
/// Shortest-Path Faster Algorithm: a queue-based Bellman-Ford. Cancellation
/// exposes reverse arcs at negated cost, so Dijkstra would mis-rank paths
/// here; FIFO relaxation tolerates negative costs as long as the residual
/// graph stays free of negative cycles, which augmenting along cheapest
/// paths guarantees.
pub(crate) fn cheapest_augmenting_path<Int: Unit>(
    network: &mut FlowNetwork<Int>,
    source: usize,
    sink: usize,
    cap: Int,
) -> Probe<Int> {
    let num_nodes = network.num_nodes();
    let infinity = Int::infinity();

    let mut dist = vec![infinity; num_nodes];
    let mut parent: Vec<Option<usize>> = vec![None; num_nodes];
    // Whether the parent arc was traversed against its stored direction,
    // recorded on the successor node.
    let mut via_reverse = vec![false; num_nodes];
    let mut in_queue = vec![false; num_nodes];
    let mut queue = VecDeque::new();

    dist[source] = Int::zero();
    queue.push_back(source);
    in_queue[source] = true;

    let max_pops = num_nodes.saturating_mul(num_nodes).saturating_mul(10);
    let mut pops = 0_usize;

    while let Some(u) = queue.pop_front() {
        if pops >= max_pops {
            // Never reached on a correctly built network; it means the
            // residual graph grew a negative-cost cycle.
            log::warn!("relaxation cap of {max_pops} pops hit, aborting probe");
            return Probe::empty();
        }
        pops += 1;
        in_queue[u] = false;

        for index in network.forward_arcs(u) {
            let arc = &network.arcs()[index];
            if arc.forward_residual_capacity() > Int::zero() {
                let next = dist[u] + arc.forward_residual_cost();
                if next < dist[arc.head()] {
                    dist[arc.head()] = next;
                    parent[arc.head()] = Some(index);
                    via_reverse[arc.head()] = false;
                    if !in_queue[arc.head()] {
                        queue.push_back(arc.head());
                        in_queue[arc.head()] = true;
                    }
                }
            }
        }

        // Arcs ending at `u` can be traversed backwards while they carry
        // flow, at negated cost.
        for index in network.incoming_arcs(u) {
            let arc = &network.arcs()[index];
            if arc.reverse_residual_capacity() > Int::zero() {
                let next = dist[u] + arc.reverse_residual_cost();
                if next < dist[arc.tail()] {
                    dist[arc.tail()] = next;
                    parent[arc.tail()] = Some(index);
                    via_reverse[arc.tail()] = true;
                    if !in_queue[arc.tail()] {
                        queue.push_back(arc.tail());
                        in_queue[arc.tail()] = true;
                    }
                }
            }
        }
    }

    if dist[sink] == infinity {
        return Probe::empty();
    }

    // Walk the parent chain sink -> source, collecting each arc together
    // with the direction it was traversed in and the path bottleneck.
    let max_steps = num_nodes + 1;
    let mut path = Vec::new();
    let mut bottleneck = cap;
    let mut current = sink;

    while current != source {
        if path.len() >= max_steps {
            log::warn!("path walk exceeded {max_steps} steps, parent chain is corrupt");
            return Probe::empty();
        }
        let index = match parent[current] {
            Some(index) => index,
            None => {
                log::warn!("parent chain broke at node {current}");
                return Probe::empty();
            }
        };
        let arc = &network.arcs()[index];
        let reverse = via_reverse[current];
        if reverse {
            bottleneck = bottleneck.min(arc.reverse_residual_capacity());
            current = arc.head();
        } else {
            bottleneck = bottleneck.min(arc.forward_residual_capacity());
            current = arc.tail();
        }
        path.push((index, reverse));
    }

    for (index, reverse) in path {
        let arc = network.arc_mut(index);
        if reverse {
            arc.cancel(bottleneck);
        } else {
            arc.augment(bottleneck);
        }
    }

    Probe {
        amount: bottleneck,
        unit_cost: dist[sink],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_cheaper_of_two_paths() {
        let mut network = FlowNetwork::<i64>::new(4);
        network.add_arc(0, 1, 10, 1).unwrap();
        network.add_arc(0, 2, 10, 5).unwrap();
        network.add_arc(1, 3, 10, 1).unwrap();
        network.add_arc(2, 3, 10, 1).unwrap();

        let probe = cheapest_augmenting_path(&mut network, 0, 3, 100);
        assert_eq!(probe.amount, 10);
        assert_eq!(probe.unit_cost, 2);
        assert_eq!(network.arc_flow(0).unwrap(), 10);
        assert_eq!(network.arc_flow(1).unwrap(), 0);
    }

    #[test]
    fn bottleneck_is_capped_by_the_flow_limit() {
        let mut network = FlowNetwork::<i64>::new(2);
        network.add_arc(0, 1, 10, 1).unwrap();

        let probe = cheapest_augmenting_path(&mut network, 0, 1, 4);
        assert_eq!(probe.amount, 4);
        assert_eq!(network.arc_flow(0).unwrap(), 4);
    }

    #[test]
    fn unreachable_sink_yields_empty_probe() {
        let mut network = FlowNetwork::<i64>::new(3);
        network.add_arc(0, 1, 5, 1).unwrap();

        let probe = cheapest_augmenting_path(&mut network, 0, 2, 10);
        assert_eq!(probe, Probe::empty());
        assert_eq!(network.arc_flow(0).unwrap(), 0);
    }

    #[test]
    fn saturated_arcs_are_skipped() {
        let mut network = FlowNetwork::<i64>::new(3);
        network.add_arc(0, 1, 2, 1).unwrap();
        network.add_arc(1, 2, 2, 1).unwrap();
        network.add_arc(0, 2, 5, 100).unwrap();

        let first = cheapest_augmenting_path(&mut network, 0, 2, 10);
        assert_eq!(first.amount, 2);
        assert_eq!(first.unit_cost, 2);

        // The cheap chain is full, only the expensive arc remains.
        let second = cheapest_augmenting_path(&mut network, 0, 2, 10);
        assert_eq!(second.amount, 5);
        assert_eq!(second.unit_cost, 100);
    }

    #[test]
    fn probe_cancels_flow_through_a_reverse_arc() {
        // One unit on 0->1->2->3 blocks the middle node; the next probe must
        // route 0->2, push the earlier unit back over 1->2 and finish 1->3.
        let mut network = FlowNetwork::<i64>::new(4);
        network.add_arc(0, 1, 1, 1).unwrap();
        let middle = network.add_arc(1, 2, 1, 1).unwrap();
        network.add_arc(2, 3, 1, 1).unwrap();
        network.add_arc(0, 2, 1, 3).unwrap();
        network.add_arc(1, 3, 1, 4).unwrap();

        let first = cheapest_augmenting_path(&mut network, 0, 3, 10);
        assert_eq!(first.amount, 1);
        assert_eq!(first.unit_cost, 3);
        assert_eq!(network.arc_flow(middle).unwrap(), 1);

        let second = cheapest_augmenting_path(&mut network, 0, 3, 10);
        assert_eq!(second.amount, 1);
        assert_eq!(second.unit_cost, 6);
        assert_eq!(network.arc_flow(middle).unwrap(), 0);
    }
}
