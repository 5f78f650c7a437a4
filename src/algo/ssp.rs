use std::marker::PhantomData;
use std::time::Instant;

use crate::algo::{spfa, MinCostFlow};
use crate::error::Error;
use crate::graph::FlowNetwork;
use crate::result::FlowResult;
use crate::unit::Unit;

/// Successive Shortest Paths backend.
///
/// Repeatedly augments along a cheapest residual path until the demand is
/// met or the sink becomes unreachable. Because every augmentation follows
/// a cheapest path, the residual graph never grows a negative-cost cycle
/// and the realised flow is the cheapest one of its volume.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuccessiveShortestPaths<Int>(PhantomData<Int>);

impl<Int: Unit> MinCostFlow for SuccessiveShortestPaths<Int> {
    type Int = Int;
    type Error = Error;

    fn min_cost_flow(
        &mut self,
        network: &mut FlowNetwork<Int>,
        source: usize,
        sink: usize,
        demand: Int,
    ) -> Result<FlowResult<Int>, Error> {
        let num_nodes = network.num_nodes();
        if source >= num_nodes {
            return Err(Error::InvalidNode {
                node: source,
                num_nodes,
            });
        }
        if sink >= num_nodes {
            return Err(Error::InvalidNode {
                node: sink,
                num_nodes,
            });
        }
        if source == sink {
            return Err(Error::SameEndpoints);
        }
        if demand < Int::zero() {
            return Err(Error::NegativeDemand);
        }

        let started = Instant::now();
        let mut total_flow = Int::zero();
        let mut total_cost = Int::zero();
        let mut satisfied = true;

        while total_flow < demand {
            let probe =
                spfa::cheapest_augmenting_path(network, source, sink, demand - total_flow);
            if probe.amount == Int::zero() {
                satisfied = false;
                break;
            }
            log::trace!(
                "augmented {} units at unit cost {}",
                probe.amount,
                probe.unit_cost
            );
            total_flow += probe.amount;
            total_cost += probe.amount * probe.unit_cost;
        }

        log::debug!("pushed {total_flow} of {demand} units for total cost {total_cost}");

        Ok(FlowResult {
            total_flow,
            total_cost,
            satisfied,
            elapsed_time_ms: elapsed_ms(started),
        })
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(
        network: &mut FlowNetwork<i64>,
        source: usize,
        sink: usize,
        demand: i64,
    ) -> FlowResult<i64> {
        network.solve(source, sink, demand).unwrap()
    }

    #[test]
    fn linear_chain_is_limited_by_the_bottleneck() {
        let mut network = FlowNetwork::new(3);
        network.add_arc(0, 1, 5, 1).unwrap();
        network.add_arc(1, 2, 3, 1).unwrap();

        let result = solve(&mut network, 0, 2, 10);
        assert_eq!(result.total_flow, 3);
        assert_eq!(result.total_cost, 6);
        assert!(!result.satisfied);
    }

    #[test]
    fn parallel_paths_fill_the_cheap_one_first() {
        let mut network = FlowNetwork::new(4);
        network.add_arc(0, 1, 10, 1).unwrap();
        network.add_arc(0, 2, 10, 5).unwrap();
        network.add_arc(1, 3, 10, 1).unwrap();
        network.add_arc(2, 3, 10, 1).unwrap();

        let result = solve(&mut network, 0, 3, 15);
        assert_eq!(result.total_flow, 15);
        // 10 units over the cost-2 path, 5 over the cost-6 one.
        assert_eq!(result.total_cost, 50);
        assert!(result.satisfied);
    }

    #[test]
    fn second_augmentation_cancels_part_of_the_first() {
        let mut network = FlowNetwork::new(4);
        network.add_arc(0, 1, 1, 1).unwrap();
        let middle = network.add_arc(1, 2, 1, 1).unwrap();
        network.add_arc(2, 3, 1, 1).unwrap();
        network.add_arc(0, 2, 1, 3).unwrap();
        network.add_arc(1, 3, 1, 4).unwrap();

        // After one unit the middle arc carries flow.
        let mut partial = network.clone();
        let first = solve(&mut partial, 0, 3, 1);
        assert_eq!(first.total_flow, 1);
        assert_eq!(partial.arc_flow(middle).unwrap(), 1);

        // The second augmentation pushes that unit back out again.
        let result = solve(&mut network, 0, 3, 2);
        assert_eq!(result.total_flow, 2);
        assert_eq!(result.total_cost, 9);
        assert!(result.satisfied);
        assert_eq!(network.arc_flow(middle).unwrap(), 0);
    }

    #[test]
    fn expensive_detour_is_taken_only_when_needed() {
        let mut network = FlowNetwork::new(4);
        network.add_arc(0, 1, 1, 1).unwrap();
        network.add_arc(0, 2, 1, 100).unwrap();
        network.add_arc(1, 2, 1, 1).unwrap();
        network.add_arc(1, 3, 1, 1).unwrap();
        network.add_arc(2, 3, 1, 1).unwrap();

        let result = solve(&mut network, 0, 3, 2);
        assert_eq!(result.total_flow, 2);
        // The only feasible two-unit flow: one unit 0->1->3, one 0->2->3.
        assert_eq!(result.total_cost, 103);
        assert!(result.satisfied);
    }

    #[test]
    fn cdn_fan_out_matches_the_optimum() {
        let mut network = FlowNetwork::new(8);
        network.add_arc(0, 1, 100, 0).unwrap();
        network.add_arc(1, 2, 50, 5).unwrap();
        network.add_arc(1, 3, 50, 3).unwrap();
        network.add_arc(2, 4, 30, 2).unwrap();
        network.add_arc(2, 5, 30, 3).unwrap();
        network.add_arc(3, 5, 30, 1).unwrap();
        network.add_arc(3, 6, 30, 4).unwrap();
        network.add_arc(4, 7, 20, 0).unwrap();
        network.add_arc(5, 7, 30, 0).unwrap();
        network.add_arc(6, 7, 20, 0).unwrap();

        let result = solve(&mut network, 0, 7, 70);
        assert_eq!(result.total_flow, 70);
        // 20 units via each 7-cost branch plus 30 via the 4-cost one.
        assert_eq!(result.total_cost, 400);
        assert!(result.satisfied);
    }

    #[test]
    fn zero_demand_succeeds_without_touching_arcs() {
        let mut network = FlowNetwork::new(3);
        let arc = network.add_arc(0, 1, 5, 1).unwrap();
        network.add_arc(1, 2, 5, 1).unwrap();

        let result = solve(&mut network, 0, 2, 0);
        assert_eq!(result.total_flow, 0);
        assert_eq!(result.total_cost, 0);
        assert!(result.satisfied);
        assert_eq!(network.arc_flow(arc).unwrap(), 0);
    }

    #[test]
    fn disconnected_sink_yields_a_zero_flow() {
        let mut network = FlowNetwork::<i64>::new(4);
        network.add_arc(0, 1, 5, 1).unwrap();
        network.add_arc(2, 3, 5, 1).unwrap();

        let result = solve(&mut network, 0, 3, 7);
        assert_eq!(result.total_flow, 0);
        assert_eq!(result.total_cost, 0);
        assert!(!result.satisfied);
    }

    #[test]
    fn zero_capacity_arcs_never_carry_flow() {
        let mut network = FlowNetwork::new(3);
        let dead = network.add_arc(0, 1, 0, 0).unwrap();
        network.add_arc(0, 1, 4, 2).unwrap();
        network.add_arc(1, 2, 4, 1).unwrap();

        let result = solve(&mut network, 0, 2, 10);
        assert_eq!(result.total_flow, 4);
        assert_eq!(network.arc_flow(dead).unwrap(), 0);
    }

    #[test]
    fn preconditions_are_checked_before_solving() {
        let mut network = FlowNetwork::<i64>::new(3);
        network.add_arc(0, 1, 5, 1).unwrap();
        network.add_arc(1, 2, 5, 1).unwrap();

        assert_eq!(
            network.solve(3, 2, 1).unwrap_err(),
            Error::InvalidNode {
                node: 3,
                num_nodes: 3
            }
        );
        assert_eq!(
            network.solve(0, 4, 1).unwrap_err(),
            Error::InvalidNode {
                node: 4,
                num_nodes: 3
            }
        );
        assert_eq!(network.solve(1, 1, 1).unwrap_err(), Error::SameEndpoints);
        assert_eq!(network.solve(0, 2, -1).unwrap_err(), Error::NegativeDemand);

        // Failed preconditions leave the graph untouched.
        assert_eq!(network.arc_flow(0).unwrap(), 0);
        assert_eq!(network.arc_flow(1).unwrap(), 0);
    }
}
