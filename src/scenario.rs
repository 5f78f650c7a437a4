//! Synthetic layered CDN topologies.
//!
//! Networks follow the super-source -> origins -> caches -> edge servers ->
//! super-sink shape; the demand is the sum of per-edge-server demands, which
//! also cap the sink arcs. Generation is deterministic per seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;
use crate::graph::FlowNetwork;

/// A generated routing problem together with its layer bookkeeping.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub network: FlowNetwork<i64>,
    pub source: usize,
    pub sink: usize,
    pub demand: i64,
    pub num_origins: usize,
    pub num_caches: usize,
    pub num_edge_servers: usize,
}

impl Scenario {
    pub fn total_nodes(&self) -> usize {
        self.network.num_nodes()
    }

    pub fn num_arcs(&self) -> usize {
        self.network.arc_count()
    }
}

/// Wiring of one layer transition: connection probability plus half-open
/// sampling ranges for capacity and unit cost.
#[derive(Clone, Copy, Debug)]
pub struct LinkCfg {
    pub connectivity: f64,
    pub capacity: (i64, i64),
    pub unit_cost: (i64, i64),
}

/// Parameters for [`layered`].
#[derive(Clone, Copy, Debug)]
pub struct LayeredCfg {
    pub num_origins: usize,
    pub num_caches: usize,
    pub num_edge_servers: usize,
    pub origin_cache: LinkCfg,
    pub cache_edge: LinkCfg,
    /// Half-open range the per-edge-server demand is sampled from.
    pub edge_demand: (i64, i64),
    pub seed: u64,
}

/// The reference 8-node network: one origin, two caches, three edge servers.
pub fn small() -> Result<Scenario, Error> {
    let mut network = FlowNetwork::new(8);
    network.add_arc(0, 1, 100, 0)?;
    // origin to caches
    network.add_arc(1, 2, 50, 5)?;
    network.add_arc(1, 3, 50, 3)?;
    // caches to edge servers
    network.add_arc(2, 4, 30, 2)?;
    network.add_arc(2, 5, 30, 3)?;
    network.add_arc(3, 5, 30, 1)?;
    network.add_arc(3, 6, 30, 4)?;
    // edge servers to the sink
    network.add_arc(4, 7, 20, 0)?;
    network.add_arc(5, 7, 30, 0)?;
    network.add_arc(6, 7, 20, 0)?;

    Ok(Scenario {
        network,
        source: 0,
        sink: 7,
        demand: 70,
        num_origins: 1,
        num_caches: 2,
        num_edge_servers: 3,
    })
}

/// A fully wired origin layer over ten sparsely reachable edge servers.
pub fn medium(seed: u64) -> Result<Scenario, Error> {
    layered(LayeredCfg {
        num_origins: 2,
        num_caches: 5,
        num_edge_servers: 10,
        origin_cache: LinkCfg {
            connectivity: 1.0,
            capacity: (30, 80),
            unit_cost: (1, 10),
        },
        cache_edge: LinkCfg {
            connectivity: 0.4,
            capacity: (20, 50),
            unit_cost: (1, 5),
        },
        edge_demand: (20, 50),
        seed,
    })
}

/// A sparse network with the given layer sizes.
pub fn large(
    num_origins: usize,
    num_caches: usize,
    num_edge_servers: usize,
    seed: u64,
) -> Result<Scenario, Error> {
    layered(LayeredCfg {
        num_origins,
        num_caches,
        num_edge_servers,
        origin_cache: LinkCfg {
            connectivity: 0.5,
            capacity: (50, 150),
            unit_cost: (1, 8),
        },
        cache_edge: LinkCfg {
            connectivity: 0.3,
            capacity: (20, 80),
            unit_cost: (1, 5),
        },
        edge_demand: (30, 60),
        seed,
    })
}

/// Builds a layered network from `cfg`.
///
/// Node layout: source at 0, then origins, caches and edge servers in
/// consecutive blocks, sink last. Source arcs are sized to the total demand
/// at zero cost; sink arcs carry each edge server's own demand at zero cost.
pub fn layered(cfg: LayeredCfg) -> Result<Scenario, Error> {
    let total_nodes = 2 + cfg.num_origins + cfg.num_caches + cfg.num_edge_servers;
    let source = 0;
    let sink = total_nodes - 1;
    let origin_start = 1;
    let cache_start = 1 + cfg.num_origins;
    let edge_start = 1 + cfg.num_origins + cfg.num_caches;

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut network = FlowNetwork::new(total_nodes);

    let demands: Vec<i64> = (0..cfg.num_edge_servers)
        .map(|_| rng.gen_range(cfg.edge_demand.0..cfg.edge_demand.1))
        .collect();
    let demand: i64 = demands.iter().sum();

    for origin in 0..cfg.num_origins {
        network.add_arc(source, origin_start + origin, demand, 0)?;
    }

    for origin in 0..cfg.num_origins {
        for cache in 0..cfg.num_caches {
            if rng.gen::<f64>() < cfg.origin_cache.connectivity {
                network.add_arc(
                    origin_start + origin,
                    cache_start + cache,
                    rng.gen_range(cfg.origin_cache.capacity.0..cfg.origin_cache.capacity.1),
                    rng.gen_range(cfg.origin_cache.unit_cost.0..cfg.origin_cache.unit_cost.1),
                )?;
            }
        }
    }

    for cache in 0..cfg.num_caches {
        for edge in 0..cfg.num_edge_servers {
            if rng.gen::<f64>() < cfg.cache_edge.connectivity {
                network.add_arc(
                    cache_start + cache,
                    edge_start + edge,
                    rng.gen_range(cfg.cache_edge.capacity.0..cfg.cache_edge.capacity.1),
                    rng.gen_range(cfg.cache_edge.unit_cost.0..cfg.cache_edge.unit_cost.1),
                )?;
            }
        }
    }

    for (edge, server_demand) in demands.iter().enumerate() {
        network.add_arc(edge_start + edge, sink, *server_demand, 0)?;
    }

    Ok(Scenario {
        network,
        source,
        sink,
        demand,
        num_origins: cfg.num_origins,
        num_caches: cfg.num_caches,
        num_edge_servers: cfg.num_edge_servers,
    })
}
