//! Experiment harness and JSON report emission.
//!
//! The report layout (four top-level arrays keyed `small_scale`,
//! `medium_scale`, `large_scale` and `scalability`) is what the downstream
//! plotting tooling consumes; field names and the `elapsed_ms` /
//! `elapsed_time_ms` split are part of that contract.

use serde::Serialize;

use crate::error::Error;
use crate::scenario::{self, Scenario};

const SMALL_REPS: usize = 5;
const MEDIUM_REPS: usize = 5;
const LARGE_REPS: usize = 3;
const SCALABILITY_SCALES: usize = 5;
const SEED: u64 = 42;

/// One timed run over a fixed-size scenario.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ScaleRecord {
    pub elapsed_ms: f64,
    pub flow: i64,
    pub cost: i64,
    pub total_nodes: usize,
    pub num_edges: usize,
}

/// One point of the scalability sweep. `num_edges` counts edge servers,
/// mirroring the layer parameters next to it.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ScalabilityRecord {
    pub scale: usize,
    pub num_origins: usize,
    pub num_caches: usize,
    pub num_edges: usize,
    pub total_nodes: usize,
    pub elapsed_time_ms: f64,
    pub flow: i64,
    pub cost: i64,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub small_scale: Vec<ScaleRecord>,
    pub medium_scale: Vec<ScaleRecord>,
    pub large_scale: Vec<ScaleRecord>,
    pub scalability: Vec<ScalabilityRecord>,
}

impl Report {
    /// Serialises in the four-key layout the plotting scripts consume.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs the full validation suite: repeated small/medium/large solves plus
/// a scalability sweep over growing layer sizes.
pub fn run_experiments() -> Result<Report, Error> {
    let mut report = Report::default();

    log::info!("running small scale ({SMALL_REPS} repetitions)");
    for _ in 0..SMALL_REPS {
        report.small_scale.push(run_scale(scenario::small()?)?);
    }
    log::info!("small scale average: {:.4} ms", average_ms(&report.small_scale));

    log::info!("running medium scale ({MEDIUM_REPS} repetitions)");
    for _ in 0..MEDIUM_REPS {
        report.medium_scale.push(run_scale(scenario::medium(SEED)?)?);
    }
    log::info!("medium scale average: {:.4} ms", average_ms(&report.medium_scale));

    log::info!("running large scale ({LARGE_REPS} repetitions)");
    for _ in 0..LARGE_REPS {
        report.large_scale.push(run_scale(scenario::large(5, 15, 50, SEED)?)?);
    }
    log::info!("large scale average: {:.4} ms", average_ms(&report.large_scale));

    log::info!("running scalability sweep ({SCALABILITY_SCALES} scales)");
    for scale in 1..=SCALABILITY_SCALES {
        let scenario = scenario::large(1 + scale, 5 + 5 * scale, 10 + 10 * scale, SEED)?;
        let num_edge_servers = scenario.num_edge_servers;
        let record = run_scale(scenario)?;
        log::info!(
            "scale {scale}: {} nodes, {:.4} ms",
            record.total_nodes,
            record.elapsed_ms
        );
        report.scalability.push(ScalabilityRecord {
            scale,
            num_origins: 1 + scale,
            num_caches: 5 + 5 * scale,
            num_edges: num_edge_servers,
            total_nodes: record.total_nodes,
            elapsed_time_ms: record.elapsed_ms,
            flow: record.flow,
            cost: record.cost,
        });
    }

    Ok(report)
}

fn run_scale(mut scenario: Scenario) -> Result<ScaleRecord, Error> {
    let result = scenario
        .network
        .solve(scenario.source, scenario.sink, scenario.demand)?;
    Ok(ScaleRecord {
        elapsed_ms: result.elapsed_time_ms as f64,
        flow: result.total_flow,
        cost: result.total_cost,
        total_nodes: scenario.total_nodes(),
        num_edges: scenario.num_arcs(),
    })
}

fn average_ms(records: &[ScaleRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| r.elapsed_ms).sum::<f64>() / records.len() as f64
}
