#![warn(clippy::all, clippy::pedantic)]

use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use csv::Reader as CsvReader;
use serde::Deserialize;

use cdnflow::{report, FlowNetwork};

/// Tool for solving CDN content-routing problems as min-cost max-flow
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the experimental validation suite and write a JSON report
    Experiments {
        /// Path to output JSON file
        #[arg(short, long)]
        output_file: PathBuf,
    },
    /// Solve one network read from CSV (fields - `tail`, `head`, `capacity`, `unit_cost`)
    Solve {
        /// Path to input CSV file with arcs
        #[arg(short, long)]
        input_file: PathBuf,

        /// Super-source node id
        #[arg(short, long)]
        source: usize,

        /// Super-sink node id
        #[arg(short = 't', long)]
        sink: usize,

        /// Units of flow to route
        #[arg(short, long)]
        demand: i64,
    },
}

/// One arc row of the input CSV.
#[derive(Debug, Deserialize)]
struct ArcRecord {
    tail: usize,
    head: usize,
    capacity: i64,
    unit_cost: i64,
}

// Read the arcs from CSV and size the node set from the highest id seen
fn read_arcs_csv(reader: impl Read) -> Result<FlowNetwork<i64>, Box<dyn Error>> {
    let mut rdr = CsvReader::from_reader(reader);
    let rows: Result<Vec<ArcRecord>, _> = rdr.deserialize().collect();
    let rows = rows?;

    let num_nodes = rows
        .iter()
        .map(|row| row.tail.max(row.head) + 1)
        .max()
        .unwrap_or(0);
    let mut network = FlowNetwork::new(num_nodes);
    for row in rows {
        network.add_arc(row.tail, row.head, row.capacity, row.unit_cost)?;
    }
    Ok(network)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Experiments { output_file } => {
            let report = report::run_experiments()?;
            std::fs::write(output_file, report.to_json()?)?;
        }
        Command::Solve {
            input_file,
            source,
            sink,
            demand,
        } => {
            let input_file = File::open(input_file)?;
            let mut network = read_arcs_csv(&input_file)?;
            let result = network.solve(source, sink, demand)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}
