//! Nodal - DC circuit solver
//!
//! Solves a resistor / voltage source / current source netlist with
//! Modified Nodal Analysis.
//!
//! # Usage
//!
//! ```bash
//! nodal circuit.cir
//! RUST_LOG=trace nodal --raw circuit.cir
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nodal_core::{
    circuit::{Netlist, NodeId},
    error::Result,
    netlist, solve_netlist, Solution,
};

/// DC operating point solver for linear resistive circuits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(value_name = "NETLIST_FILE")]
    netlist_file: PathBuf,

    /// Print the bare solution vector, one value per line
    #[arg(long)]
    raw: bool,

    /// Digits after the decimal point
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Log solver progress (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_internal() {
                log::error!("{e}");
            }
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let netlist = netlist::parse_file(&args.netlist_file)?;
    log::info!(
        "read {} components from {}",
        netlist.len(),
        args.netlist_file.display()
    );

    let solution = solve_netlist(&netlist)?;

    if args.raw {
        for v in solution.values() {
            println!("{:.*}", args.precision, v);
        }
    } else {
        print_labelled(&netlist, &solution, args.precision);
    }

    Ok(())
}

fn print_labelled(netlist: &Netlist, solution: &Solution, precision: usize) {
    for n in 1..=solution.node_count() {
        let node = NodeId(n);
        if let Some(v) = solution.voltage(node) {
            println!("V({}) = {:.*}", node, precision, v);
        }
    }
    for (branch, source) in netlist.voltage_sources() {
        if let Some(i) = solution.source_current(branch) {
            println!("I({}) = {:.*}", source.name, precision, i);
        }
    }
}
