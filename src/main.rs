//! Entry point for the nimbostat application.
//! Handles CLI parsing, input discovery, and runs the aggregation pipeline:
//! discover -> extract -> stack -> reduce -> write.

use clap::Parser;
use nimbostat::cli::Args;
use nimbostat::discovery::discover_inputs;
use nimbostat::ensemble::GridStack;
use nimbostat::metadata::{print_metadata, summarize_grid};
use nimbostat::netcdf_io::{read_observation_grid, GridWriter};
use nimbostat::parallel::ParallelConfig;
use nimbostat::statistics::{ReduceOperation, StackReduction};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    println!(
        r#"
------------------------------------------------------------------
         _   _ _           _           ____  _        _
        | \ | (_)_ __ ___ | |__   ___ / ___|| |_ __ _| |_
        |  \| | | '_ ` _ \| '_ \ / _ \\___ \| __/ _` | __|
        | |\  | | | | | | | |_) | (_) |___) | || (_| | |_
        |_| \_|_|_| |_| |_|_.__/ \___/|____/ \__\__,_|\__|
                  Rust-based cloud-grid aggregator
------------------------------------------------------------------
                        "#
    );

    ParallelConfig::new(args.threads).setup_global_pool()?;

    let paths = discover_inputs(&args.pattern)?;
    println!(
        "Found {} input files matching '{}'",
        paths.len(),
        args.pattern
    );

    let mut grids = Vec::with_capacity(paths.len());
    for path in paths {
        let grid = read_observation_grid(&path, &args.variable)?;
        if args.verbose {
            summarize_grid(&path.display().to_string(), &grid);
        }
        grids.push((path, grid));
    }

    let stack = GridStack::from_grids(grids)?;

    let operation = match args.exceedance {
        Some(threshold) => ReduceOperation::Exceedance { threshold },
        None => ReduceOperation::Mean,
    };

    println!(
        "⚡ Computing {} across {} grids",
        operation.as_str(),
        stack.len()
    );
    let summary = stack.reduce(operation)?;

    if args.verbose {
        summarize_grid(operation.as_str(), &summary);
    }

    GridWriter::new(&args.output).write_summary(&summary, operation)?;
    println!("✅ Saved result to {}", args.output.display());

    if args.verbose {
        let file = netcdf::open(&args.output)?;
        print_metadata(&file)?;
    }

    Ok(())
}
