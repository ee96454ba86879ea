//! Defines command-line interface options using `clap` for the nimbostat application.

use crate::netcdf_io::OBSERVATION_VARIABLE;
use clap::Parser;
use std::path::PathBuf;

/// A CLI tool for aggregating gridded observation files
#[derive(Parser, Debug)]
#[command(
    version,
    name = "nimbostat",
    about = "Aggregates gridded cloud-fraction observations into NetCDF summaries"
)]
pub struct Args {
    /// Glob pattern selecting the input observation files
    #[arg(short, long, default_value = "scrub*.nc")]
    pub pattern: String,

    /// Name of the observation variable to read from each input file
    #[arg(long, default_value = OBSERVATION_VARIABLE)]
    pub variable: String,

    /// Path of the output NetCDF file
    #[arg(short, long, default_value = "new_netcdf.nc")]
    pub output: PathBuf,

    /// Compute the probability of exceeding this cloud fraction instead of the mean
    #[arg(long, value_name = "THRESHOLD")]
    pub exceedance: Option<f32>,

    /// Number of threads to use for parallel processing. Defaults to number of CPU cores.
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
